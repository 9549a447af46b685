//! File feed.

use crate::FeedError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn open(path: &Path) -> Result<BufReader<File>, FeedError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| FeedError::Open {
            path: path.to_path_buf(),
            source,
        })
}
