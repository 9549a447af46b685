//! clf2tab-feeds — line sources for clf2tab.
//!
//! A feed is anything that yields lines in order. [`InputSource`] names where
//! the bytes come from; [`LineReader`] turns any `BufRead` into lossy UTF-8
//! lines with their terminator stripped.

pub mod file;
pub mod lines;
pub mod stdin;

pub use lines::LineReader;

use std::io::BufRead;
use std::path::PathBuf;

/// Where input lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Open the source for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, FeedError> {
        match self {
            InputSource::Stdin => Ok(Box::new(stdin::open())),
            InputSource::File(path) => Ok(Box::new(file::open(path)?)),
        }
    }

    /// Open the source and wrap it in a [`LineReader`].
    pub fn lines(&self) -> Result<LineReader<Box<dyn BufRead>>, FeedError> {
        self.open().map(LineReader::new)
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Failure to open a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
