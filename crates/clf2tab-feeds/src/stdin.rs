//! Stdin feed.

use std::io::{self, StdinLock};

/// Lock stdin for the lifetime of the run; lines are read sequentially.
pub fn open() -> StdinLock<'static> {
    io::stdin().lock()
}
