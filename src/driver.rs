//! Line driver — runs the tokenizer over a stream of lines.
//!
//! Accepted lines go to the record writer, rejected lines to the error
//! writer. A rejection never stops the run; only I/O errors do.

use crate::output::{write_record, write_rejection};
use clf2tab_core::{FailureKind, ParseState, Tokenizer};
use clf2tab_feeds::LineReader;
use std::io::{self, BufRead, Write};

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Written to the record stream with this many fields.
    Accepted(usize),
    /// Written to the error stream.
    Rejected(ParseState, FailureKind),
}

/// Line counts for one or more runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u64,
    pub accepted: u64,
    pub rejected: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Accepted(_) => self.accepted += 1,
            LineOutcome::Rejected(..) => self.rejected += 1,
        }
    }
}

impl std::ops::AddAssign for RunSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.accepted += rhs.accepted;
        self.rejected += rhs.rejected;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Driver {
    tokenizer: Tokenizer,
}

impl Driver {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `line` and write either its record to `out` or a diagnostic
    /// to `err`.
    pub fn process_line<W, E>(&self, line: &str, out: &mut W, err: &mut E) -> io::Result<LineOutcome>
    where
        W: Write,
        E: Write,
    {
        match self.tokenizer.tokenize(line) {
            Ok(record) => {
                write_record(out, &record)?;
                tracing::trace!(fields = record.len(), "line accepted");
                Ok(LineOutcome::Accepted(record.len()))
            }
            Err(failure) => {
                tracing::debug!(
                    state = %failure.state,
                    token = %failure.token,
                    reason = %failure.kind,
                    "line rejected"
                );
                write_rejection(err, &failure, line)?;
                Ok(LineOutcome::Rejected(failure.state, failure.kind))
            }
        }
    }

    /// Process every line from `lines` in order.
    pub fn run<I, W, E>(&self, lines: I, out: &mut W, err: &mut E) -> io::Result<RunSummary>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        for line in lines {
            let outcome = self.process_line(&line?, out, err)?;
            summary.record(outcome);
        }
        Ok(summary)
    }

    /// [`run`](Self::run) over the lines of a buffered reader.
    pub fn run_reader<R, W, E>(&self, reader: R, out: &mut W, err: &mut E) -> io::Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        self.run(LineReader::new(reader), out, err)
    }
}
