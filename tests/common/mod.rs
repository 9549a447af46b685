//! Shared test utilities for clf2tab integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;

use clf2tab::{Driver, FieldValidator, RunSummary, TimestampNormalizer, Tokenizer};

/// Strict tokenizer on a UTC host.
pub fn strict() -> Tokenizer {
    Tokenizer::new(FieldValidator::strict(), TimestampNormalizer::utc_host())
}

/// Permissive tokenizer on a UTC host.
pub fn permissive() -> Tokenizer {
    Tokenizer::new(FieldValidator::permissive(), TimestampNormalizer::utc_host())
}

/// Everything a driver run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub summary: RunSummary,
    pub out: String,
    pub err: String,
}

/// Run `input` through a driver built from `tokenizer`, capturing both
/// streams.
pub fn drive(tokenizer: Tokenizer, input: &str) -> Captured {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let summary = Driver::new(tokenizer)
        .run_reader(input.as_bytes(), &mut out, &mut err)
        .expect("in-memory run cannot fail");
    Captured {
        summary,
        out: String::from_utf8(out).expect("records are UTF-8"),
        err: String::from_utf8(err).expect("diagnostics are UTF-8"),
    }
}
