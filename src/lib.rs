//! clf2tab — Common/Combined Log Format to tab-separated records.
//!
//! The parsing core lives in `clf2tab-core` and input sources in
//! `clf2tab-feeds`; this crate wires them into a line driver and the
//! `clf2tab` binary.
//!
//! # Architecture
//!
//! ```text
//! InputSource ──► LineReader ──► Driver ──► Tokenizer
//!                                  │
//!                                  ├──► output::write_record    (stdout)
//!                                  └──► output::write_rejection (stderr)
//! ```
//!
//! Everything runs on one thread, one line at a time, in input order.

pub mod driver;
pub mod logging;
pub mod output;

pub use clf2tab_core::{
    FailureKind, FieldFailure, FieldValidator, ParseState, TimestampNormalizer, Tokenizer,
    ValidatedRecord,
};
pub use clf2tab_feeds::{InputSource, LineReader};
pub use driver::{Driver, LineOutcome, RunSummary};
