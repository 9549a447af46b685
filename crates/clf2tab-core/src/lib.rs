//! clf2tab-core — the parsing core of clf2tab.
//!
//! Turns one Common/Combined Log Format line into an ordered list of
//! validated field strings. Everything in here is synchronous and pure with
//! respect to I/O; reading lines and writing records is the driver's job.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► Tokenizer ──► ValidatedRecord
//!                 │  │
//!                 │  └──► TimestampNormalizer
//!                 └─────► FieldValidator
//! ```

pub mod config;
pub mod error;
pub mod timestamp;
pub mod tokenizer;
pub mod types;
pub mod validate;

pub use error::{FailureKind, FieldFailure};
pub use timestamp::{TimestampError, TimestampNormalizer};
pub use tokenizer::Tokenizer;
pub use types::{ParseState, ValidatedRecord};
pub use validate::FieldValidator;
