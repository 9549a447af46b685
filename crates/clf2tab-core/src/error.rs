//! Per-line failure types.
//!
//! A [`FieldFailure`] aborts the tokenization of one line and nothing else.
//! The `Display` text of [`FailureKind`] is what ends up on the error
//! channel, so it is kept stable.

use crate::types::ParseState;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FailureKind {
    #[error("IP is invalid.")]
    InvalidAddress,
    #[error("Client identity unsupported.")]
    UnsupportedIdentity,
    #[error("USER is invalid.")]
    InvalidUser,
    #[error("TIME is not numeric.")]
    TimeNotNumeric,
    #[error("TIME is not a valid log timestamp.")]
    MalformedTimestamp,
    #[error("PATH does not begin with forward slash.")]
    PathMissingSlash,
    #[error("CODE is not numeric.")]
    CodeNotNumeric,
    #[error("CONTENT is not numeric.")]
    ContentNotNumeric,
}

/// The first field of a line that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct FieldFailure {
    /// Field being accumulated when the failure was detected.
    pub state: ParseState,
    /// The offending token as it appeared in the line (for the timestamp,
    /// the raw bracketed text).
    pub token: String,
    pub kind: FailureKind,
}

impl FieldFailure {
    pub fn new(state: ParseState, token: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            state,
            token: token.into(),
            kind,
        }
    }
}
