//! Field validators.
//!
//! The `is_*` functions are pure predicates with no knowledge of the
//! tokenizer. [`FieldValidator`] maps a [`ParseState`] to the predicate that
//! guards it and carries the strict/permissive switch.

use crate::error::FailureKind;
use crate::types::ParseState;

const MAX_ADDRESS_LEN: usize = 15;

/// `-`, or a dotted-quad shaped string: digits and exactly three dots, at
/// most 15 characters. Octet ranges are not checked.
pub fn is_address(token: &str) -> bool {
    if token == "-" {
        return true;
    }
    let mut dots = 0;
    for c in token.chars() {
        match c {
            '.' => dots += 1,
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    dots == 3 && token.len() <= MAX_ADDRESS_LEN
}

/// Digits and `-` in any arrangement.
pub fn is_numeric(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '-')
}

/// Exactly `-`, or a letter/underscore followed by alphanumerics and
/// `_ - @ .`.
pub fn is_user(token: &str) -> bool {
    if token == "-" {
        return true;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '@' | '.'))
}

/// RFC 1413 identities are not supported; only the empty marker is.
pub fn is_client_identity(token: &str) -> bool {
    token == "-"
}

pub fn is_path(token: &str) -> bool {
    token.starts_with('/')
}

// ---------------------------------------------------------------------------
// FieldValidator
// ---------------------------------------------------------------------------

/// Applies the validator belonging to a field state.
///
/// In permissive mode every token is accepted; segmentation and timestamp
/// conversion still happen, only the checks are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidator {
    permissive: bool,
}

impl FieldValidator {
    pub fn strict() -> Self {
        Self { permissive: false }
    }

    pub fn permissive() -> Self {
        Self { permissive: true }
    }

    pub fn new(permissive: bool) -> Self {
        Self { permissive }
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    /// Check `token` as the value of `state`.
    pub fn check(&self, state: ParseState, token: &str) -> Result<(), FailureKind> {
        if self.permissive {
            return Ok(());
        }
        let (ok, kind) = match state {
            ParseState::Address => (is_address(token), FailureKind::InvalidAddress),
            ParseState::ClientIdentity => {
                (is_client_identity(token), FailureKind::UnsupportedIdentity)
            }
            ParseState::UserId => (is_user(token), FailureKind::InvalidUser),
            ParseState::Timestamp => (is_numeric(token), FailureKind::TimeNotNumeric),
            ParseState::Path => (is_path(token), FailureKind::PathMissingSlash),
            ParseState::StatusCode => (is_numeric(token), FailureKind::CodeNotNumeric),
            ParseState::ContentLength => (is_numeric(token), FailureKind::ContentNotNumeric),
            // Methods and protocols vary by application, referer and agent
            // are free text.
            ParseState::Method
            | ParseState::Protocol
            | ParseState::Referer
            | ParseState::UserAgent => return Ok(()),
        };
        if ok {
            Ok(())
        } else {
            Err(kind)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
