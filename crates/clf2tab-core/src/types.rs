//! Core types for clf2tab-core.
//!
//! [`ParseState`] is the tokenizer's position in the fixed left-to-right
//! field order of a log line; [`ValidatedRecord`] is what a successfully
//! tokenized line turns into.

/// Which field of a log line is currently being accumulated.
///
/// Variants are declared in line order. The tokenizer only ever moves to
/// [`ParseState::next`]; `Referer` and `UserAgent` may never be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseState {
    Address,
    ClientIdentity,
    UserId,
    Timestamp,
    Method,
    Path,
    Protocol,
    StatusCode,
    ContentLength,
    Referer,
    UserAgent,
}

impl ParseState {
    /// The state that follows this one, or `None` after the user agent.
    pub fn next(self) -> Option<ParseState> {
        use ParseState::*;
        match self {
            Address => Some(ClientIdentity),
            ClientIdentity => Some(UserId),
            UserId => Some(Timestamp),
            Timestamp => Some(Method),
            Method => Some(Path),
            Path => Some(Protocol),
            Protocol => Some(StatusCode),
            StatusCode => Some(ContentLength),
            ContentLength => Some(Referer),
            Referer => Some(UserAgent),
            UserAgent => None,
        }
    }

    /// Plain space-delimited fields, which may also be closed by end of line.
    pub fn is_simple(self) -> bool {
        matches!(
            self,
            ParseState::Address
                | ParseState::ClientIdentity
                | ParseState::UserId
                | ParseState::StatusCode
                | ParseState::ContentLength
        )
    }

    /// The three space-separated pieces of the quoted request line.
    pub fn is_request(self) -> bool {
        matches!(
            self,
            ParseState::Method | ParseState::Path | ParseState::Protocol
        )
    }

    /// Quoted free-text fields that may contain spaces.
    pub fn is_free_text(self) -> bool {
        matches!(self, ParseState::Referer | ParseState::UserAgent)
    }
}

impl std::fmt::Display for ParseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseState::Address => write!(f, "address"),
            ParseState::ClientIdentity => write!(f, "client-identity"),
            ParseState::UserId => write!(f, "user-id"),
            ParseState::Timestamp => write!(f, "timestamp"),
            ParseState::Method => write!(f, "method"),
            ParseState::Path => write!(f, "path"),
            ParseState::Protocol => write!(f, "protocol"),
            ParseState::StatusCode => write!(f, "status-code"),
            ParseState::ContentLength => write!(f, "content-length"),
            ParseState::Referer => write!(f, "referer"),
            ParseState::UserAgent => write!(f, "user-agent"),
        }
    }
}

/// The ordered field strings of one accepted line.
///
/// Positional: address(es), client identity, user id, epoch seconds, method,
/// path, protocol, status code, content length, then optionally referer and
/// user agent. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedRecord {
    fields: Vec<String>,
}

impl ValidatedRecord {
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for ValidatedRecord {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl<'a> IntoIterator for &'a ValidatedRecord {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
