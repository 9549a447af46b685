//! Line tokenizer — a character-driven state machine over one log line.
//!
//! The scan walks the line once, accumulating characters for the current
//! [`ParseState`] and committing a token whenever the delimiter rules of that
//! state say the field is complete:
//!
//! | States                                           | Token ends at                    |
//! |--------------------------------------------------|----------------------------------|
//! | Address, ClientIdentity, UserId, StatusCode, ContentLength | space (comma also splits addresses), end of line |
//! | Timestamp                                        | `]`, content starts after `[`    |
//! | Method, Path, Protocol                           | space or unescaped `"`           |
//! | Referer, UserAgent                               | unescaped `"`                    |
//!
//! A `"` directly preceded by `\` is content, not a delimiter. Empty tokens
//! are never committed. The first validation failure aborts the line.

use crate::error::{FailureKind, FieldFailure};
use crate::timestamp::TimestampNormalizer;
use crate::types::{ParseState, ValidatedRecord};
use crate::validate::FieldValidator;

/// Placeholder committed for an unparseable timestamp in permissive mode.
const UNKNOWN_TIME: &str = "-";

/// Configured tokenizer. Cheap to copy; holds no per-line state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    validator: FieldValidator,
    normalizer: TimestampNormalizer,
}

impl Tokenizer {
    pub fn new(validator: FieldValidator, normalizer: TimestampNormalizer) -> Self {
        Self {
            validator,
            normalizer,
        }
    }

    pub fn validator(&self) -> FieldValidator {
        self.validator
    }

    pub fn normalizer(&self) -> TimestampNormalizer {
        self.normalizer
    }

    /// Tokenize one line (without its terminator).
    pub fn tokenize(&self, line: &str) -> Result<ValidatedRecord, FieldFailure> {
        let mut scan = Scan::new(self);
        for c in line.chars() {
            if scan.done {
                break;
            }
            scan.feed(c)?;
        }
        scan.finish()
    }
}

// ---------------------------------------------------------------------------
// Per-line scan state
// ---------------------------------------------------------------------------

struct Scan<'t> {
    tokenizer: &'t Tokenizer,
    state: ParseState,
    token: String,
    fields: Vec<String>,
    /// The previous character was a backslash.
    escape_pending: bool,
    /// A `[` has been seen in the Timestamp state.
    in_brackets: bool,
    /// The user agent has been committed; the rest of the line is ignored.
    done: bool,
}

impl<'t> Scan<'t> {
    fn new(tokenizer: &'t Tokenizer) -> Self {
        Self {
            tokenizer,
            state: ParseState::Address,
            token: String::new(),
            fields: Vec::with_capacity(16),
            escape_pending: false,
            in_brackets: false,
            done: false,
        }
    }

    fn feed(&mut self, c: char) -> Result<(), FieldFailure> {
        let escaped = std::mem::replace(&mut self.escape_pending, c == '\\');
        let quote = c == '"' && !escaped;

        match self.state {
            s if s.is_simple() => match c {
                ',' if s == ParseState::Address => self.commit_address()?,
                ' ' | ',' => self.commit_nonempty()?,
                _ => self.token.push(c),
            },
            ParseState::Timestamp => match c {
                '[' => self.in_brackets = true,
                ']' if self.in_brackets => self.commit_timestamp()?,
                _ if self.in_brackets => self.token.push(c),
                _ => {}
            },
            s if s.is_request() => match c {
                _ if quote => self.commit_nonempty()?,
                ' ' => self.commit_nonempty()?,
                _ => self.token.push(c),
            },
            _ => {
                // Referer / UserAgent: spaces are content once the token has
                // started.
                if quote || (c == ' ' && self.token.is_empty()) {
                    self.commit_nonempty()?;
                } else {
                    self.token.push(c);
                }
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<ValidatedRecord, FieldFailure> {
        if !self.done && self.state.is_simple() {
            self.commit_nonempty()?;
        }
        Ok(ValidatedRecord::from(self.fields))
    }

    /// One entry of a comma-separated address chain; the state stays on
    /// Address until a space closes the chain.
    fn commit_address(&mut self) -> Result<(), FieldFailure> {
        if self.token.is_empty() {
            return Ok(());
        }
        self.check(ParseState::Address)?;
        self.fields.push(std::mem::take(&mut self.token));
        Ok(())
    }

    fn commit_nonempty(&mut self) -> Result<(), FieldFailure> {
        if self.token.is_empty() {
            return Ok(());
        }
        self.check(self.state)?;
        self.fields.push(std::mem::take(&mut self.token));
        self.advance();
        Ok(())
    }

    fn commit_timestamp(&mut self) -> Result<(), FieldFailure> {
        let raw = std::mem::take(&mut self.token);
        self.in_brackets = false;
        let normalized = match self.tokenizer.normalizer.normalize(&raw) {
            Ok(secs) => secs,
            Err(_) if self.tokenizer.validator.is_permissive() => UNKNOWN_TIME.to_string(),
            Err(_) => {
                return Err(FieldFailure::new(
                    ParseState::Timestamp,
                    raw,
                    FailureKind::MalformedTimestamp,
                ))
            }
        };
        self.tokenizer
            .validator
            .check(ParseState::Timestamp, &normalized)
            .map_err(|kind| FieldFailure::new(ParseState::Timestamp, raw, kind))?;
        self.fields.push(normalized);
        self.advance();
        Ok(())
    }

    fn check(&self, state: ParseState) -> Result<(), FieldFailure> {
        self.tokenizer
            .validator
            .check(state, &self.token)
            .map_err(|kind| FieldFailure::new(state, self.token.as_str(), kind))
    }

    fn advance(&mut self) {
        match self.state.next() {
            Some(next) => self.state = next,
            None => self.done = true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
