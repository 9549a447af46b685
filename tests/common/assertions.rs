//! Domain-specific assertion macros for clf2tab harnesses.
//!
//! These add context to failures: which line was being tokenized and what
//! came back instead.

/// Assert that a line tokenizes to exactly the given tab-separated fields.
///
/// ```rust
/// assert_tokenizes!(strict(), line, "127.0.0.1\t-\tfrank\t...");
/// ```
#[macro_export]
macro_rules! assert_tokenizes {
    ($tokenizer:expr, $line:expr, $tsv:expr) => {{
        let line: &str = $line;
        match $tokenizer.tokenize(line) {
            Ok(record) => pretty_assertions::assert_eq!(
                record.fields().join("\t"),
                $tsv,
                "tokenizing {:?}",
                line
            ),
            Err(failure) => panic!(
                "assert_tokenizes! failed: line rejected.\n  line:   {:?}\n  state:  {}\n  token:  {:?}\n  reason: {}",
                line, failure.state, failure.token, failure
            ),
        }
    }};
}

/// Assert that a line is rejected with the given `FailureKind`.
#[macro_export]
macro_rules! assert_rejected {
    ($tokenizer:expr, $line:expr, $kind:expr) => {{
        let line: &str = $line;
        match $tokenizer.tokenize(line) {
            Ok(record) => panic!(
                "assert_rejected! failed: line accepted.\n  line:   {:?}\n  fields: {:?}",
                line,
                record.fields()
            ),
            Err(failure) => pretty_assertions::assert_eq!(
                failure.kind,
                $kind,
                "rejecting {:?} (state {})",
                line,
                failure.state
            ),
        }
    }};
}
