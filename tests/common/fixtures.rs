//! Static log corpora used across harnesses.
//!
//! Each entry pairs a raw line with what the tool must make of it, so the
//! same corpus drives tokenizer, driver and CLI tests.

use clf2tab::FailureKind;

/// Common Log Format lines and their expected tab-separated output.
pub const CORPUS_COMMON: &[(&str, &str)] = &[
    (
        r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326"#,
        "127.0.0.1\t-\tfrank\t971211336\tGET\t/apache_pb.gif\tHTTP/1.0\t200\t2326",
    ),
    (
        r#"10.0.0.12 - - [04/Apr/2012:10:37:29 -0500] "POST /api/v1/orders HTTP/1.1" 201 38"#,
        "10.0.0.12\t-\t-\t1333553849\tPOST\t/api/v1/orders\tHTTP/1.1\t201\t38",
    ),
    (
        r#"192.168.1.5 - jane.doe@example.com [15/Jan/2024:10:00:00 +0000] "DELETE /sessions/99 HTTP/2.0" 204 -"#,
        "192.168.1.5\t-\tjane.doe@example.com\t1705312800\tDELETE\t/sessions/99\tHTTP/2.0\t204\t-",
    ),
    (
        r#"- - _svc [01/Jan/2024:04:00:00 +0530] "HEAD / HTTP/1.1" 304 0"#,
        "-\t-\t_svc\t1704061800\tHEAD\t/\tHTTP/1.1\t304\t0",
    ),
];

/// Combined Log Format lines and their expected output.
pub const CORPUS_COMBINED: &[(&str, &str)] = &[
    (
        r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326 "http://www.example.com/start.html" "Mozilla/4.08 [en] (Win98; I ;Nav)""#,
        "127.0.0.1\t-\tfrank\t971211336\tGET\t/apache_pb.gif\tHTTP/1.0\t200\t2326\thttp://www.example.com/start.html\tMozilla/4.08 [en] (Win98; I ;Nav)",
    ),
    (
        r#"203.0.113.9, 10.0.0.1 - - [29/Feb/2016:23:59:59 +0000] "GET /search?q=a+b HTTP/1.1" 200 512 "-" "curl/8.4.0""#,
        "203.0.113.9\t10.0.0.1\t-\t-\t1456790399\tGET\t/search?q=a+b\tHTTP/1.1\t200\t512\t-\tcurl/8.4.0",
    ),
    (
        r#"10.1.1.1 - - [29/Feb/2016:23:59:59 +0000] "GET /q HTTP/1.1" 200 7 "https://example.org/" "Mozilla/5.0 \"test\"""#,
        "10.1.1.1\t-\t-\t1456790399\tGET\t/q\tHTTP/1.1\t200\t7\thttps://example.org/\tMozilla/5.0 \\\"test\\\"",
    ),
];

/// Lines that strict mode must reject, with the reason.
pub const CORPUS_INVALID: &[(&str, FailureKind)] = &[
    (
        r#"localhost - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 1"#,
        FailureKind::InvalidAddress,
    ),
    (
        r#"1.2.3.4.5 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 1"#,
        FailureKind::InvalidAddress,
    ),
    (
        r#"127.0.0.1 ident42 - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 1"#,
        FailureKind::UnsupportedIdentity,
    ),
    (
        r#"127.0.0.1 - 42frank [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 1"#,
        FailureKind::InvalidUser,
    ),
    (
        r#"127.0.0.1 - - [10-10-2000 13:55:36] "GET / HTTP/1.0" 200 1"#,
        FailureKind::MalformedTimestamp,
    ),
    (
        r#"127.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET index.html HTTP/1.0" 200 1"#,
        FailureKind::PathMissingSlash,
    ),
    (
        r#"127.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" OK 1"#,
        FailureKind::CodeNotNumeric,
    ),
    (
        r#"127.0.0.1 - - [10/Oct/2000:13:55:36 -0700] "GET / HTTP/1.0" 200 1kb"#,
        FailureKind::ContentNotNumeric,
    ),
];

/// Every valid line of both corpora, newline-terminated, in order.
pub fn valid_input() -> String {
    CORPUS_COMMON
        .iter()
        .chain(CORPUS_COMBINED)
        .map(|(line, _)| format!("{line}\n"))
        .collect()
}

/// Expected record stream for [`valid_input`].
pub fn valid_output() -> String {
    CORPUS_COMMON
        .iter()
        .chain(CORPUS_COMBINED)
        .map(|(_, tsv)| format!("{tsv}\n"))
        .collect()
}
