//! Cookie header parsing: malformed input, duplicates, decoding.

use crate::helpers::*;
use cookie_header::{parse, parse_with, DecodeError, ParseOptions};

/// Test that empty and flag-only headers produce nothing
#[test]
fn test_empty_headers() {
    init_tracing();

    assert_cookies(&parse(""), &[]);
    assert_cookies(&parse("foo"), &[]);
    assert_cookies(&parse("; ; "), &[]);
}

/// Test a typical browser header
#[test]
fn test_browser_header() {
    init_tracing();

    let cookies = parse("_ga=GA1.2.3.4; sid=s%3Aabc.def; lang=en-US; consent=\"yes\"");
    assert_cookies(
        &cookies,
        &[
            ("_ga", "GA1.2.3.4"),
            ("sid", "s:abc.def"),
            ("lang", "en-US"),
            ("consent", "yes"),
        ],
    );
}

/// Test that the first occurrence of a name wins
#[test]
fn test_duplicate_names() {
    init_tracing();

    assert_cookies(&parse("foo=bar; foo=baz"), &[("foo", "bar")]);
    assert_cookies(&parse("a=1; b=2; a=3; b=4"), &[("a", "1"), ("b", "2")]);
}

/// Test that undecodable values fall back without affecting other cookies
#[test]
fn test_decode_failure_fallback() {
    init_tracing();

    assert_cookies(&parse("foo=%1"), &[("foo", "%1")]);
    assert_cookies(
        &parse("bad=%zz%20; good=%E2%9C%93; raw=%ff"),
        &[("bad", "%zz%20"), ("good", "\u{2713}"), ("raw", "%ff")],
    );
}

/// Test a custom decoder that may fail
#[test]
fn test_custom_decoder() {
    init_tracing();

    let options = ParseOptions::new().decode(|value| {
        if value.starts_with("%%") {
            Err(DecodeError::rejected(value))
        } else {
            Ok(value.trim_start_matches('%').to_string())
        }
    });

    let cookies = parse_with("a=%%x; b=%y; c=z", &options);
    assert_cookies(&cookies, &[("a", "%%x"), ("b", "y"), ("c", "z")]);
}

/// Test that parse options can be shared between threads
#[test]
fn test_options_shared_across_threads() {
    let options = ParseOptions::new().decode(|value| Ok(value.replace("%2B", "+")));

    std::thread::scope(|scope| {
        for i in 0..4 {
            let options = &options;
            scope.spawn(move || {
                let header = format!("n={}; v=a%2Bb", i);
                let cookies = parse_with(&header, options);
                assert_eq!(cookies["n"], i.to_string());
                assert_eq!(cookies["v"], "a+b");
            });
        }
    });
}
