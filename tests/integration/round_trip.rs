//! Set-Cookie values read back through the Cookie parser.

use crate::helpers::*;
use cookie_header::{parse, serialize, serialize_with, SerializeOptions};

/// Test that plain and escaped values survive serialize then parse
#[test]
fn test_serialize_then_parse() {
    init_tracing();

    for (name, value) in [
        ("foo", "bar"),
        ("sid", "abc123"),
        ("empty", ""),
        ("spaced", "hello world"),
        ("unicode", "caf\u{e9} \u{1f36a}"),
        ("separators", "a;b=c,d"),
    ] {
        let header = serialize(name, value).unwrap();
        assert_cookies(&parse(&header), &[(name, value)]);
    }
}

/// Test that attributes on a Set-Cookie value do not disturb the pair
#[test]
fn test_attributes_parse_as_flags() {
    init_tracing();

    let options = SerializeOptions::new().path("/").http_only(true).secure(true);
    let header = serialize_with("foo", "bar", &options).unwrap();

    // "Path=/" reads as a pair, flags are dropped
    assert_cookies(&parse(&header), &[("foo", "bar"), ("Path", "/")]);
}
