//! Default value codecs: URI-component percent-encoding and decoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::{DecodeError, DecodeErrorKind};

/// Characters left alone by URI-component encoding: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie value.
#[inline]
pub fn encode_component(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-decode a cookie value.
///
/// Unlike `percent_decode_str`, which passes stray `%` through, this rejects
/// any `%` not followed by two hex digits and any result that is not UTF-8.
pub fn decode_component(value: &str) -> Result<String, DecodeError> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'%') {
        let at = i + offset;
        let valid = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(DecodeError::new(
                value,
                DecodeErrorKind::MalformedEscape { index: at },
            ));
        }
        i = at + 3;
    }

    percent_encoding::percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::new(value, DecodeErrorKind::InvalidUtf8))
}

/// Decode `value`, falling back to it unchanged when the decoder fails.
pub fn try_decode<F>(value: &str, decode: F) -> String
where
    F: Fn(&str) -> Result<String, DecodeError>,
{
    match decode(value) {
        Ok(decoded) => decoded,
        Err(error) => {
            debug!(cookie = value, error = %error, "Keeping undecodable cookie value");
            value.to_string()
        }
    }
}
