//! `Cookie` request header parsing.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::codec::{decode_component, try_decode};
use crate::error::DecodeError;

/// Parsed cookies, keyed by name.
pub type CookieMap = HashMap<String, String>;

/// Caller-supplied value decoder.
pub type DecodeFn = dyn Fn(&str) -> Result<String, DecodeError> + Send + Sync;

/// Options for [`parse_with`].
#[derive(Default)]
pub struct ParseOptions {
    decode: Option<Box<DecodeFn>>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default percent-decoder. The decoder only runs on values
    /// containing `%`; its failures keep the raw value.
    pub fn decode<F>(mut self, decode: F) -> Self
    where
        F: Fn(&str) -> Result<String, DecodeError> + Send + Sync + 'static,
    {
        self.decode = Some(Box::new(decode));
        self
    }

    fn decode_value(&self, value: &str) -> String {
        match &self.decode {
            Some(decode) => try_decode(value, decode.as_ref()),
            None => try_decode(value, decode_component),
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("decode", &self.decode.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Parse a Cookie header with the default percent-decoder.
///
/// Never fails: fragments without `=` are dropped, the first occurrence of a
/// name wins, and values that fail to decode are kept as-is.
#[inline]
pub fn parse(header: &str) -> CookieMap {
    parse_with(header, &ParseOptions::default())
}

/// Parse a Cookie header.
pub fn parse_with(header: &str, options: &ParseOptions) -> CookieMap {
    let mut cookies = CookieMap::with_capacity((header.matches(';').count() + 1).min(16));

    for pair in split_pairs(header) {
        let Some(eq) = pair.find('=') else {
            continue;
        };

        let name = &pair[..eq];
        let value = unquote(&pair[eq + 1..]);

        if cookies.contains_key(name) {
            continue;
        }

        let value = if value.contains('%') {
            options.decode_value(value)
        } else {
            value.to_string()
        };
        cookies.insert(name.to_string(), value);
    }

    trace!(count = cookies.len(), "Parsed cookie header");
    cookies
}

/// Split on `;` plus any spaces that directly follow it.
fn split_pairs(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(';')
        .enumerate()
        .map(|(i, pair)| if i == 0 { pair } else { pair.trim_start_matches(' ') })
}

/// Drop the first and last character of a value that starts with `"`.
/// The closing quote is not checked.
fn unquote(value: &str) -> &str {
    if !value.starts_with('"') {
        return value;
    }
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
