//! `Set-Cookie` header value serialization.

use std::fmt::{self, Write};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::codec::encode_component;
use crate::error::CookieError;
use crate::http_date::HttpDate;

/// Caller-supplied value encoder.
pub type EncodeFn = dyn Fn(&str) -> String + Send + Sync;

/// Values accepted as a Max-Age, in seconds.
///
/// Integers wider than 53 bits lose precision, the same as any other
/// conversion to a double.
pub trait MaxAge {
    fn as_seconds(&self) -> f64;
}

macro_rules! impl_max_age {
    ($($ty:ty),*) => {
        $(
            impl MaxAge for $ty {
                #[inline]
                fn as_seconds(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_max_age!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl MaxAge for Duration {
    #[inline]
    fn as_seconds(&self) -> f64 {
        self.as_secs_f64()
    }
}

/// Attributes for [`serialize_with`].
///
/// Attributes are always written in the order Max-Age, Domain, Path, Expires,
/// HttpOnly, Secure, whatever order the builder methods were called in.
#[derive(Default)]
pub struct SerializeOptions {
    max_age: Option<f64>,
    domain: Option<String>,
    path: Option<String>,
    expires: Option<SystemTime>,
    http_only: bool,
    secure: bool,
    encode: Option<Box<EncodeFn>>,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Max-Age in seconds. Must be finite or serialization fails.
    pub fn max_age(mut self, seconds: impl MaxAge) -> Self {
        self.max_age = Some(seconds.as_seconds());
        self
    }

    /// Domain attribute. Empty means absent.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Path attribute. Empty means absent.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn expires(mut self, expires: SystemTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Replace the default percent-encoder for the value.
    pub fn encode<F>(mut self, encode: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.encode = Some(Box::new(encode));
        self
    }

    fn encode_value(&self, value: &str) -> String {
        match &self.encode {
            Some(encode) => encode(value),
            None => encode_component(value),
        }
    }
}

impl fmt::Debug for SerializeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializeOptions")
            .field("max_age", &self.max_age)
            .field("domain", &self.domain)
            .field("path", &self.path)
            .field("expires", &self.expires)
            .field("http_only", &self.http_only)
            .field("secure", &self.secure)
            .field("encode", &self.encode.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Serialize a name/value pair with no attributes.
#[inline]
pub fn serialize(name: &str, value: &str) -> Result<String, CookieError> {
    serialize_with(name, value, &SerializeOptions::default())
}

/// Serialize a name/value pair into a Set-Cookie header value.
///
/// The name is written as-is; the value goes through the configured encoder.
///
/// ```
/// use cookie_header::{serialize_with, SerializeOptions};
///
/// let options = SerializeOptions::new().max_age(10).secure(true);
/// let header = serialize_with("foo", "bar", &options).unwrap();
/// assert_eq!(header, "foo=bar; Max-Age=10; Secure");
/// ```
pub fn serialize_with(
    name: &str,
    value: &str,
    options: &SerializeOptions,
) -> Result<String, CookieError> {
    let mut out = String::with_capacity(name.len() + value.len() + 16);
    out.push_str(name);
    out.push('=');
    out.push_str(&options.encode_value(value));

    if let Some(max_age) = options.max_age {
        if !max_age.is_finite() {
            debug!(cookie = name, max_age, "Rejecting non-finite max-age");
            return Err(CookieError::InvalidMaxAge { value: max_age });
        }
        out.push_str("; Max-Age=");
        push_number(&mut out, max_age);
    }

    if let Some(domain) = options.domain.as_deref().filter(|d| !d.is_empty()) {
        out.push_str("; Domain=");
        out.push_str(domain);
    }

    if let Some(path) = options.path.as_deref().filter(|p| !p.is_empty()) {
        out.push_str("; Path=");
        out.push_str(path);
    }

    if let Some(expires) = options.expires {
        let _ = write!(out, "; Expires={}", HttpDate::from(expires));
    }

    if options.http_only {
        out.push_str("; HttpOnly");
    }

    if options.secure {
        out.push_str("; Secure");
    }

    Ok(out)
}

/// Append a finite number the way a JavaScript number-to-string would:
/// no trailing `.0`, exponent form below 1e-6 and from 1e21 in magnitude.
fn push_number(out: &mut String, n: f64) {
    let abs = n.abs();
    if n == 0.0 {
        out.push('0');
    } else if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                let _ = write!(out, "{}e+{}", mantissa, exponent);
            }
            _ => out.push_str(&exp),
        }
    } else {
        let _ = write!(out, "{}", n);
    }
}
