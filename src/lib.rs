//! cookie_header - HTTP cookie header parsing and serialization.
//!
//! Two stateless transformations:
//!
//! - [`parse`] turns a `Cookie` request header into a name → value map.
//!   It never fails: malformed fragments are dropped and values that do not
//!   percent-decode are kept as they were sent.
//! - [`serialize`] builds a single `Set-Cookie` header value from a name, a
//!   value and optional attributes. It fails only on a non-finite Max-Age.
//!
//! Values are percent-decoded/encoded as URI components by default; both
//! directions accept a caller-supplied codec instead.
//!
//! # Example
//!
//! ```rust
//! use cookie_header::{parse, serialize_with, SerializeOptions};
//!
//! let cookies = parse("sid=abc123; theme=dark%20blue; sid=ignored");
//! assert_eq!(cookies["sid"], "abc123");
//! assert_eq!(cookies["theme"], "dark blue");
//!
//! let options = SerializeOptions::new().path("/").http_only(true);
//! let header = serialize_with("sid", "abc123", &options).unwrap();
//! assert_eq!(header, "sid=abc123; Path=/; HttpOnly");
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod codec;
pub mod error;
pub mod http_date;
pub mod parse;
pub mod serialize;

// Re-exports for convenience
pub use error::{CookieError, DecodeError, DecodeErrorKind};
pub use parse::{parse, parse_with, CookieMap, ParseOptions};
pub use serialize::{serialize, serialize_with, MaxAge, SerializeOptions};
