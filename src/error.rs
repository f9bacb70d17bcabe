//! Error types for cookie parsing and serialization.

use std::fmt;

/// Error returned when serializing a cookie fails.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieError {
    /// Max-Age was not a finite number.
    InvalidMaxAge { value: f64 },
}

impl fmt::Display for CookieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieError::InvalidMaxAge { value } => {
                write!(f, "max-age should be a finite number, got {}", value)
            }
        }
    }
}

impl std::error::Error for CookieError {}

/// Why a value could not be percent-decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// `%` at this byte offset is not followed by two hex digits.
    MalformedEscape { index: usize },
    /// Decoded bytes are not valid UTF-8.
    InvalidUtf8,
    /// Rejected by a caller-supplied decoder.
    Rejected,
}

/// Error returned by a cookie value decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    input: String,
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(input: impl Into<String>, kind: DecodeErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Decoder-agnostic failure, for custom decode functions.
    pub fn rejected(input: impl Into<String>) -> Self {
        Self::new(input, DecodeErrorKind::Rejected)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DecodeErrorKind::MalformedEscape { index } => {
                write!(f, "malformed escape at {} in '{}'", index, self.input)
            }
            DecodeErrorKind::InvalidUtf8 => {
                write!(f, "'{}' does not decode to valid UTF-8", self.input)
            }
            DecodeErrorKind::Rejected => write!(f, "decoder rejected '{}'", self.input),
        }
    }
}

impl std::error::Error for DecodeError {}
