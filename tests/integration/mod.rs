//! Integration tests for cookie_header
//!
//! Run with: cargo test --test integration
//!
//! Set RUST_LOG=cookie_header=trace to see the library's log output.


mod parse_header;
mod round_trip;
