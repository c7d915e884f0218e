//! Allocation-free scanners for JSON primitive tokens.
//!
//! This crate is the lexing substrate for a JSON decoder: it delimits and
//! decodes individual primitive tokens out of a byte buffer, while the
//! surrounding decoder owns grammar context (objects, arrays, value
//! dispatch) and decides which scanner to call next.
//!
//! Four entry points, all following the same calling convention
//! `(buffer, start_cursor) -> (value, end_cursor)`:
//!
//! - [`skip_ws`] advances past JSON-insignificant whitespace.
//! - [`scan_string`] extracts a quoted string, decoding escapes in place.
//! - [`scan_float`] extracts a JSON number and converts it to `f64`.
//! - [`scan_int`] extracts a plain integer (no fraction or exponent) as
//!   `i64` without materializing the digit span.
//!
//! The start cursor may point at leading whitespace; every scanner skips it
//! itself. On success the end cursor is one past the consumed token.
//!
//! Borrowing and buffer mutation
//! -----------------------------
//! Tokens are returned borrowed wherever possible. A string without escapes
//! is handed back as a sub-slice of the input with no copy at all. When
//! escapes are present, the decoded bytes are written over the buffer head
//! starting at the start cursor (decoding never grows a token), and the
//! result still borrows the caller's buffer. [`scan_string`] therefore takes
//! `&mut [u8]`: the exclusive borrow is what makes the in-place rewrite
//! sound, and the returned slice keeps the buffer borrowed so stale bytes
//! preceding the end cursor cannot be re-read while the token is alive.
//!
//! No scanner allocates, performs I/O, or retains state across calls.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod hex;
mod number;
mod string;
mod whitespace;

pub use error::ScanError;
pub use number::{scan_float, scan_int};
pub use string::scan_string;
pub use whitespace::skip_ws;
