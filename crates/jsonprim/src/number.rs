//! Number token scanning: full JSON numbers as `f64`, plain integers as
//! `i64`.
//!
//! [`scan_float`] walks the whole JSON number grammar and hands the matched
//! span to the standard decimal-to-binary conversion. [`scan_int`] is the
//! narrow fast path: sign and digits only, accumulated directly without
//! materializing the span, for callers that know (or require) the field to
//! be integral.

use crate::{error::ScanError, whitespace::skip_ws};

/// Digit-run bound for [`scan_int`]. Twenty digits cover the full `i64`
/// range (19 digits plus sign headroom); a longer run fails the terminator
/// check on the byte after the cap.
const INT_DIGIT_CAP: usize = 20;

/// Extracts the JSON number starting at `start` (after any whitespace) as a
/// 64-bit float, returning the value and the cursor one past the last
/// consumed character.
///
/// The scan greedily matches optional `-`, an integer part (`0` or a
/// nonzero digit run), an optional `.` fraction, and an optional `e`/`E`
/// exponent with optional sign. The scan itself does not reject grammar
/// stragglers like a trailing `.` with no digits; the conversion over the
/// matched span settles those.
///
/// # Errors
///
/// [`ScanError::NoNumberHere`] when the integer part does not begin with a
/// valid digit or the conversion rejects the span.
pub fn scan_float(buf: &[u8], start: usize) -> Result<(f64, usize), ScanError> {
    let from = skip_ws(buf, start);
    let mut at = from;
    if buf.len() <= at {
        return Err(ScanError::NoNumberHere);
    }
    if buf[at] == b'-' {
        at += 1;
    }
    if buf.len() <= at {
        return Err(ScanError::NoNumberHere);
    }
    match buf[at] {
        b'0' => at += 1,
        b'1'..=b'9' => {
            at += 1;
            while at < buf.len() && buf[at].is_ascii_digit() {
                at += 1;
            }
        }
        _ => return Err(ScanError::NoNumberHere),
    }
    if at < buf.len() && buf[at] == b'.' {
        at += 1;
        while at < buf.len() && buf[at].is_ascii_digit() {
            at += 1;
        }
    }
    if at < buf.len() && (buf[at] | 0x20) == b'e' {
        at += 1;
        if at < buf.len() && (buf[at] == b'+' || buf[at] == b'-') {
            at += 1;
        }
        while at < buf.len() && buf[at].is_ascii_digit() {
            at += 1;
        }
    }
    let span = core::str::from_utf8(&buf[from..at]).map_err(|_| ScanError::NoNumberHere)?;
    let value = span.parse::<f64>().map_err(|_| ScanError::NoNumberHere)?;
    Ok((value, at))
}

/// Extracts a plain integer (optional `-`, digits, no fraction or exponent)
/// starting at `start` (after any whitespace), returning the `i64` value
/// and the cursor immediately after the last digit.
///
/// Digits accumulate directly by multiply-by-10-and-add, capped at twenty;
/// values past the `i64` range wrap rather than erroring, which is what
/// lets `-9223372036854775808` transit through the positive accumulator.
/// If buffer remains after the digit run, the next byte must be JSON
/// whitespace, `,`, `]`, or `}`; anything else means the token was a float
/// or malformed, and the whole call fails. The returned cursor stops before
/// the terminator.
///
/// # Errors
///
/// [`ScanError::NoNumberHere`] when no digit follows the whitespace and
/// optional sign, or when the byte after the digit run is not a valid
/// terminator.
pub fn scan_int(buf: &[u8], start: usize) -> Result<(i64, usize), ScanError> {
    let mut at = skip_ws(buf, start);
    if at >= buf.len() {
        return Err(ScanError::NoNumberHere);
    }
    let negative = buf[at] == b'-';
    if negative {
        at += 1;
    }
    let digits = at;
    let mut value: i64 = 0;
    while at < buf.len() && at - digits < INT_DIGIT_CAP && buf[at].is_ascii_digit() {
        value = value.wrapping_mul(10).wrapping_add(i64::from(buf[at] - b'0'));
        at += 1;
    }
    if at == digits {
        return Err(ScanError::NoNumberHere);
    }
    if at < buf.len() {
        match buf[at] {
            b' ' | b'\n' | b'\r' | b'\t' | b',' | b']' | b'}' => {}
            _ => return Err(ScanError::NoNumberHere),
        }
    }
    if negative {
        value = value.wrapping_neg();
    }
    Ok((value, at))
}
