//! String token scanning with in-place escape decoding.
//!
//! Overview
//! - A first pass only delimits the token: it finds the closing quote while
//!   noting whether any `\` occurred. Escaped strings are rare in most
//!   payloads, and delimiting first means the common case never touches the
//!   buffer.
//! - If the span holds no escapes, the result is the sub-slice strictly
//!   between the quotes: zero copy, zero mutation.
//! - Otherwise a second pass decodes one Unicode scalar at a time, writing
//!   the decoded bytes back into the same buffer starting at the start
//!   cursor. Every escape decodes to fewer bytes than its source form and a
//!   plain scalar copies to the same width, so the write position trails the
//!   read position for the whole pass and the decoded token needs no backing
//!   storage of its own.
//!
//! Aliasing contract
//! - The returned slice borrows the caller's buffer in both paths. Taking
//!   `&mut [u8]` makes the in-place rewrite exclusive, and the returned
//!   borrow keeps the buffer locked until the token is dropped: code that
//!   could observe the overwritten region no longer compiles.

use crate::{error::ScanError, hex::decode_hex4, whitespace::skip_ws};

/// Extracts the JSON string starting at `start` (after any whitespace) and
/// returns its decoded contents with the cursor one past the closing quote.
///
/// Without escapes the returned slice aliases the region between the quotes
/// and the buffer is untouched. With escapes, bytes from `start` up to the
/// returned cursor may have been overwritten by the decoded output and must
/// not be re-read for their original content; the returned slice starts at
/// `start`.
///
/// # Errors
///
/// [`ScanError::NoStringHere`] when no `"` follows the whitespace, the
/// string is unterminated, an escape is malformed, a surrogate pair is
/// incomplete or mismatched, or the content is not valid UTF-8 on the
/// escape-decoding path.
pub fn scan_string(buf: &mut [u8], start: usize) -> Result<(&[u8], usize), ScanError> {
    let mut at = skip_ws(buf, start);
    if buf.len() < at + 2 || buf[at] != b'"' {
        return Err(ScanError::NoStringHere);
    }
    at += 1;
    let body = at;
    let last = buf.len() - 1;
    let mut has_escapes = false;
    while at < last && buf[at] != b'"' {
        if buf[at] == b'\\' {
            // Consume the escaped byte blind; the decode pass interprets it.
            at += 1;
            has_escapes = true;
        }
        at += 1;
    }
    if at > last || buf[at] != b'"' {
        return Err(ScanError::NoStringHere);
    }
    if !has_escapes {
        return Ok((&buf[body..at], at + 1));
    }

    let end = at;
    let mut read = body;
    let mut write = start;
    while read < end {
        let (ch, width) = bstr::decode_utf8(&buf[read..end]);
        let Some(ch) = ch else {
            return Err(ScanError::NoStringHere);
        };
        read += width;
        if ch != '\\' {
            buf.copy_within(read - width..read, write);
            write += width;
            continue;
        }
        let (esc, esc_width) = bstr::decode_utf8(&buf[read..end]);
        let Some(esc) = esc else {
            return Err(ScanError::NoStringHere);
        };
        read += esc_width;
        match esc {
            '"' | '/' | '\\' => {
                buf[write] = esc as u8;
                write += 1;
            }
            'b' => {
                buf[write] = 0x08;
                write += 1;
            }
            'f' => {
                buf[write] = 0x0C;
                write += 1;
            }
            'n' => {
                buf[write] = b'\n';
                write += 1;
            }
            'r' => {
                buf[write] = b'\r';
                write += 1;
            }
            't' => {
                buf[write] = b'\t';
                write += 1;
            }
            'u' => {
                let Some(unit) = decode_hex4(&buf[..end], read) else {
                    return Err(ScanError::NoStringHere);
                };
                read += 4;
                let scalar = match unit {
                    0xD800..=0xDBFF => {
                        if end < read + 6 || buf[read] != b'\\' || buf[read + 1] != b'u' {
                            return Err(ScanError::NoStringHere);
                        }
                        read += 2;
                        let Some(low) = decode_hex4(&buf[..end], read) else {
                            return Err(ScanError::NoStringHere);
                        };
                        read += 4;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(ScanError::NoStringHere);
                        }
                        0x1_0000 + (((u32::from(unit) - 0xD800) << 10) | (u32::from(low) - 0xDC00))
                    }
                    // A low surrogate cannot open a pair.
                    0xDC00..=0xDFFF => return Err(ScanError::NoStringHere),
                    _ => u32::from(unit),
                };
                let Some(decoded) = char::from_u32(scalar) else {
                    return Err(ScanError::NoStringHere);
                };
                write = write_scalar(buf, write, decoded);
            }
            _ => return Err(ScanError::NoStringHere),
        }
    }
    Ok((&buf[start..write], end + 1))
}

/// Re-encodes `ch` as UTF-8 at `at` and returns the offset just past it.
/// The escape pass consumes more source bytes than it writes, so the write
/// offset trails the read offset and the slice index stays in bounds.
fn write_scalar(buf: &mut [u8], at: usize, ch: char) -> usize {
    let mut utf8 = [0u8; 4];
    let encoded = ch.encode_utf8(&mut utf8).as_bytes();
    buf[at..at + encoded.len()].copy_from_slice(encoded);
    at + encoded.len()
}
