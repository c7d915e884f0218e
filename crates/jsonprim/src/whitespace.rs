/// Advances `start` past consecutive JSON whitespace bytes (space, newline,
/// carriage return, horizontal tab) and returns the offset of the first
/// non-whitespace byte, or `buf.len()` if the buffer is exhausted.
///
/// Only the four whitespace characters of the JSON grammar are recognized;
/// no other Unicode whitespace counts. Total and idempotent: applying the
/// result as a new start cursor is a no-op.
#[must_use]
pub fn skip_ws(buf: &[u8], start: usize) -> usize {
    let mut at = start;
    while at < buf.len() && matches!(buf[at], b' ' | b'\n' | b'\r' | b'\t') {
        at += 1;
    }
    at
}
