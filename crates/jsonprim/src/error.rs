use thiserror::Error;

/// Failure kinds reported by the token scanners.
///
/// Each scanner collapses all of its failure causes into a single kind: a
/// bad opening quote, an unterminated string, a malformed escape, and a
/// broken surrogate pair are all [`NoStringHere`](ScanError::NoStringHere).
/// Callers treat any of these as a syntax error at the cursor and do not
/// need finer granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No well-formed JSON string starts at the cursor (after whitespace).
    #[error("no string here")]
    NoStringHere,
    /// No number the requesting scanner accepts starts at the cursor. The
    /// integer scanner also reports this when the token turns out to be a
    /// float (a fraction dot or exponent follows the digits).
    #[error("no number here")]
    NoNumberHere,
    /// Reserved for functionality intentionally absent from this core, such
    /// as an alternate high-precision float conversion path.
    #[error("not implemented")]
    NotImplemented,
}
