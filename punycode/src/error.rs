//! Error types for Punycode conversion.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Encoding a label would overflow the delta or code point counter.
    ///
    /// Only pathological inputs reach this: large code point values preceded
    /// by thousands of other code points.
    #[error("overflow during encoding")]
    Overflow,

    /// The input is not a well-formed encoding.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Why an input was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Character outside the digit alphabet in the encoded portion.
    #[error("invalid digit in encoded portion: '{0}'")]
    InvalidDigit(char),

    /// Non-ASCII character before the last delimiter.
    #[error("non-ASCII character in basic portion: '{0}'")]
    NonAsciiBasic(char),

    /// Encoded data ended in the middle of a variable-length integer.
    #[error("encoded data ended unexpectedly")]
    UnexpectedEnd,

    /// Decoded value is not a Unicode scalar value.
    #[error("invalid Unicode code point: {0:#x}")]
    InvalidCodePoint(u32),

    /// Decoded delta does not fit the integer width.
    #[error("overflow during decoding")]
    Overflow,
}
