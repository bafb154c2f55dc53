//! Code point array view of text, kept for callers of the legacy `ucs2` API.
//!
//! Despite the name, values above U+FFFF are single elements, never
//! surrogate pairs.

use crate::error::{Error, InvalidInput, Result};

/// Return the code points of `text`.
///
/// ```
/// assert_eq!(punycode::ucs2::decode("a☕😀"), vec![0x61, 0x2615, 0x1F600]);
/// ```
pub fn decode(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Build text from code points.
///
/// Fails on surrogates and values above U+10FFFF.
///
/// ```
/// assert_eq!(punycode::ucs2::encode(&[0x61, 0x1F600]).unwrap(), "a😀");
/// ```
pub fn encode(code_points: &[u32]) -> Result<String> {
    code_points
        .iter()
        .map(|&cp| {
            char::from_u32(cp).ok_or(Error::InvalidInput(InvalidInput::InvalidCodePoint(cp)))
        })
        .collect()
}
