//! Bootstring parameters and helpers for the Punycode profile (RFC 3492).
//!
//! Digits use base 36 with the alphabet a-z (0-25) + 0-9 (26-35).

/// Base for variable-length integer encoding.
pub(crate) const BASE: u32 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u32 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u32 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u32 = 38;

/// Damping factor for first adaptation.
pub(crate) const DAMP: u32 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u32 = 72;

/// First code point that is not basic.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Separates the literal basic code points from the digit stream.
pub(crate) const DELIMITER: char = '-';

const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Adapt bias after encoding/decoding a delta.
///
/// - delta: the delta value just processed
/// - num_points: number of code points handled so far, including this one
/// - first_time: whether this is the first adaptation
pub(crate) fn adapt_bias(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta = if first_time { delta / DAMP } else { delta / 2 };

    // Compensate for the length of the string
    delta += delta / num_points;

    let mut k = 0u32;
    let base_minus_tmin = BASE - T_MIN;
    let limit = (base_minus_tmin * T_MAX) / 2;

    while delta > limit {
        delta /= base_minus_tmin;
        k += BASE;
    }

    k + ((base_minus_tmin + 1) * delta) / (delta + SKEW)
}

/// Encode a digit value (0-35) to its character representation.
///
/// Returns `None` if the digit is out of range.
pub(crate) fn encode_digit(d: u32) -> Option<char> {
    ALPHABET.get(d as usize).map(|&b| b as char)
}

/// Decode a character to its digit value (0-35).
pub(crate) fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

/// Calculate the digit threshold for position `k` under `bias`.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}
