//! Bootstring decoding (RFC 3492 section 6.2).

use crate::bootstring::{
    adapt_bias, decode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::error::{InvalidInput, Result};

/// Decode Punycode back to the code points it encodes.
///
/// Everything before the last hyphen is taken literally; the rest is the
/// digit stream. Digits are case-insensitive.
///
/// # Examples
///
/// ```
/// use punycode::{decode, Error, InvalidInput};
///
/// assert_eq!(decode("tda").unwrap(), vec!['ü']);
/// assert_eq!(decode("bcher-kva").unwrap(), "bücher".chars().collect::<Vec<_>>());
///
/// assert_eq!(
///     decode("bcher-k!a"),
///     Err(Error::InvalidInput(InvalidInput::InvalidDigit('!')))
/// );
/// ```
pub fn decode(input: &str) -> Result<Vec<char>> {
    let (basic, digits) = match input.rfind(DELIMITER) {
        Some(pos) => (&input[..pos], &input[pos + DELIMITER.len_utf8()..]),
        None => ("", input),
    };

    if let Some(c) = basic.chars().find(|c| !c.is_ascii()) {
        return Err(InvalidInput::NonAsciiBasic(c).into());
    }

    let mut output: Vec<char> = basic.chars().collect();
    let mut chars = digits.chars().peekable();
    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;

    while chars.peek().is_some() {
        let old_i = i;
        let w = decode_varint(&mut chars, bias)?;
        i = i.checked_add(w).ok_or(InvalidInput::Overflow)?;

        let len = u32::try_from(output.len() + 1).map_err(|_| InvalidInput::Overflow)?;
        bias = adapt_bias(i - old_i, len, old_i == 0);

        n = n.checked_add(i / len).ok_or(InvalidInput::Overflow)?;
        i %= len;

        let c = char::from_u32(n).ok_or(InvalidInput::InvalidCodePoint(n))?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output)
}

/// Decode Punycode to a `String`.
///
/// Convenience wrapper around [`decode`].
///
/// ```
/// assert_eq!(punycode::decode_to_string("53h").unwrap(), "☕");
/// ```
pub fn decode_to_string(input: &str) -> Result<String> {
    decode(input).map(|chars| chars.into_iter().collect())
}

/// Read one variable-length integer from the digit stream.
fn decode_varint(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    bias: u32,
) -> std::result::Result<u32, InvalidInput> {
    let mut result: u32 = 0;
    let mut w: u32 = 1;
    let mut k: u32 = BASE;

    loop {
        let c = chars.next().ok_or(InvalidInput::UnexpectedEnd)?;
        let digit = decode_digit(c).ok_or(InvalidInput::InvalidDigit(c))?;

        // result += digit * w
        result = digit
            .checked_mul(w)
            .and_then(|d| result.checked_add(d))
            .ok_or(InvalidInput::Overflow)?;

        let t = threshold(k, bias);
        if digit < t {
            break;
        }

        w = w.checked_mul(BASE - t).ok_or(InvalidInput::Overflow)?;
        k = k.checked_add(BASE).ok_or(InvalidInput::Overflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_str;
    use crate::Error;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_basic_only() {
        assert_eq!(decode_to_string("abc-"), Ok("abc".to_string()));
        assert_eq!(decode_to_string("-"), Ok(String::new()));
    }

    #[test]
    fn test_decode_extended_only() {
        assert_eq!(decode_to_string("tda"), Ok("ü".to_string()));
        assert_eq!(decode_to_string("r8jz45g"), Ok("例え".to_string()));
    }

    #[test]
    fn test_decode_uppercase_digits() {
        assert_eq!(decode_to_string("TDA"), Ok("ü".to_string()));
        assert_eq!(decode_to_string("bcher-KVA"), Ok("bücher".to_string()));
    }

    #[test]
    fn test_decode_uses_last_delimiter() {
        assert_eq!(
            decode_to_string("-> $1.00 <--"),
            Ok("-> $1.00 <-".to_string())
        );
    }

    #[test]
    fn test_decode_invalid_digit() {
        assert_eq!(
            decode("ab!"),
            Err(Error::InvalidInput(InvalidInput::InvalidDigit('!')))
        );
        assert_eq!(
            decode("abc-ü"),
            Err(Error::InvalidInput(InvalidInput::InvalidDigit('ü')))
        );
    }

    #[test]
    fn test_decode_non_ascii_basic() {
        assert_eq!(
            decode("bü-kva"),
            Err(Error::InvalidInput(InvalidInput::NonAsciiBasic('ü')))
        );
    }

    #[test]
    fn test_decode_unexpected_end() {
        // With the initial bias every first digit >= 1 asks for another digit
        assert_eq!(
            decode("abc-z"),
            Err(Error::InvalidInput(InvalidInput::UnexpectedEnd))
        );
    }

    #[test]
    fn test_decode_overflow() {
        assert_eq!(
            decode("99999999999"),
            Err(Error::InvalidInput(InvalidInput::Overflow))
        );
    }

    #[test]
    fn test_decode_invalid_code_point() {
        // Lands on a lone surrogate
        assert_eq!(
            decode("ib9b"),
            Err(Error::InvalidInput(InvalidInput::InvalidCodePoint(0xD800)))
        );
        // Lands past U+10FFFF
        assert_eq!(
            decode("99999a"),
            Err(Error::InvalidInput(InvalidInput::InvalidCodePoint(0x48A3C1)))
        );
    }

    #[test]
    fn test_roundtrip() {
        let cases = [
            "",
            "a",
            "ü",
            "bücher",
            "hello world",
            "例え",
            "Hello-Another-Way-それぞれの場所",
            "😀🙌🧰",
            "\u{10FFFF}",
        ];

        for original in cases {
            let encoded = encode_str(original).unwrap();
            let decoded = decode_to_string(&encoded)
                .unwrap_or_else(|e| panic!("decode failed for {}: {:?}", original, e));
            assert_eq!(
                decoded, original,
                "roundtrip failed for: {} (encoded: {})",
                original, encoded
            );
        }
    }
}
