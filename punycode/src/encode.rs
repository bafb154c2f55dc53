//! Bootstring encoding (RFC 3492 section 6.3).

use crate::bootstring::{
    adapt_bias, encode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::error::{Error, Result};

/// Encode a sequence of code points as Punycode.
///
/// Basic code points are copied first, followed by a hyphen when there are
/// any, followed by the digits that place every other code point. This is
/// not idempotent: an all-ASCII input gains a trailing hyphen.
///
/// # Examples
///
/// ```
/// let label: Vec<char> = "bücher".chars().collect();
/// assert_eq!(punycode::encode(&label).unwrap(), "bcher-kva");
/// ```
pub fn encode(input: &[char]) -> Result<String> {
    let mut output = String::with_capacity(input.len());
    encode_into(input, &mut output)?;
    Ok(output)
}

/// Encode a string as Punycode.
///
/// Convenience wrapper around [`encode`] over the string's code points.
///
/// ```
/// assert_eq!(punycode::encode_str("ü").unwrap(), "tda");
/// assert_eq!(punycode::encode_str("abc").unwrap(), "abc-");
/// ```
pub fn encode_str(input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    encode(&chars)
}

fn encode_into(input: &[char], output: &mut String) -> Result<()> {
    output.extend(input.iter().filter(|c| c.is_ascii()));

    let basic_len = u32::try_from(output.len()).map_err(|_| Error::Overflow)?;
    let total_len = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < total_len {
        // Smallest code point not yet handled; one always exists while handled < total_len
        let m = input
            .iter()
            .map(|&c| c as u32)
            .filter(|&c| c >= n)
            .min()
            .ok_or(Error::Overflow)?;

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(Error::Overflow)?;
        n = m;

        for &c in input {
            let c = c as u32;
            if c < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            } else if c == n {
                encode_varint(output, delta, bias);
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    Ok(())
}

/// Append `value` as a generalized variable-length integer.
fn encode_varint(output: &mut String, mut value: u32, bias: u32) {
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);
        if value < t {
            break;
        }

        let digit = t + (value - t) % (BASE - t);
        output.extend(encode_digit(digit));

        value = (value - t) / (BASE - t);
        k += BASE;
    }

    // value < t <= T_MAX here, always a valid digit
    output.extend(encode_digit(value));
}
