use wasm_bindgen::prelude::*;

/// Encode a string with raw Bootstring.
/// Returns the encoding, or an error message prefixed with "Error: ".
#[wasm_bindgen]
pub fn encode(input: &str) -> String {
    flatten(punycode::encode_str(input))
}

/// Decode a raw Bootstring string back to Unicode.
/// Returns the decoded string, or an error message prefixed with "Error: ".
#[wasm_bindgen]
pub fn decode(input: &str) -> String {
    flatten(punycode::decode_to_string(input))
}

/// Convert a domain name or email address to ASCII.
#[wasm_bindgen]
pub fn to_ascii(input: &str) -> String {
    flatten(punycode::to_ascii(input))
}

/// Convert a domain name or email address to Unicode.
#[wasm_bindgen]
pub fn to_unicode(input: &str) -> String {
    flatten(punycode::to_unicode(input))
}

fn flatten(result: punycode::Result<String>) -> String {
    match result {
        Ok(s) => s,
        Err(e) => format!("Error: {e}"),
    }
}
