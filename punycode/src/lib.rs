//! Punycode: convert Unicode domain names to ASCII and back.
//!
//! This crate implements the Bootstring algorithm (RFC 3492) with the
//! Punycode parameters, plus a label-aware converter for domain names and
//! email addresses that applies it behind the `xn--` marker.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(x)) == x` for every code point sequence
//! - Raw encoding is not idempotent: `encode("abc") == "abc-"`
//! - Domain conversion is idempotent: `to_ascii(to_ascii(s)) == to_ascii(s)`
//!
//! # Examples
//!
//! ```
//! use punycode::{decode_to_string, encode_str, to_ascii, to_unicode};
//!
//! assert_eq!(encode_str("bücher").unwrap(), "bcher-kva");
//! assert_eq!(decode_to_string("bcher-kva").unwrap(), "bücher");
//!
//! assert_eq!(to_ascii("☕.example.org").unwrap(), "xn--53h.example.org");
//! assert_eq!(to_unicode("xn--53h.example.org").unwrap(), "☕.example.org");
//! ```

mod bootstring;
mod decode;
mod domain;
mod encode;
mod error;
pub mod ucs2;

pub use decode::{decode, decode_to_string};
pub use domain::{
    to_ascii, to_unicode, DomainConverter, ErrorPolicy, ACE_PREFIX, LABEL_SEPARATORS,
};
pub use encode::{encode, encode_str};
pub use error::{Error, InvalidInput, Result};
