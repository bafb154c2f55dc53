//! Per-label conversion of domain names and email addresses.
//!
//! Labels are separated by any of U+002E, U+3002, U+FF0E or U+FF61 and are
//! always rejoined with `.`. Only labels that contain non-ASCII code points
//! are encoded, and only labels carrying the `xn--` marker are decoded, so
//! [`to_ascii`] is idempotent.

use crate::decode::decode_to_string;
use crate::encode::encode_str;
use crate::error::Result;

/// Marker prepended to encoded labels.
pub const ACE_PREFIX: &str = "xn--";

/// Characters that end a label.
pub const LABEL_SEPARATORS: [char; 4] = ['\u{002E}', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// What to do when a single label fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failing label and return its error.
    #[default]
    FailFast,
    /// Keep the failing label as it was in the input and continue.
    BestEffort,
}

/// Converts whole domain names and email addresses label by label.
///
/// # Examples
///
/// ```
/// use punycode::{DomainConverter, ErrorPolicy};
///
/// let converter = DomainConverter::new();
/// assert_eq!(converter.to_ascii("☕.example.org").unwrap(), "xn--53h.example.org");
///
/// let lenient = DomainConverter::new().with_policy(ErrorPolicy::BestEffort);
/// assert_eq!(lenient.to_unicode("xn--53h.xn--!!.org").unwrap(), "☕.xn--!!.org");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainConverter {
    policy: ErrorPolicy,
}

impl DomainConverter {
    /// Create a converter with the fail-fast policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how label failures are handled.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Convert a domain name or email address to its ASCII form.
    ///
    /// For addresses only the part after the last `@` is converted.
    pub fn to_ascii(&self, input: &str) -> Result<String> {
        self.convert(input, |label| {
            if label.is_ascii() {
                return Ok(None);
            }
            let encoded = encode_str(label)?;
            Ok(Some(format!("{}{}", ACE_PREFIX, encoded)))
        })
    }

    /// Convert a domain name or email address back to Unicode.
    ///
    /// Labels starting with `xn--` (in any case) are decoded; every other
    /// label is left untouched.
    pub fn to_unicode(&self, input: &str) -> Result<String> {
        self.convert(input, |label| match strip_ace_prefix(label) {
            Some(rest) => decode_to_string(rest).map(Some),
            None => Ok(None),
        })
    }

    fn convert<F>(&self, input: &str, convert_label: F) -> Result<String>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        if let Some((local, domain)) = input.rsplit_once('@') {
            let domain = self.convert_domain(domain, &convert_label)?;
            return Ok(format!("{}@{}", local, domain));
        }
        self.convert_domain(input, &convert_label)
    }

    fn convert_domain<F>(&self, domain: &str, convert_label: &F) -> Result<String>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let mut labels = Vec::new();

        for label in domain.split(LABEL_SEPARATORS) {
            match convert_label(label) {
                Ok(Some(converted)) => {
                    tracing::trace!(label, %converted, "converted label");
                    labels.push(converted);
                }
                Ok(None) => labels.push(label.to_string()),
                Err(e) => match self.policy {
                    ErrorPolicy::FailFast => return Err(e),
                    ErrorPolicy::BestEffort => {
                        tracing::warn!(label, error = %e, "leaving label unconverted");
                        labels.push(label.to_string());
                    }
                },
            }
        }

        Ok(labels.join("."))
    }
}

/// Convert a domain name or email address to ASCII, failing on the first bad label.
///
/// ```
/// assert_eq!(punycode::to_ascii("user@☕.example.org").unwrap(), "user@xn--53h.example.org");
/// ```
pub fn to_ascii(input: &str) -> Result<String> {
    DomainConverter::new().to_ascii(input)
}

/// Convert a domain name or email address to Unicode, failing on the first bad label.
///
/// ```
/// assert_eq!(punycode::to_unicode("xn--53h.example.org").unwrap(), "☕.example.org");
/// ```
pub fn to_unicode(input: &str) -> Result<String> {
    DomainConverter::new().to_unicode(input)
}

fn strip_ace_prefix(label: &str) -> Option<&str> {
    let prefix = label.get(..ACE_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(ACE_PREFIX) {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}
