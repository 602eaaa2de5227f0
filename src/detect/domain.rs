//! Domain name grammar.

use super::{Detected, Interpreter};
use crate::Kind;

/// Maximum length of a domain name in presentation format.
pub const MAX_DOMAIN_LEN: usize = 255;

/// Maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Check if `s` is a well-formed domain name (RFC 1035, RFC 3696).
///
/// This is the lenient presentation-format grammar:
/// - at most 255 bytes in total and 63 per label
/// - labels hold ASCII letters, digits, `_` and `-`
/// - a label must not start or end with `-`, and must not be empty
/// - at least one letter (or `_`) somewhere, so dotted numbers are rejected
///
/// A single trailing dot is allowed. Registration of the TLD is not checked
/// here; see [`crate::TldRegistry`].
///
/// # Examples
/// ```
/// use inputtype::is_well_formed_domain;
///
/// assert!(is_well_formed_domain("www.example.com"));
/// assert!(is_well_formed_domain("example.com."));
/// assert!(!is_well_formed_domain("test.-nodomain.de"));
/// assert!(!is_well_formed_domain("127.0.0.1"));
/// ```
pub fn is_well_formed_domain(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_DOMAIN_LEN {
        return false;
    }

    // Treat the position before the first byte as a label boundary.
    let mut last = b'.';
    let mut seen_letter = false;
    let mut label_len = 0usize;

    for c in s.bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                seen_letter = true;
                label_len += 1;
            }
            b'0'..=b'9' => {
                label_len += 1;
            }
            b'-' => {
                if last == b'.' {
                    return false;
                }
                label_len += 1;
            }
            b'.' => {
                if last == b'.' || last == b'-' {
                    return false;
                }
                if label_len > MAX_LABEL_LEN || label_len == 0 {
                    return false;
                }
                label_len = 0;
            }
            _ => return false,
        }
        last = c;
    }

    if last == b'-' || label_len > MAX_LABEL_LEN {
        return false;
    }

    seen_letter
}

/// DomainInterpreter accepts dotted, well-formed domain names.
///
/// The detected value is the input string, unmodified.
pub struct DomainInterpreter;

impl Interpreter for DomainInterpreter {
    fn kind(&self) -> Kind {
        Kind::Domain
    }

    fn interpret(&self, input: &str) -> Option<Detected> {
        if input.contains('.') && is_well_formed_domain(input) {
            Some(Detected::Domain(input.to_string()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(is_well_formed_domain("www.domain.de"));
        assert!(is_well_formed_domain("yet-another-domain.com"));
        assert!(is_well_formed_domain("xn--punycode.subdomain2.subdomain1.domain.com"));
        assert!(is_well_formed_domain("_dmarc.example.com"));
        assert!(is_well_formed_domain("1password.com"));
        assert!(is_well_formed_domain("localhost"));
        assert!(is_well_formed_domain("EXAMPLE.COM."));
    }

    #[test]
    fn test_dash_placement() {
        assert!(!is_well_formed_domain("test.-nodomain.de"));
        assert!(!is_well_formed_domain("-example.com"));
        assert!(!is_well_formed_domain("nodomain-.com"));
        assert!(!is_well_formed_domain("example.com-"));
        assert!(is_well_formed_domain("a-b.c-d.com"));
    }

    #[test]
    fn test_empty_labels() {
        assert!(!is_well_formed_domain(""));
        assert!(!is_well_formed_domain("."));
        assert!(!is_well_formed_domain(".example.com"));
        assert!(!is_well_formed_domain("example..com"));
    }

    #[test]
    fn test_requires_letter() {
        assert!(!is_well_formed_domain("34.128.94.77"));
        assert!(!is_well_formed_domain("1.2.3"));
        assert!(is_well_formed_domain("1.2.3a"));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_well_formed_domain("exa mple.com"));
        assert!(!is_well_formed_domain("user@example.com"));
        assert!(!is_well_formed_domain("bücher.de"));
        assert!(!is_well_formed_domain("example.com/path"));
    }

    #[test]
    fn test_length_limits() {
        let label = "a".repeat(MAX_LABEL_LEN);
        assert!(is_well_formed_domain(&format!("{}.com", label)));
        assert!(!is_well_formed_domain(&format!("a{}.com", label)));
        assert!(!is_well_formed_domain(&format!("com.a{}", label)));

        // 4 * 63 + 3 dots = 255
        let max = vec![label.as_str(); 4].join(".");
        assert_eq!(max.len(), MAX_DOMAIN_LEN);
        assert!(is_well_formed_domain(&max));
        assert!(!is_well_formed_domain(&format!("{}.", max)));
    }

    #[test]
    fn test_interpret_requires_dot() {
        assert_eq!(DomainInterpreter.interpret("localhost"), None);
        assert_eq!(
            DomainInterpreter.interpret("www.domain.eu"),
            Some(Detected::Domain("www.domain.eu".to_string()))
        );
    }
}
