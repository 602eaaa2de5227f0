//! Validation rejection reasons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason explains why the validator rejected a detected value.
///
/// These are expected outcomes, not errors. The multicast and link-local
/// variants can be represented but the IP classifier currently reports every
/// range-table hit as [`Reason::NotPublic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    InvalidDomain,
    InvalidTld,
    FileNotFound,
    FileAccessDenied,
    Loopback,
    Unspecified,
    Multicast,
    InterfaceLocalMulticast,
    LinkLocalMulticast,
    LinkLocalUnicast,
    NotPublic,
}

impl Reason {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::InvalidDomain => "Invalid Domain",
            Reason::InvalidTld => "Invalid TLD",
            Reason::FileNotFound => "File Not Found",
            Reason::FileAccessDenied => "File Access Denied",
            Reason::Loopback => "Loopback IP",
            Reason::Unspecified => "Unspecified IP",
            Reason::Multicast => "Multicast IP",
            Reason::InterfaceLocalMulticast => "Interface Local Multicast IP",
            Reason::LinkLocalMulticast => "Link Local Multicast IP",
            Reason::LinkLocalUnicast => "Link Local Unicast IP",
            Reason::NotPublic => "Non-Public IP",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
