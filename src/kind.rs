//! Input kind tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind is the detected shape of an input string.
///
/// Variants are listed in detection priority order. `Unknown` is never the
/// kind of a successful detection; it exists so callers can tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Plain IPv4 or IPv6 address
    #[serde(rename = "IP")]
    Ip,
    /// CIDR network
    #[serde(rename = "IPNet")]
    IpNetwork,
    /// Domain name
    Domain,
    /// Email address, optionally with display name
    Email,
    /// File inside the scratch directory
    File,
    /// Sentinel for failed detection
    Unknown,
}

impl Kind {
    /// All successful kinds in detection priority order.
    pub const DETECTION_ORDER: [Kind; 5] = [
        Kind::Ip,
        Kind::IpNetwork,
        Kind::Domain,
        Kind::Email,
        Kind::File,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ip => "IP",
            Kind::IpNetwork => "IPNet",
            Kind::Domain => "Domain",
            Kind::Email => "Email",
            Kind::File => "File",
            Kind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IP" => Ok(Kind::Ip),
            "IPNET" | "IPNETWORK" | "CIDR" => Ok(Kind::IpNetwork),
            "DOMAIN" => Ok(Kind::Domain),
            "EMAIL" => Ok(Kind::Email),
            "FILE" => Ok(Kind::File),
            "UNKNOWN" => Ok(Kind::Unknown),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Ip.to_string(), "IP");
        assert_eq!(Kind::IpNetwork.to_string(), "IPNet");
        assert_eq!(Kind::Domain.to_string(), "Domain");
        assert_eq!(Kind::Email.to_string(), "Email");
        assert_eq!(Kind::File.to_string(), "File");
        assert_eq!(Kind::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("ip".parse::<Kind>(), Ok(Kind::Ip));
        assert_eq!("IPNet".parse::<Kind>(), Ok(Kind::IpNetwork));
        assert_eq!("cidr".parse::<Kind>(), Ok(Kind::IpNetwork));
        assert_eq!("Domain".parse::<Kind>(), Ok(Kind::Domain));
        assert_eq!("url".parse::<Kind>(), Err(()));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Kind::IpNetwork).unwrap(), "\"IPNet\"");
        assert_eq!(serde_json::to_string(&Kind::Ip).unwrap(), "\"IP\"");
    }
}
