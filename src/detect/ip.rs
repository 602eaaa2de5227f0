//! Plain IP address literals.

use std::net::IpAddr;

use super::{Detected, Interpreter};
use crate::Kind;

/// IpInterpreter accepts strict dotted-quad IPv4 and colon-hex IPv6 literals.
///
/// No surrounding text, zones, ports or decimal forms are accepted.
pub struct IpInterpreter;

impl Interpreter for IpInterpreter {
    fn kind(&self) -> Kind {
        Kind::Ip
    }

    fn interpret(&self, input: &str) -> Option<Detected> {
        input.parse::<IpAddr>().ok().map(Detected::Ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4() {
        let ip: IpAddr = "8.8.8.8".parse().unwrap();
        assert_eq!(IpInterpreter.interpret("8.8.8.8"), Some(Detected::Ip(ip)));
    }

    #[test]
    fn test_ipv6() {
        let ip: IpAddr = "2001:4860:4860::8888".parse().unwrap();
        assert_eq!(
            IpInterpreter.interpret("2001:4860:4860::8888"),
            Some(Detected::Ip(ip))
        );
    }

    #[test]
    fn test_rejects_non_literals() {
        assert_eq!(IpInterpreter.interpret("256.1.1.1"), None);
        assert_eq!(IpInterpreter.interpret(" 8.8.8.8"), None);
        assert_eq!(IpInterpreter.interpret("8.8.8.8:53"), None);
        assert_eq!(IpInterpreter.interpret("134744072"), None);
        assert_eq!(IpInterpreter.interpret("10.0.0.0/8"), None);
        assert_eq!(IpInterpreter.interpret("fe80::1%eth0"), None);
    }
}
