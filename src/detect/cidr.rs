//! CIDR network literals.

use ipnet::IpNet;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;

use super::{Detected, Interpreter};
use crate::Kind;

/// IpNetwork is a parsed `<ip>/<prefix>` range.
///
/// The address is always the network's base address: host bits given in
/// the input are cleared.
///
/// # Examples
/// ```
/// use inputtype::IpNetwork;
///
/// let net: IpNetwork = "192.168.7.9/20".parse().unwrap();
/// assert_eq!(net.addr().to_string(), "192.168.0.0");
/// assert_eq!(net.mask_bytes(), vec![255, 255, 240, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpNetwork(IpNet);

impl IpNetwork {
    /// Create a network, truncating `net` to its base address.
    pub fn new(net: IpNet) -> Self {
        Self(net.trunc())
    }

    /// Get the base address.
    pub fn addr(&self) -> IpAddr {
        self.0.network()
    }

    /// Get the prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }

    /// Get the netmask: the first `prefix_len` bits set, the rest clear.
    pub fn mask(&self) -> IpAddr {
        self.0.netmask()
    }

    /// Get the netmask as 4 or 16 bytes.
    pub fn mask_bytes(&self) -> Vec<u8> {
        match self.mask() {
            IpAddr::V4(mask) => mask.octets().to_vec(),
            IpAddr::V6(mask) => mask.octets().to_vec(),
        }
    }

    /// Check if an address falls inside this network.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.0.contains(ip)
    }
}

impl From<IpNet> for IpNetwork {
    fn from(net: IpNet) -> Self {
        Self::new(net)
    }
}

impl std::str::FromStr for IpNetwork {
    type Err = ipnet::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpNet>().map(Self::new)
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for IpNetwork {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// CidrInterpreter accepts `<ip>/<prefix>` networks in IPv4 or IPv6 form.
pub struct CidrInterpreter;

impl Interpreter for CidrInterpreter {
    fn kind(&self) -> Kind {
        Kind::IpNetwork
    }

    fn interpret(&self, input: &str) -> Option<Detected> {
        input.parse::<IpNetwork>().ok().map(Detected::IpNetwork)
    }
}
