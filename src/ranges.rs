//! Non-public IP range tables.
//!
//! See RFC 6890 and the IANA special-purpose address registries:
//! - <http://www.iana.org/assignments/iana-ipv4-special-registry/iana-ipv4-special-registry.xhtml>
//! - <http://www.iana.org/assignments/iana-ipv6-special-registry/iana-ipv6-special-registry.xhtml>

use ipnet::{Ipv4Net, Ipv6Net};
use once_cell::sync::Lazy;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use crate::error::{Error, Result};

/// IPv4 blocks that are not globally routable.
pub const IPV4_NON_PUBLIC: &[&str] = &[
    "0.0.0.0/8",          // this host on this network
    "127.0.0.0/8",        // loopback
    "169.254.0.0/16",     // link-local
    "100.64.0.0/10",      // shared address space (RFC 6598)
    "192.0.0.0/24",       // IETF protocol assignments
    "192.0.2.0/24",       // TEST-NET-1
    "198.18.0.0/15",      // benchmarking
    "198.51.100.0/24",    // TEST-NET-2
    "203.0.113.0/24",     // TEST-NET-3
    "240.0.0.0/4",        // reserved
    "255.255.255.255/32", // limited broadcast
    "224.0.0.0/24",       // local network control block (RFC 5771)
    "10.0.0.0/8",         // private
    "172.16.0.0/12",      // private
    "192.168.0.0/16",     // private
];

/// IPv6 blocks that are not globally routable.
pub const IPV6_NON_PUBLIC: &[&str] = &[
    "::/128",        // unspecified
    "::1/128",       // loopback
    "::ffff:0:0/96", // IPv4-mapped
    "100::/64",      // discard-only
    "2001::/32",     // TEREDO
    "2001:2::/48",   // benchmarking
    "2001:db8::/32", // documentation
    "fc00::/7",      // unique-local
    "fe80::/10",     // link-scoped unicast
    "ff00::/8",      // multicast
    "2001:20::/28",  // ORCHIDv2
];

static BUILTIN: Lazy<Arc<RangeTable>> = Lazy::new(|| {
    let table = RangeTable::from_literals(IPV4_NON_PUBLIC, IPV6_NON_PUBLIC)
        .unwrap_or_else(|e| panic!("built-in non-public range table is malformed: {}", e));
    Arc::new(table)
});

/// RangeTable holds one list of IPv4 and one list of IPv6 networks.
///
/// Tables are built once and only read afterwards.
///
/// # Examples
/// ```
/// use inputtype::RangeTable;
///
/// let table = RangeTable::non_public();
/// assert!(table.contains("10.1.2.3".parse().unwrap()));
/// assert!(!table.contains("8.8.8.8".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    /// IPv4 networks (sorted by network address)
    v4: Vec<Ipv4Net>,
    /// IPv6 networks (sorted by network address)
    v6: Vec<Ipv6Net>,
}

impl RangeTable {
    /// Get the shared built-in table of non-public ranges.
    ///
    /// # Panics
    /// On first use, if one of the built-in literals does not parse.
    pub fn non_public() -> Arc<RangeTable> {
        Arc::clone(&BUILTIN)
    }

    /// Build a table from CIDR literals.
    ///
    /// # Errors
    /// [`Error::InvalidCidrPattern`] if a literal does not parse as a
    /// network of the expected family.
    pub fn from_literals(v4: &[&str], v6: &[&str]) -> Result<Self> {
        let mut table = Self::default();
        for literal in v4 {
            let net = literal
                .parse::<Ipv4Net>()
                .map_err(|_| Error::InvalidCidrPattern(literal.to_string()))?;
            insert_sorted(&mut table.v4, net.trunc(), |n| n.network());
        }
        for literal in v6 {
            let net = literal
                .parse::<Ipv6Net>()
                .map_err(|_| Error::InvalidCidrPattern(literal.to_string()))?;
            insert_sorted(&mut table.v6, net.trunc(), |n| n.network());
        }
        Ok(table)
    }

    /// Get the number of IPv4 networks.
    pub fn v4_count(&self) -> usize {
        self.v4.len()
    }

    /// Get the number of IPv6 networks.
    pub fn v6_count(&self) -> usize {
        self.v6.len()
    }

    /// Check if an address lies in any network of its own family.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.contains_v4(v4),
            IpAddr::V6(v6) => self.contains_v6(v6),
        }
    }

    /// Check if an IPv4 address matches any range.
    pub fn contains_v4(&self, ip: Ipv4Addr) -> bool {
        self.v4.iter().any(|net| net.contains(&ip))
    }

    /// Check if an IPv6 address matches any range.
    pub fn contains_v6(&self, ip: Ipv6Addr) -> bool {
        self.v6.iter().any(|net| net.contains(&ip))
    }
}

/// Insert keeping `nets` sorted; an identical network is stored once.
fn insert_sorted<N, K, F>(nets: &mut Vec<N>, net: N, key: F)
where
    N: PartialEq,
    K: Ord,
    F: Fn(&N) -> K,
{
    let k = key(&net);
    let mut pos = nets.partition_point(|n| key(n) < k);
    while pos < nets.len() && key(&nets[pos]) == k {
        if nets[pos] == net {
            return;
        }
        pos += 1;
    }
    nets.insert(pos, net);
}
