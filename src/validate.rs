//! Admissibility rules per detected kind.

use std::fs::{self, File};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::detect::{is_confined, is_well_formed_domain, Detected, EmailAddress};
use crate::error::Result;
use crate::{RangeTable, Reason, TldRegistry, Verdict};

/// Classify an address as public or not.
///
/// Checks run in order and the first hit decides the reason:
/// 1. loopback → [`Reason::Loopback`]
/// 2. unspecified → [`Reason::Unspecified`]
/// 3. in the table for the address family → [`Reason::NotPublic`]
///
/// The address family is taken as given; IPv4-mapped IPv6 addresses are
/// looked up in the IPv6 table. Use [`Validator`] for normalisation.
pub fn validate_public_ip(ip: IpAddr, ranges: &RangeTable) -> Verdict {
    if ip.is_loopback() {
        return Verdict::Rejected(Reason::Loopback);
    }
    if ip.is_unspecified() {
        return Verdict::Rejected(Reason::Unspecified);
    }
    if ranges.contains(ip) {
        return Verdict::Rejected(Reason::NotPublic);
    }
    Verdict::Accepted
}

/// Check that a file can be stat'ed and opened for reading.
pub fn validate_file(path: &Path) -> Verdict {
    if fs::metadata(path).is_err() {
        return Verdict::Rejected(Reason::FileNotFound);
    }
    match File::open(path) {
        Ok(_) => Verdict::Accepted,
        Err(_) => Verdict::Rejected(Reason::FileAccessDenied),
    }
}

/// Validator applies the admissibility rules to detected values.
///
/// Validation is a pure function of the value, the TLD registry and the
/// range table: calling it twice gives the same verdict.
///
/// # Examples
/// ```
/// use inputtype::{Detector, Reason, TldRegistry, Validator, Verdict};
/// use std::sync::Arc;
///
/// let registry = Arc::new(TldRegistry::parse("COM\n").unwrap());
/// let validator = Validator::new(registry);
/// let detector = Detector::default();
///
/// let detected = detector.detect("127.0.0.1").unwrap();
/// assert_eq!(validator.validate(&detected).unwrap(), Verdict::Rejected(Reason::Loopback));
///
/// let detected = detector.detect("www.example.com").unwrap();
/// assert_eq!(validator.validate(&detected).unwrap(), Verdict::Accepted);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<TldRegistry>,
    ranges: Arc<RangeTable>,
    normalize_mapped: bool,
    scratch_dir: Option<PathBuf>,
}

impl Validator {
    /// Create a validator using the built-in non-public range table.
    pub fn new(registry: Arc<TldRegistry>) -> Self {
        Self {
            registry,
            ranges: RangeTable::non_public(),
            normalize_mapped: true,
            scratch_dir: None,
        }
    }

    /// Use a different range table.
    pub fn with_ranges(mut self, ranges: Arc<RangeTable>) -> Self {
        self.ranges = ranges;
        self
    }

    /// Choose whether IPv4-mapped IPv6 addresses are classified as IPv4.
    ///
    /// Enabled by default. When disabled, `::ffff:a.b.c.d` only ever matches
    /// the IPv6 table.
    pub fn with_mapped_normalization(mut self, enabled: bool) -> Self {
        self.normalize_mapped = enabled;
        self
    }

    /// Require files to resolve inside `dir`, following symlinks.
    ///
    /// A file whose real path has moved outside `dir` since detection is
    /// rejected as [`Reason::FileNotFound`].
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Get the TLD registry.
    pub fn registry(&self) -> &TldRegistry {
        &self.registry
    }

    /// Validate a detected value.
    ///
    /// Networks are accepted as detected.
    ///
    /// # Errors
    /// [`crate::Error::NotInitialized`] if a domain or email is validated
    /// against an empty registry.
    pub fn validate(&self, detected: &Detected) -> Result<Verdict> {
        let verdict = match detected {
            Detected::Ip(ip) => self.validate_ip(*ip),
            Detected::IpNetwork(_) => Verdict::Accepted,
            Detected::Domain(domain) => self.validate_domain(domain)?,
            Detected::Email(email) => self.validate_email(email)?,
            Detected::File(path) => self.validate_file(path),
        };

        if let Verdict::Rejected(reason) = verdict {
            log::debug!("Rejected {} value: {}", detected.kind(), reason);
        }
        Ok(verdict)
    }

    /// Check that an address is publicly routable.
    pub fn validate_ip(&self, ip: IpAddr) -> Verdict {
        let ip = if self.normalize_mapped {
            ip.to_canonical()
        } else {
            ip
        };
        validate_public_ip(ip, &self.ranges)
    }

    /// Check a file, enforcing the scratch directory if one is set.
    pub fn validate_file(&self, path: &Path) -> Verdict {
        match &self.scratch_dir {
            Some(root) if !is_confined(root, path) => Verdict::Rejected(Reason::FileNotFound),
            _ => validate_file(path),
        }
    }

    /// Check that a domain is well-formed and has a registered TLD.
    pub fn validate_domain(&self, domain: &str) -> Result<Verdict> {
        if !is_well_formed_domain(domain) {
            return Ok(Verdict::Rejected(Reason::InvalidDomain));
        }
        self.check_tld(domain)
    }

    /// Check the domain part of an email address.
    ///
    /// The domain must be well-formed, have at least two labels and a
    /// registered TLD.
    pub fn validate_email(&self, email: &EmailAddress) -> Result<Verdict> {
        self.validate_mail_domain(email.domain())
    }

    /// Like [`Validator::validate_email`] on an unparsed `local@domain` string,
    /// splitting at the last `@`.
    pub fn validate_email_str(&self, address: &str) -> Result<Verdict> {
        let domain = address.rsplit('@').next().unwrap_or(address);
        self.validate_mail_domain(domain)
    }

    fn validate_mail_domain(&self, domain: &str) -> Result<Verdict> {
        if domain.split('.').count() < 2 || !is_well_formed_domain(domain) {
            return Ok(Verdict::Rejected(Reason::InvalidDomain));
        }
        self.check_tld(domain)
    }

    fn check_tld(&self, domain: &str) -> Result<Verdict> {
        if self.registry.is_registered_tld(domain)? {
            Ok(Verdict::Accepted)
        } else {
            Ok(Verdict::Rejected(Reason::InvalidTld))
        }
    }
}
