//! Registry of top-level domains.
//!
//! The usual source is the IANA list:
//! `http://data.iana.org/TLD/tlds-alpha-by-domain.txt`

use ahash::AHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// TldRegistry is the set of registered top-level domains.
///
/// Entries are stored uppercase and lookups are case-insensitive. A registry
/// is populated once by one of the constructors and is read-only afterwards;
/// share it behind an `Arc` across threads.
///
/// # Examples
/// ```
/// use inputtype::TldRegistry;
///
/// let registry = TldRegistry::parse("# comment\nCOM\nde\n").unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.is_registered_tld("example.com").unwrap());
/// assert!(registry.is_registered_tld("EXAMPLE.DE.").unwrap());
/// assert!(!registry.is_registered_tld("example.eu").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TldRegistry {
    tlds: AHashSet<String>,
}

impl TldRegistry {
    /// Load a registry from a newline-delimited file.
    ///
    /// # Errors
    /// - [`Error::RegistryRead`] if the file cannot be opened or read
    /// - [`Error::RegistryEmpty`] if it holds no entries
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_error = |source: std::io::Error| Error::RegistryRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let registry = Self::from_reader(file).map_err(|e| match e {
            Error::Io(source) => read_error(source),
            other => other,
        })?;

        log::info!("Loaded {} TLDs from {:?}", registry.len(), path);
        Ok(registry)
    }

    /// Read a registry from any reader.
    ///
    /// Whitespace around entries is trimmed; blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Errors
    /// - [`Error::Io`] if reading fails
    /// - [`Error::RegistryEmpty`] if no entries remain
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut tlds = AHashSet::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let tld = line.trim();
            if tld.is_empty() || tld.starts_with('#') {
                continue;
            }
            if !tld.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                log::warn!("TLD entry {:?} is not a plain ASCII label", tld);
            }
            tlds.insert(tld.to_uppercase());
        }

        if tlds.is_empty() {
            return Err(Error::RegistryEmpty);
        }

        Ok(Self { tlds })
    }

    /// Parse a registry from a string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    /// Get the number of registered TLDs.
    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    /// Check if the registry has no entries.
    ///
    /// Only a `Default` registry can be empty; the constructors refuse to
    /// build one.
    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    /// Check if a single TLD label is registered (case-insensitive).
    pub fn contains(&self, tld: &str) -> bool {
        self.tlds.contains(&tld.to_uppercase())
    }

    /// Check if the TLD of `domain` is registered.
    ///
    /// One trailing dot is ignored. A domain without any dot has no TLD and
    /// is not registered.
    ///
    /// # Errors
    /// [`Error::NotInitialized`] if the registry is empty. This is a caller
    /// bug, not a validation outcome.
    pub fn is_registered_tld(&self, domain: &str) -> Result<bool> {
        if self.is_empty() {
            return Err(Error::NotInitialized);
        }

        Ok(match tld_of(domain) {
            Some(tld) => self.contains(tld),
            None => false,
        })
    }
}

/// Get the final label of a domain, ignoring one trailing dot.
///
/// Returns `None` for single-label names and empty TLDs.
pub fn tld_of(domain: &str) -> Option<&str> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let (_, tld) = domain.rsplit_once('.')?;
    if tld.is_empty() {
        None
    } else {
        Some(tld)
    }
}
