//! Ordered input type detection.
//!
//! A [`Detector`] runs a fixed chain of [`Interpreter`]s over the input and
//! returns the first value that parses. The order matters because the
//! grammars overlap: an IP literal is also a well-formed path name, and a
//! domain is a valid file name.

mod cidr;
mod domain;
mod email;
mod file;
mod ip;

pub use cidr::{CidrInterpreter, IpNetwork};
pub use domain::{is_well_formed_domain, DomainInterpreter, MAX_DOMAIN_LEN, MAX_LABEL_LEN};
pub use email::{EmailAddress, EmailInterpreter};
pub use file::{is_confined, resolve_in_scratch, FileInterpreter, DEFAULT_SCRATCH_DIR};
pub use ip::IpInterpreter;

use serde::Serialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::Kind;

/// A successfully detected input together with its parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Detected {
    #[serde(rename = "IP")]
    Ip(IpAddr),
    #[serde(rename = "IPNet")]
    IpNetwork(IpNetwork),
    /// The input string, unmodified
    Domain(String),
    Email(EmailAddress),
    /// Absolute path inside the scratch directory
    File(PathBuf),
}

impl Detected {
    /// Get the kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Detected::Ip(_) => Kind::Ip,
            Detected::IpNetwork(_) => Kind::IpNetwork,
            Detected::Domain(_) => Kind::Domain,
            Detected::Email(_) => Kind::Email,
            Detected::File(_) => Kind::File,
        }
    }
}

/// Interpreter tries to read an input string as one specific kind.
///
/// Interpreters are independent of each other; the [`Detector`] owns the
/// priority order.
pub trait Interpreter: Send + Sync {
    /// The kind this interpreter produces.
    fn kind(&self) -> Kind;

    /// Try to interpret a non-empty input.
    ///
    /// # Returns
    /// `Some(value)` if the input has this interpreter's shape, `None` to let
    /// the next interpreter try.
    fn interpret(&self, input: &str) -> Option<Detected>;
}

/// Detector classifies raw strings into one of the [`Kind`]s.
///
/// # Examples
/// ```
/// use inputtype::{Detector, Kind};
///
/// let detector = Detector::new("/tmp");
/// assert_eq!(detector.detect("8.8.8.8").unwrap().kind(), Kind::Ip);
/// assert_eq!(detector.detect("10.0.0.0/8").unwrap().kind(), Kind::IpNetwork);
/// assert_eq!(detector.detect("www.example.com").unwrap().kind(), Kind::Domain);
/// assert!(detector.detect("").is_err());
/// ```
pub struct Detector {
    interpreters: Vec<Box<dyn Interpreter>>,
    scratch_dir: PathBuf,
}

impl Detector {
    /// Create a detector whose file interpreter resolves names inside `scratch_dir`.
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        let scratch_dir = scratch_dir.into();
        Self {
            interpreters: vec![
                Box::new(IpInterpreter),
                Box::new(CidrInterpreter),
                Box::new(DomainInterpreter),
                Box::new(EmailInterpreter),
                Box::new(FileInterpreter::new(scratch_dir.clone())),
            ],
            scratch_dir,
        }
    }

    /// Get the scratch directory file names are resolved against.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Detect the kind of `input`.
    ///
    /// # Errors
    /// - [`Error::EmptyInput`] if `input` is empty
    /// - [`Error::UnknownType`] if no interpreter accepts it
    pub fn detect(&self, input: &str) -> Result<Detected> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        for interpreter in &self.interpreters {
            if let Some(detected) = interpreter.interpret(input) {
                log::debug!("Detected {:?} as {}", input, interpreter.kind());
                return Ok(detected);
            }
        }

        log::debug!("No interpreter accepted {:?}", input);
        Err(Error::UnknownType)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DEFAULT_SCRATCH_DIR)
    }
}
