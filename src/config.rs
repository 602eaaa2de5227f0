//! JSON configuration for services embedding the engine.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::detect::DEFAULT_SCRATCH_DIR;
use crate::error::Result;

/// Read exactly one JSON document from `path` into `T`.
///
/// # Errors
/// - [`crate::Error::Io`] if the file cannot be opened
/// - [`crate::Error::Json`] if it is not valid JSON for `T`
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Settings needed to build an [`crate::Engine`].
///
/// ```json
/// {
///     "tld_file": "/etc/holmes/tlds-alpha-by-domain.txt",
///     "scratch_dir": "/tmp",
///     "normalize_mapped_ipv6": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Newline-delimited TLD list
    pub tld_file: PathBuf,
    /// Directory file names are resolved in
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,
    /// Classify `::ffff:a.b.c.d` as IPv4
    #[serde(default = "default_true")]
    pub normalize_mapped_ipv6: bool,
}

fn default_scratch_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SCRATCH_DIR)
}

fn default_true() -> bool {
    true
}

impl EngineConfig {
    /// Create a config with default scratch directory and normalisation.
    pub fn new(tld_file: impl Into<PathBuf>) -> Self {
        Self {
            tld_file: tld_file.into(),
            scratch_dir: default_scratch_dir(),
            normalize_mapped_ipv6: true,
        }
    }

    /// Set the scratch directory.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"tld_file": "tlds.txt"}"#).unwrap();
        assert_eq!(config, EngineConfig::new("tlds.txt"));
        assert_eq!(config.scratch_dir, PathBuf::from("/tmp"));
        assert!(config.normalize_mapped_ipv6);
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tld_file": "/data/tlds.txt", "scratch_dir": "/srv/samples", "normalize_mapped_ipv6": false}}"#
        )
        .unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.tld_file, PathBuf::from("/data/tlds.txt"));
        assert_eq!(config.scratch_dir, PathBuf::from("/srv/samples"));
        assert!(!config.normalize_mapped_ipv6);
    }

    #[test]
    fn test_missing_required_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"scratch_dir": "/tmp"}}"#).unwrap();

        assert!(matches!(EngineConfig::load(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn test_trailing_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tld_file": "a"}} {{"tld_file": "b"}}"#).unwrap();

        assert!(matches!(EngineConfig::load(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            EngineConfig::load(dir.path().join("config.json")),
            Err(Error::Io(_))
        ));
    }
}
