//! Detector and validator bundled behind one configuration.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::detect::{Detected, Detector};
use crate::error::Result;
use crate::{TldRegistry, Validator, Verdict};

/// Engine owns a [`Detector`] and a [`Validator`] sharing one TLD registry.
///
/// Build it once at startup and share it by reference; it holds no mutable
/// state.
pub struct Engine {
    detector: Detector,
    validator: Validator,
}

impl Engine {
    /// Create an engine from an already loaded registry.
    pub fn new(registry: TldRegistry, scratch_dir: impl Into<PathBuf>) -> Self {
        let scratch_dir = scratch_dir.into();
        Self {
            detector: Detector::new(scratch_dir.clone()),
            validator: Validator::new(Arc::new(registry)).with_scratch_dir(scratch_dir),
        }
    }

    /// Load the registry named in `config` and build an engine.
    ///
    /// # Errors
    /// Registry errors from [`TldRegistry::load`].
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let registry = TldRegistry::load(&config.tld_file)?;
        let engine = Self {
            detector: Detector::new(config.scratch_dir.clone()),
            validator: Validator::new(Arc::new(registry))
                .with_mapped_normalization(config.normalize_mapped_ipv6)
                .with_scratch_dir(config.scratch_dir.clone()),
        };
        Ok(engine)
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Detect the kind of `input`. See [`Detector::detect`].
    pub fn detect(&self, input: &str) -> Result<Detected> {
        self.detector.detect(input)
    }

    /// Validate a detected value. See [`Validator::validate`].
    pub fn validate(&self, detected: &Detected) -> Result<Verdict> {
        self.validator.validate(detected)
    }

    /// Detect, then validate.
    ///
    /// # Errors
    /// Detection errors, or [`crate::Error::NotInitialized`].
    pub fn check(&self, input: &str) -> Result<(Detected, Verdict)> {
        let detected = self.detect(input)?;
        let verdict = self.validate(&detected)?;
        Ok((detected, verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Kind, Reason};
    use std::fs;

    #[test]
    fn test_check() {
        let registry = TldRegistry::parse("COM\n").unwrap();
        let engine = Engine::new(registry, "/tmp");

        let (detected, verdict) = engine.check("8.8.8.8").unwrap();
        assert_eq!(detected.kind(), Kind::Ip);
        assert!(verdict.is_accepted());

        let (detected, verdict) = engine.check("somename@invalidtld.xx").unwrap();
        assert_eq!(detected.kind(), Kind::Email);
        assert_eq!(verdict, Verdict::Rejected(Reason::InvalidTld));

        assert!(matches!(engine.check(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let tlds = dir.path().join("tlds.txt");
        fs::write(&tlds, "COM\nDE\n").unwrap();
        fs::write(dir.path().join("sample"), b"MZ").unwrap();

        let config = EngineConfig::new(&tlds).with_scratch_dir(dir.path());
        let engine = Engine::from_config(&config).unwrap();

        assert_eq!(engine.validator().registry().len(), 2);
        assert_eq!(engine.detector().scratch_dir(), dir.path());

        let (detected, verdict) = engine.check("sample").unwrap();
        assert_eq!(detected, Detected::File(dir.path().join("sample")));
        assert!(verdict.is_accepted());
    }

    #[test]
    fn test_from_config_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let tlds = dir.path().join("tlds.txt");
        fs::write(&tlds, "# nothing here\n").unwrap();

        let config = EngineConfig::new(&tlds);
        assert!(matches!(Engine::from_config(&config), Err(Error::RegistryEmpty)));
    }
}
