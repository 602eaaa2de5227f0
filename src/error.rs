//! Error types for inputtype.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for inputtype operations.
///
/// Rejections produced by validation are not errors; see [`crate::Reason`].
#[derive(Error, Debug)]
pub enum Error {
    /// Detection was called with an empty string
    #[error("empty input string")]
    EmptyInput,

    /// No interpreter accepted the input
    #[error("unknown type")]
    UnknownType,

    /// TLD source could not be read
    #[error("error reading TLD file {path:?}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TLD source contained no entries
    #[error("TLD source did not contain any entries")]
    RegistryEmpty,

    /// TLD lookup against a registry that was never populated
    #[error("TLD registry not initialized")]
    NotInitialized,

    /// Invalid CIDR literal in a range table
    #[error("invalid CIDR pattern: {0}")]
    InvalidCidrPattern(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for the two terminal detection outcomes.
    pub fn is_detection(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::UnknownType)
    }
}

/// Result type alias for inputtype operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_errors() {
        assert!(Error::EmptyInput.is_detection());
        assert!(Error::UnknownType.is_detection());
        assert!(!Error::NotInitialized.is_detection());
        assert!(!Error::RegistryEmpty.is_detection());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyInput.to_string(), "empty input string");
        assert_eq!(Error::NotInitialized.to_string(), "TLD registry not initialized");
        assert_eq!(
            Error::InvalidCidrPattern("10.0.0.0/33".into()).to_string(),
            "invalid CIDR pattern: 10.0.0.0/33"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        fn parse(s: &str) -> Result<u32> {
            Ok(serde_json::from_str(s)?)
        }

        let err = parse("\"nope\"").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
        assert!(!err.is_detection());
    }
}
