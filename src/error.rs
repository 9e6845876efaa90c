//! Error types for resumark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page header text could not be loaded.
    #[error("Error reading header file at {}: {source}", path.display())]
    Header {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Error writing the OOXML package.
    #[error("Package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid render configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("heading level 7".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: heading level 7");

        let err = Error::Header {
            path: PathBuf::from("settings/header.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Error reading header file at settings/header.txt: missing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
