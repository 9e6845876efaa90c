//! Errors raised by the tailoring pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the tailoring pipeline.
#[derive(Debug, Error)]
pub enum TailorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch URL {url}. Status code: {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("Error reading settings file at {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Conversion failed: {0}")]
    Convert(#[from] resumark::Error),
}
