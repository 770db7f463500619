use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Handover not found: {0}")]
    NotFound(String),

    #[error("Data store error: {0}")]
    Store(#[from] StoreError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent store data: {0}")]
    Invalid(String),
}

/// A single photo could not be retrieved
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response exceeds {0} bytes")]
    TooLarge(usize),

    #[error("No image registered for {0}")]
    Missing(String),
}

/// Fetched bytes could not be turned into an embeddable image
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image data is empty")]
    Empty,

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
