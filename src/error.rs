//! Error types for the redgifs-downloader application.

use std::path::PathBuf;

use thiserror::Error;

use crate::download::BatchReport;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input errors
    #[error("Invalid RedGifs URL: {0}")]
    InvalidUrl(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("GIF not found: {0}")]
    AssetNotFound(String),

    #[error("Creator not found: {0}")]
    CreatorNotFound(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error(
        "Destination folder not found: {}. Make sure the folder exists before downloading into it.",
        .0.display()
    )]
    DestinationFolderMissing(PathBuf),

    /// The item stream failed partway through a batch. `report` holds what
    /// was downloaded before that.
    #[error("{source}")]
    BatchInterrupted {
        report: Box<BatchReport>,
        source: Box<Error>,
    },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error must stop the whole batch (and the rest of a URL
    /// list) instead of being recorded against a single item.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::BatchInterrupted { source, .. } => source.is_fatal(),
            _ => matches!(
                self,
                Error::DestinationFolderMissing(_) | Error::Authentication(_)
            ),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BatchInterrupted { source, .. } => source.exit_code(),
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Authentication(_) | Error::Api(_) | Error::Http(_) | Error::Json(_) => {
                exit_codes::API_ERROR
            }
            _ => exit_codes::ABORT,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
}
