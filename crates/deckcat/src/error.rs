//! Error types for deckcat.
//!
//! Every file-level error carries the resolved path so the user can tell
//! which section broke the build.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for deckcat operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Section Errors ===
    /// A configured section does not exist.
    #[error("section file not found: {path}")]
    FileNotFound {
        /// Resolved path of the missing file.
        path: PathBuf,
    },

    /// A section exists but could not be opened or read.
    #[error("failed to read section {path}: {source}")]
    FileAccess {
        /// Resolved path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A section is not valid UTF-8 text.
    #[error("section {path} is not valid UTF-8: {source}")]
    Decode {
        /// Resolved path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    // === Output Errors ===
    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The remark page template could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        /// Path to the template file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for deckcat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Classify an error from opening or reading a section file.
    #[must_use]
    pub fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileAccess { path, source }
        }
    }

    /// The section path this error refers to, if any.
    #[must_use]
    pub fn section_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileNotFound { path }
            | Self::FileAccess { path, .. }
            | Self::Decode { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error means a section file is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
