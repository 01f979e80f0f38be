//! Domain-specific error types for the clang-tidy generator.
//!
//! Library code returns [`GenerateError`] while the binary converts it to
//! [`anyhow::Error`] at the `main` boundary via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! GenerateError
//! ├── MissingTemplate     template file absent
//! ├── MalformedTemplate   template YAML does not parse
//! ├── InvalidTemplate     template parses but has an unusable shape
//! ├── Io                  read, metadata or write failure
//! └── Serialize           YAML emission failure
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The template file does not exist at the expected location.
    #[error("could not find template at {}", path.display())]
    MissingTemplate {
        /// Path where the template was expected.
        path: PathBuf,
    },

    /// The template exists but is not valid YAML.
    #[error("failed to parse template {}: {source}", path.display())]
    MalformedTemplate {
        /// Path to the template.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml_ng::Error,
    },

    /// The template is valid YAML but cannot be used to build a config.
    #[error("invalid template {}: {reason}", path.display())]
    InvalidTemplate {
        /// Path to the template.
        path: PathBuf,
        /// Human-readable reason.
        reason: String,
    },

    /// A filesystem operation failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A generated config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}

impl GenerateError {
    /// Build a [`GenerateError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
