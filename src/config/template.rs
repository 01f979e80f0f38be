//! Loading the shared clang-tidy template.
use serde_yaml_ng::{Mapping, Value};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::check_options::CHECK_OPTIONS_KEY;
use crate::error::GenerateError;

/// A parsed template together with its source modification time.
///
/// The document is guaranteed to be a mapping whose `CheckOptions` entry,
/// when present, is a sequence.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    document: Mapping,
    modified: SystemTime,
}

impl Template {
    /// Read and parse the template at `path`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::MissingTemplate`] if `path` does not exist.
    /// - [`GenerateError::MalformedTemplate`] if the YAML does not parse.
    /// - [`GenerateError::InvalidTemplate`] if the document is not a mapping
    ///   or `CheckOptions` is not a sequence.
    /// - [`GenerateError::Io`] for any other read failure.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        if !path.exists() {
            return Err(GenerateError::MissingTemplate {
                path: path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| GenerateError::io(path, e))?;

        Self::parse(path, &content, modified)
    }

    /// Parse template `content` as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Template::load`], minus the filesystem cases.
    pub fn parse(path: &Path, content: &str, modified: SystemTime) -> Result<Self, GenerateError> {
        let value: Value =
            serde_yaml_ng::from_str(content).map_err(|source| GenerateError::MalformedTemplate {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Mapping(document) = value else {
            return Err(GenerateError::InvalidTemplate {
                path: path.to_path_buf(),
                reason: "top-level document must be a mapping".to_string(),
            });
        };

        match document.get(CHECK_OPTIONS_KEY) {
            None | Some(Value::Sequence(_)) => {}
            Some(_) => {
                return Err(GenerateError::InvalidTemplate {
                    path: path.to_path_buf(),
                    reason: format!("{CHECK_OPTIONS_KEY} must be a sequence"),
                });
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
            modified,
        })
    }

    /// Path the template was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed top-level mapping.
    #[must_use]
    pub const fn document(&self) -> &Mapping {
        &self.document
    }

    /// Last-modified time of the template file.
    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Number of `CheckOptions` entries in the template.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self.document.get(CHECK_OPTIONS_KEY) {
            Some(Value::Sequence(options)) => options.len(),
            _ => 0,
        }
    }
}
