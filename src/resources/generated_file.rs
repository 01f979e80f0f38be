//! The generated `.clang-tidy` file of one target folder.
use anyhow::Result;
use serde_yaml_ng::Mapping;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{Resource, ResourceChange, ResourceState};
use crate::config::check_options;
use crate::config::template::Template;
use crate::error::GenerateError;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "# AUTO GENERATED. DO NOT EDIT!";

/// Destination for rendered config text.
///
/// [`FsWriter`] writes to disk; tests substitute a recording or mock writer
/// to observe whether a write happened.
pub trait OutputWriter {
    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes files with [`std::fs::write`]. Parent directories are not created.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl OutputWriter for FsWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|e| GenerateError::io(path, e))?;
        Ok(())
    }
}

/// Whether `output` must be regenerated from a template modified at `template_time`.
///
/// True if `output` does not exist or was last modified strictly before
/// `template_time`. File contents are never inspected, so a hand-edited
/// output newer than the template counts as up to date.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] if the metadata of an existing file cannot
/// be read.
pub fn is_stale(output: &Path, template_time: SystemTime) -> Result<bool, GenerateError> {
    match output_modified(output)? {
        None => Ok(true),
        Some(modified) => Ok(modified < template_time),
    }
}

/// Modification time of `path`, or `None` if it does not exist.
fn output_modified(path: &Path) -> Result<Option<SystemTime>, GenerateError> {
    match std::fs::metadata(path) {
        Ok(meta) => meta
            .modified()
            .map(Some)
            .map_err(|e| GenerateError::io(path, e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GenerateError::io(path, e)),
    }
}

/// Render `config` as block-style YAML preceded by [`GENERATED_HEADER`].
///
/// Keys are emitted in insertion order.
///
/// # Errors
///
/// Returns [`GenerateError::Serialize`] if the mapping cannot be emitted.
pub fn render_config(config: &Mapping) -> Result<String, GenerateError> {
    let body = serde_yaml_ng::to_string(config)?;
    Ok(format!("{GENERATED_HEADER}\n{body}"))
}

/// Render `config` and hand it to `writer` for `path`.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_config(path: &Path, config: &Mapping, writer: &dyn OutputWriter) -> Result<()> {
    let text = render_config(config)?;
    writer.write(path, &text)
}

/// A folder's `.clang-tidy`, kept in sync with the template by mtime.
pub struct GeneratedFile<'a> {
    path: PathBuf,
    prefix: String,
    template: &'a Template,
    writer: &'a dyn OutputWriter,
}

impl<'a> GeneratedFile<'a> {
    /// Create a resource for `path` carrying `prefix`, derived from `template`.
    #[must_use]
    pub fn new(
        path: PathBuf,
        prefix: String,
        template: &'a Template,
        writer: &'a dyn OutputWriter,
    ) -> Self {
        Self {
            path,
            prefix,
            template,
            writer,
        }
    }

    /// Output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Macro prefix written into this file.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Debug for GeneratedFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedFile")
            .field("path", &self.path)
            .field("prefix", &self.prefix)
            .field("template", &self.template.path())
            .finish_non_exhaustive()
    }
}

impl Resource for GeneratedFile<'_> {
    fn description(&self) -> String {
        format!("{} ({})", self.path.display(), self.prefix)
    }

    fn current_state(&self) -> Result<ResourceState> {
        match output_modified(&self.path)? {
            None => Ok(ResourceState::Missing),
            Some(modified) if modified < self.template.modified() => Ok(ResourceState::Stale {
                reason: "older than template".to_string(),
            }),
            Some(_) => Ok(ResourceState::Current),
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        let config = check_options::build_config(self.template, &self.prefix)?;
        write_config(&self.path, &config, self.writer)?;
        Ok(ResourceChange::Applied)
    }
}
