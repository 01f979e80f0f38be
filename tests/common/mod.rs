// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed repository with a template and
// target folders, plus helpers to pin modification times so staleness tests
// do not depend on filesystem timestamp resolution.
#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use clang_tidy_gen::config::{GeneratorConfig, TEMPLATE_FILE_NAME};

/// Template used by most tests.
pub const BASIC_TEMPLATE: &str = "CheckOptions:\n- key: some.check\n  value: x\n";

/// An isolated repository root backed by a [`tempfile::TempDir`].
pub struct TestRepo {
    /// Temporary directory acting as the repository root.
    pub root: tempfile::TempDir,
}

impl TestRepo {
    /// Path to the repository root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the template file.
    pub fn template_path(&self) -> PathBuf {
        self.root.path().join(TEMPLATE_FILE_NAME)
    }

    /// Path to the generated file of `folder`.
    pub fn output_path(&self, folder: &str) -> PathBuf {
        self.root.path().join(folder).join(".clang-tidy")
    }

    /// Overwrite the template with `content`.
    pub fn write_template(&self, content: &str) {
        std::fs::write(self.template_path(), content).expect("write template");
    }

    /// Read the generated file of `folder`.
    pub fn read_output(&self, folder: &str) -> String {
        std::fs::read_to_string(self.output_path(folder)).expect("read output")
    }

    /// Default run config rooted at this repository.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::for_root(self.root.path())
    }
}

/// Set the modification time of `path` to `secs` seconds after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .expect("open for set_modified")
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set_modified");
}

/// Modification time of `path`.
pub fn mtime(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("read mtime")
}

/// Fluent builder for [`TestRepo`].
pub struct TestRepoBuilder {
    template: Option<String>,
    folders: Vec<String>,
}

impl TestRepoBuilder {
    /// Start with [`BASIC_TEMPLATE`] and the `engine` and `test` folders.
    pub fn new() -> Self {
        Self {
            template: Some(BASIC_TEMPLATE.to_string()),
            folders: vec!["engine".to_string(), "test".to_string()],
        }
    }

    /// Use `content` as the template.
    pub fn with_template(mut self, content: &str) -> Self {
        self.template = Some(content.to_string());
        self
    }

    /// Do not create a template file.
    pub fn without_template(mut self) -> Self {
        self.template = None;
        self
    }

    /// Replace the set of folders created on disk.
    pub fn with_folders(mut self, folders: &[&str]) -> Self {
        self.folders = folders.iter().map(|f| (*f).to_string()).collect();
        self
    }

    /// Create the repository on disk.
    pub fn build(self) -> TestRepo {
        let root = tempfile::tempdir().expect("create temp dir");
        if let Some(template) = &self.template {
            std::fs::write(root.path().join(TEMPLATE_FILE_NAME), template)
                .expect("write template");
        }
        for folder in &self.folders {
            std::fs::create_dir_all(root.path().join(folder)).expect("create folder");
        }
        TestRepo { root }
    }
}
