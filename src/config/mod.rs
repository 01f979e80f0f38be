//! Run layout: root directory, template location and target folders.
pub mod check_options;
pub mod template;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// File name of the shared template, relative to the root.
pub const TEMPLATE_FILE_NAME: &str = ".clang-tidy.template.yaml";

/// File name written into every target folder.
pub const OUTPUT_FILE_NAME: &str = ".clang-tidy";

/// Folders processed when none are given on the command line.
pub const DEFAULT_FOLDERS: &[&str] = &["engine", "test"];

/// A folder (relative to the root) that receives a generated config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFolder {
    name: String,
}

impl TargetFolder {
    /// Create a target folder from a root-relative name such as `"engine"`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The folder name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute directory of this folder under `root`.
    #[must_use]
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.name)
    }

    /// Path of the generated `.clang-tidy` file under `root`.
    #[must_use]
    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join(OUTPUT_FILE_NAME)
    }

    /// Macro prefix enforced for this folder (e.g. `SSSENGINE_`).
    #[must_use]
    pub fn macro_prefix(&self) -> String {
        check_options::derive_prefix(&self.name)
    }
}

/// Everything a generation run needs, passed explicitly into
/// [`commands::generate::run`](crate::commands::generate::run).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory containing the template and the target folders.
    pub root: PathBuf,
    /// Path to the template file.
    pub template_path: PathBuf,
    /// Folders to generate configs for, in processing order.
    pub folders: Vec<TargetFolder>,
    /// Report what would be written without writing.
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Build a config for `root` using the default template name and folder set.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            template_path: root.join(TEMPLATE_FILE_NAME),
            folders: DEFAULT_FOLDERS.iter().map(|f| TargetFolder::new(*f)).collect(),
            dry_run: false,
            root,
        }
    }

    /// Replace the folder set. Duplicate names are dropped, keeping the first.
    #[must_use]
    pub fn with_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<TargetFolder> = Vec::new();
        for folder in folders.into_iter().map(TargetFolder::new) {
            if !unique.contains(&folder) {
                unique.push(folder);
            }
        }
        self.folders = unique;
        self
    }

    /// Set dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Assemble the run config from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined while
    /// falling back to it as the root.
    pub fn from_args(args: &Cli) -> Result<Self> {
        let root = resolve_root(args.root.as_deref())?;
        let config = Self::for_root(root).with_dry_run(args.dry_run);
        if args.folders.is_empty() {
            Ok(config)
        } else {
            Ok(config.with_folders(args.folders.iter().cloned()))
        }
    }
}

/// Resolve the directory holding the template.
///
/// Order: explicit `--root` (or `CLANG_TIDY_GEN_ROOT`, which clap folds into
/// the same argument), then the nearest ancestor of the executable's
/// directory that contains the template, then the current directory.
///
/// The current directory is returned even if it holds no template; the
/// missing file is reported when the template is loaded.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(found) = exe.parent().and_then(find_template_root)
    {
        return Ok(dunce::canonicalize(&found).unwrap_or(found));
    }

    Ok(std::env::current_dir()?)
}

/// Walk up from `start` and return the first directory containing the template.
#[must_use]
pub fn find_template_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(TEMPLATE_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn target_folder_paths() {
        let folder = TargetFolder::new("engine");
        let root = Path::new("/repo");
        assert_eq!(folder.dir(root), PathBuf::from("/repo/engine"));
        assert_eq!(
            folder.output_path(root),
            PathBuf::from("/repo/engine/.clang-tidy")
        );
        assert_eq!(folder.macro_prefix(), "SSSENGINE_");
    }

    #[test]
    fn for_root_uses_default_layout() {
        let config = GeneratorConfig::for_root("/repo");
        assert_eq!(
            config.template_path,
            PathBuf::from("/repo/.clang-tidy.template.yaml")
        );
        let names: Vec<&str> = config.folders.iter().map(TargetFolder::name).collect();
        assert_eq!(names, vec!["engine", "test"]);
        assert!(!config.dry_run);
    }

    #[test]
    fn with_folders_drops_duplicates() {
        let config = GeneratorConfig::for_root("/repo").with_folders(["tools", "engine", "tools"]);
        let names: Vec<&str> = config.folders.iter().map(TargetFolder::name).collect();
        assert_eq!(names, vec!["tools", "engine"]);
    }

    #[test]
    fn resolve_root_uses_explicit_root() {
        let root = resolve_root(Some(Path::new("/explicit/path"))).unwrap();
        assert_eq!(root, PathBuf::from("/explicit/path"));
    }

    #[test]
    fn find_template_root_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(TEMPLATE_FILE_NAME), "Checks: ''\n").unwrap();
        let nested = tmp.path().join("scripts/bin");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_template_root(&nested), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn find_template_root_none_without_template() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        // An ancestor of the tempdir could hold a template in odd environments.
        if let Some(found) = find_template_root(&nested) {
            assert!(!found.starts_with(tmp.path()));
        }
    }
}
