//! Idempotent resource primitives (check + apply pattern).
pub mod generated_file;

use anyhow::Result;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use clang_tidy_gen::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let stale = ResourceState::Stale { reason: "older than template".into() };
///
/// assert_ne!(missing, ResourceState::Current);
/// assert_ne!(stale, ResourceState::Current);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and is up to date.
    Current,
    /// Resource exists but must be regenerated.
    Stale {
        /// Why the resource is out of date.
        reason: String,
    },
}

/// Result of applying a resource change.
///
/// # Examples
///
/// ```
/// use clang_tidy_gen::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// let noop = ResourceChange::AlreadyCorrect;
///
/// assert_eq!(applied, ResourceChange::Applied);
/// assert_ne!(applied, noop);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was written.
    Applied,
    /// Resource was already up to date (no change needed).
    AlreadyCorrect,
    /// Resource was stale but not written (e.g. dry run).
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Interface for resources that can be checked and applied.
///
/// # Examples
///
/// ```ignore
/// if resource.needs_change()? {
///     resource.apply()?;
/// }
/// ```
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O failures.
    fn current_state(&self) -> Result<ResourceState>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be written.
    fn apply(&self) -> Result<ResourceChange>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`current_state`](Self::current_state).
    fn needs_change(&self) -> Result<bool> {
        Ok(!matches!(self.current_state()?, ResourceState::Current))
    }
}

/// Shared test helpers for resource unit tests.
#[cfg(test)]
pub mod test_helpers {
    use super::generated_file::OutputWriter;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// An [`OutputWriter`] that records writes instead of touching disk.
    #[derive(Debug, Default)]
    pub struct RecordingWriter {
        writes: Mutex<Vec<(PathBuf, String)>>,
    }

    impl RecordingWriter {
        /// All `(path, contents)` pairs written so far.
        #[must_use]
        pub fn writes(&self) -> Vec<(PathBuf, String)> {
            self.writes
                .lock()
                .map_or_else(|_| Vec::new(), |guard| guard.clone())
        }
    }

    impl OutputWriter for RecordingWriter {
        fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
            if let Ok(mut guard) = self.writes.lock() {
                guard.push((path.to_path_buf(), contents.to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    struct TestResource {
        state: ResourceState,
    }

    impl Resource for TestResource {
        fn description(&self) -> String {
            "test resource".to_string()
        }

        fn current_state(&self) -> Result<ResourceState> {
            Ok(self.state.clone())
        }

        fn apply(&self) -> Result<ResourceChange> {
            Ok(ResourceChange::Applied)
        }
    }

    #[test]
    fn needs_change_for_missing_resource() {
        let resource = TestResource {
            state: ResourceState::Missing,
        };
        assert!(resource.needs_change().unwrap());
    }

    #[test]
    fn needs_change_for_stale_resource() {
        let resource = TestResource {
            state: ResourceState::Stale {
                reason: "older than template".to_string(),
            },
        };
        assert!(resource.needs_change().unwrap());
    }

    #[test]
    fn no_change_for_current_resource() {
        let resource = TestResource {
            state: ResourceState::Current,
        };
        assert!(!resource.needs_change().unwrap());
    }
}
