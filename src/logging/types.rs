//! Core logging types: folder entries, status, and the [`Log`] trait.

/// Per-folder result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Target folder name.
    pub name: String,
    /// Final status for the folder.
    pub status: TaskStatus,
    /// Optional detail message (e.g., skip reason or error description).
    pub message: Option<String>,
}

/// Outcome of processing one target folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The config was written.
    Ok,
    /// The existing config was up to date and left alone.
    UpToDate,
    /// The config was stale but the run was a dry run.
    DryRun,
    /// Generation failed for this folder.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests may supply
/// their own implementation to capture output.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a folder result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
