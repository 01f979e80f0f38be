//! Structured logger with dry-run awareness and summary collection.
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Counts of each [`TaskStatus`] across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Folders written.
    pub written: usize,
    /// Folders already up to date.
    pub up_to_date: usize,
    /// Folders that would have been written in a dry run.
    pub dry_run: usize,
    /// Folders that failed.
    pub failed: usize,
}

impl SummaryCounts {
    /// Total number of folders counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.written + self.up_to_date + self.dry_run + self.failed
    }
}

/// Structured logger backed by `tracing`, collecting one entry per folder.
#[derive(Debug, Default)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
}

impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a folder result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Tally recorded entries by status.
    #[must_use]
    pub fn counts(&self) -> SummaryCounts {
        let mut counts = SummaryCounts::default();
        for task in self.task_entries() {
            match task.status {
                TaskStatus::Ok => counts.written += 1,
                TaskStatus::UpToDate => counts.up_to_date += 1,
                TaskStatus::DryRun => counts.dry_run += 1,
                TaskStatus::Failed => counts.failed += 1,
            }
        }
        counts
    }

    /// Log the summary of all recorded folders.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");

        for task in &tasks {
            let (icon, color) = match task.status {
                TaskStatus::Ok => ("✓", "\x1b[32m"),
                TaskStatus::UpToDate => ("·", "\x1b[2m"),
                TaskStatus::DryRun => ("~", "\x1b[37m"),
                TaskStatus::Failed => ("✗", "\x1b[31m"),
            };

            let suffix = task
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", task.name));
        }

        let counts = self.counts();
        self.info(&format!(
            "{} folders: \x1b[32m{} written\x1b[0m, \x1b[2m{} up to date\x1b[0m, \x1b[37m{} dry-run\x1b[0m, \x1b[31m{} failed\x1b[0m",
            counts.total(),
            counts.written,
            counts.up_to_date,
            counts.dry_run,
            counts.failed,
        ));
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.record_task(name, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::capture_lines;

    #[test]
    fn logger_new_is_empty() {
        let log = Logger::new();
        assert!(log.task_entries().is_empty());
        assert_eq!(log.counts(), SummaryCounts::default());
    }

    #[test]
    fn record_task_with_message() {
        let log = Logger::new();
        log.record_task("engine", TaskStatus::UpToDate, Some("up to date"));
        let tasks = log.task_entries();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "engine");
        assert_eq!(tasks[0].message, Some("up to date".to_string()));
    }

    #[test]
    fn counts_tally_each_status() {
        let log = Logger::new();
        log.record_task("engine", TaskStatus::Ok, None);
        log.record_task("test", TaskStatus::UpToDate, None);
        log.record_task("tools", TaskStatus::DryRun, None);
        log.record_task("docs", TaskStatus::Failed, Some("io"));
        let counts = log.counts();
        assert_eq!(counts.written, 1);
        assert_eq!(counts.up_to_date, 1);
        assert_eq!(counts.dry_run, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let log = Logger::new();
        let log_ref: &dyn Log = &log;
        log_ref.record_task("via-trait", TaskStatus::Ok, None);
        assert_eq!(log.task_entries().len(), 1);
    }

    #[test]
    fn stage_and_dry_run_use_their_targets() {
        let log = Logger::new();
        let lines = capture_lines(|| {
            log.stage("Loading template");
            log.dry_run("would write engine/.clang-tidy");
            log.info("plain");
        });
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("==>"));
        assert!(lines[1].contains("[DRY RUN]"));
        assert_eq!(lines[2], "  plain");
    }

    #[test]
    fn summary_lists_each_folder() {
        let log = Logger::new();
        log.record_task("engine", TaskStatus::Ok, None);
        log.record_task("test", TaskStatus::UpToDate, Some("up to date"));
        let lines = capture_lines(|| log.print_summary());
        assert!(lines.iter().any(|l| l.contains("Summary")));
        assert!(lines.iter().any(|l| l.contains("✓ engine")));
        assert!(lines.iter().any(|l| l.contains("· test (up to date)")));
        assert!(lines.iter().any(|l| l.contains("2 folders")));
    }

    #[test]
    fn empty_summary_logs_nothing() {
        let log = Logger::new();
        let lines = capture_lines(|| log.print_summary());
        assert!(lines.is_empty());
    }
}
