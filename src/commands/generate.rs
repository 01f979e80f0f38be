//! The `generate` run: load the template once, then refresh every stale folder.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::config::template::Template;
use crate::logging::{Log, TaskStatus};
use crate::resources::generated_file::{GeneratedFile, OutputWriter};
use crate::resources::{Resource, ResourceChange, ResourceState};

/// What happened to one target folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOutcome {
    /// Folder name as configured.
    pub folder: String,
    /// Path of the generated file.
    pub path: PathBuf,
    /// Whether the file was written, left alone, or skipped.
    pub change: ResourceChange,
}

/// Outcomes of a completed run, in folder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// One entry per processed folder.
    pub outcomes: Vec<FolderOutcome>,
}

impl GenerateReport {
    /// Outcome recorded for `folder`, if it was processed.
    #[must_use]
    pub fn change_for(&self, folder: &str) -> Option<&ResourceChange> {
        self.outcomes
            .iter()
            .find(|o| o.folder == folder)
            .map(|o| &o.change)
    }

    /// Number of files actually written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.change == ResourceChange::Applied)
            .count()
    }
}

/// Run generation for every folder in `config`.
///
/// The template is loaded before any folder is touched, so a missing or
/// malformed template aborts the run with nothing written. Folders are then
/// processed in order; the first failure stops the run.
///
/// # Errors
///
/// Returns an error if the template cannot be loaded, or if checking or
/// writing any folder's output fails.
pub fn run(
    config: &GeneratorConfig,
    writer: &dyn OutputWriter,
    log: &dyn Log,
) -> Result<GenerateReport> {
    log.stage("Loading template");
    let template = Template::load(&config.template_path)?;
    log.debug(&format!(
        "{} check options in {}",
        template.option_count(),
        template.path().display()
    ));

    log.stage("Generating configs");
    let mut report = GenerateReport::default();
    for folder in &config.folders {
        let file = GeneratedFile::new(
            folder.output_path(&config.root),
            folder.macro_prefix(),
            &template,
            writer,
        );

        let change = match process(&file, config.dry_run, log) {
            Ok(change) => change,
            Err(e) => {
                log.record_task(folder.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
                return Err(e.context(format!("generating config for '{}'", folder.name())));
            }
        };

        let (status, message) = match &change {
            ResourceChange::Applied => (TaskStatus::Ok, None),
            ResourceChange::AlreadyCorrect => (TaskStatus::UpToDate, Some("up to date")),
            ResourceChange::Skipped { reason } => (TaskStatus::DryRun, Some(reason.as_str())),
        };
        log.record_task(folder.name(), status, message);

        report.outcomes.push(FolderOutcome {
            folder: folder.name().to_string(),
            path: file.path().to_path_buf(),
            change,
        });
    }

    Ok(report)
}

/// Check one folder's file and write it if stale.
fn process(file: &GeneratedFile<'_>, dry_run: bool, log: &dyn Log) -> Result<ResourceChange> {
    let state = file
        .current_state()
        .with_context(|| format!("checking {}", file.path().display()))?;

    let reason = match state {
        ResourceState::Current => {
            log.info(&format!("{} up to date", file.path().display()));
            return Ok(ResourceChange::AlreadyCorrect);
        }
        ResourceState::Missing => "missing".to_string(),
        ResourceState::Stale { reason } => reason,
    };

    if dry_run {
        log.dry_run(&format!("would write {} ({reason})", file.description()));
        return Ok(ResourceChange::Skipped {
            reason: format!("dry run, {reason}"),
        });
    }

    let change = file.apply()?;
    log.info(&format!("wrote {} ({reason})", file.description()));
    Ok(change)
}
