//! Per-folder `.clang-tidy` generator.
//!
//! Reads `.clang-tidy.template.yaml` from the repository root and, for every
//! target folder (`engine` and `test` by default), writes `<folder>/.clang-tidy`
//! with the `readability-identifier-naming.MacroDefinitionPrefix` option set
//! to `SSS<FOLDER>_`. A folder's file is only rewritten when it is missing or
//! older than the template.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: run layout, template loading and check-option rewriting
//! - **[`resources`]**: the generated file as an idempotent `check + apply` resource
//! - **[`commands`]**: the `generate` orchestration
//! - **[`logging`]**: console output and the per-folder summary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod resources;
