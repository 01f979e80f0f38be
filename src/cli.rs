//! Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

/// Generate per-folder `.clang-tidy` files from the shared template.
///
/// With no arguments, processes the `engine` and `test` folders under the
/// auto-detected root.
#[derive(Parser, Debug)]
#[command(
    name = "generate-clang-tidy",
    about = "Generate per-folder .clang-tidy files from .clang-tidy.template.yaml",
    version
)]
pub struct Cli {
    /// Directory containing .clang-tidy.template.yaml (auto-detected if omitted)
    #[arg(long, env = "CLANG_TIDY_GEN_ROOT")]
    pub root: Option<PathBuf>,

    /// Target folder relative to the root (repeatable; default: engine,test)
    #[arg(short, long = "folder", value_name = "NAME", value_delimiter = ',')]
    pub folders: Vec<String>,

    /// Report stale files without writing them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
