//! `generate-clang-tidy` binary entry point.
use anyhow::Result;
use clap::Parser;

use clang_tidy_gen::cli::Cli;
use clang_tidy_gen::commands::generate;
use clang_tidy_gen::config::GeneratorConfig;
use clang_tidy_gen::logging::{self, Logger};
use clang_tidy_gen::resources::generated_file::FsWriter;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    let config = GeneratorConfig::from_args(&args)?;
    log.debug(&format!("root: {}", config.root.display()));

    let result = generate::run(&config, &FsWriter, &log);
    log.print_summary();
    result.map(|_| ())
}
