//! setup-ipfs CLI entry point.
//!
//! A run either ends with the tool fully installed, on the path, and
//! smoke-tested, or exits non-zero carrying the triggering error's
//! message as its sole diagnostic.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use miette::Report;
use setup_ipfs::{cli, commands, runner, trace};

/// Exit code for a failed run.
const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = cli::parse();
    // Ignore error if tracing is already initialized (e.g. in tests)
    let _ = trace::init(cli.log_level, cli.json);

    let outcome = match cli.command {
        cli::Commands::Install { version } => run_install(&version),
        cli::Commands::Cleanup => commands::cleanup::run(),
    };

    if let Err(error) = outcome {
        runner::error_annotation(&error.to_string());
        eprintln!("{:?}", Report::new(error));
        std::process::exit(EXIT_FAILURE);
    }
}

/// Build the single-threaded runtime and run the install pipeline on it.
///
/// The pipeline has no parallel fan-out - download, extraction, and
/// tree walks are plain blocking suspension points - so a
/// current-thread runtime is all it needs.
fn run_install(version_spec: &str) -> setup_ipfs_core::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::install::run(version_spec))
}
