//! CLI argument parsing for setup-ipfs.

use clap::{Parser, Subcommand, ValueEnum};

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Show all logs (trace level)
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default)
    Warn,
    /// Show errors only
    Error,
}

/// setup-ipfs command line interface.
#[derive(Debug, Parser)]
#[command(name = "setup-ipfs", version, about = "Install the kubo ipfs binary for CI runs")]
pub struct Cli {
    /// Minimum level of log events written to stderr.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Emit logs as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download (or reuse) a kubo release, put `ipfs` on the search
    /// path, and record the ephemeral repository for a later `cleanup`.
    Install {
        /// Release to install: a version like `0.30.0` (optionally
        /// `v`-prefixed) or `latest`.
        #[arg(long = "version-spec", env = "INPUT_VERSION", default_value = "latest")]
        version: String,
    },
    /// Remove the ephemeral repository recorded by `install`.
    Cleanup,
}

/// Parse process arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
