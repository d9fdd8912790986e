//! Tracing initialization for the setup-ipfs CLI.

use crate::cli::LogLevel;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

impl LogLevel {
    const fn directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the CLI level when set. Logs go to
/// stderr; stdout stays reserved for runner annotations.
pub fn init(level: LogLevel, json: bool) -> miette::Result<()> {
    let directive = level.directive();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "setup_ipfs={directive},setup_ipfs_core={directive},setup_ipfs_kubo={directive}"
            ))
        })
        .map_err(|e| miette::miette!("Failed to create tracing filter: {e}"))?;

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| miette::miette!("Failed to initialize tracing: {e}"))?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .map_err(|e| miette::miette!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
