//! The teardown run: remove the ephemeral repository recorded by a
//! previous install.
//!
//! Invoked as a separate process after the pipeline's main work; the
//! only link to the install run is the persisted state record.

use setup_ipfs_core::{Result, state};
use tracing::{info, warn};

/// Remove the recorded ephemeral repository, if any.
///
/// A missing record is a warning, not a failure: the install run may
/// have failed before recording, or cleanup may already have run.
pub fn run() -> Result<()> {
    match state::consume()? {
        Some(record) => {
            info!(dir = %record.repo_dir.display(), "Cleaning up temporary ipfs repository");
            std::fs::remove_dir_all(&record.repo_dir)?;
            Ok(())
        }
        None => {
            warn!("Temporary ipfs repository not found");
            Ok(())
        }
    }
}
