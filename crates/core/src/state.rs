//! Install state shared between the install and cleanup runs.
//!
//! The two runs are separate processes; the only thing carried between
//! them is the path of the ephemeral IPFS repository, persisted as a
//! single JSON record that the cleanup run consumes at most once.

use crate::{Error, Result, paths};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// State written by a successful install run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallState {
    /// Ephemeral IPFS repository directory, exported as `IPFS_PATH`.
    pub repo_dir: PathBuf,
}

/// Create the uniquely named, empty ephemeral repository directory.
///
/// # Errors
///
/// Returns [`Error::TempDir`] if the directory cannot be created.
pub fn create_repo_dir() -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix("ipfs-repo-")
        .tempdir()
        .map_err(|e| Error::temp_dir(e.to_string()))?;
    debug!(dir = %dir.path().display(), "Created ephemeral repository directory");
    Ok(dir.keep())
}

/// Persist the install record, creating the state directory if needed.
pub fn record(state: &InstallState) -> Result<()> {
    let file = paths::install_state_file()?;
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state).map_err(|e| Error::state(e.to_string()))?;
    std::fs::write(&file, json)?;
    debug!(file = %file.display(), "Recorded install state");
    Ok(())
}

/// Read and clear the install record.
///
/// Returns `None` when no record exists; the cleanup run treats that as
/// a warning, not a failure. The record file is deleted before the
/// state is returned, so it is consumed at most once.
pub fn consume() -> Result<Option<InstallState>> {
    let file = paths::install_state_file()?;
    if !file.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(&file)?;
    let state: InstallState =
        serde_json::from_str(&json).map_err(|e| Error::state(e.to_string()))?;
    std::fs::remove_file(&file)?;
    debug!(repo_dir = %state.repo_dir.display(), "Consumed install state");
    Ok(Some(state))
}
