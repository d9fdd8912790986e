//! Centralized path management for setup-ipfs data directories.
//!
//! Both directories support environment variable overrides for testing
//! and CI:
//! - `SETUP_IPFS_CACHE_DIR` - Override the tool cache directory
//! - `SETUP_IPFS_STATE_DIR` - Override the install state directory

use crate::{Error, Result};
use std::path::PathBuf;

/// Get the cache directory holding installed tool versions.
///
/// Resolution order:
/// 1. `SETUP_IPFS_CACHE_DIR` environment variable
/// 2. Platform cache directory + `/setup-ipfs`
///
/// # Errors
///
/// Returns an error if the cache directory cannot be determined.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SETUP_IPFS_CACHE_DIR")
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| Error::configuration("Could not determine cache directory"))?;

    Ok(base.join("setup-ipfs"))
}

/// Get the state directory for the cross-invocation install record.
///
/// Resolution order:
/// 1. `SETUP_IPFS_STATE_DIR` environment variable
/// 2. Platform state directory + `/setup-ipfs`
///
/// # Errors
///
/// Returns an error if the state directory cannot be determined.
pub fn state_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SETUP_IPFS_STATE_DIR")
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    // state_dir() returns None on macOS/Windows, so fall back to data_dir()
    let base = dirs::state_dir()
        .or_else(dirs::data_dir)
        .ok_or_else(|| Error::configuration("Could not determine state directory"))?;

    Ok(base.join("setup-ipfs"))
}

/// Get the path to the install state record.
pub fn install_state_file() -> Result<PathBuf> {
    Ok(state_dir()?.join("install.json"))
}
