//! Version+platform keyed cache of installed tool directories.

use setup_ipfs_core::{Result, paths};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Local cache of installed tool directories.
///
/// Entries live at `<root>/<tool>/<version>/<platform>/` and are trusted
/// indefinitely once populated; there is no TTL and no re-validation.
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
}

impl ToolCache {
    /// Cache rooted at the configured cache directory.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(paths::cache_dir()?))
    }

    /// Cache rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of the cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keyed directory for one tool build.
    #[must_use]
    pub fn entry_dir(&self, tool: &str, version: &str, platform: &str) -> PathBuf {
        self.root.join(tool).join(version).join(platform)
    }

    /// Exact-key lookup. No partial matches, no expiry.
    #[must_use]
    pub fn lookup(&self, tool: &str, version: &str, platform: &str) -> Option<PathBuf> {
        let dir = self.entry_dir(tool, version, platform);
        if dir.is_dir() {
            trace!(dir = %dir.display(), "Cache hit");
            Some(dir)
        } else {
            trace!(tool, version, platform, "Cache miss");
            None
        }
    }

    /// Move `source` into the cache under the deterministic key and
    /// return the canonical entry path.
    ///
    /// An existing entry is replaced. Concurrent runs that both missed
    /// the cache may race here; there is no cross-process locking and
    /// the last populate wins.
    pub fn populate(
        &self,
        source: &Path,
        tool: &str,
        version: &str,
        platform: &str,
    ) -> Result<PathBuf> {
        let dest = self.entry_dir(tool, version, platform);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if dest.exists() {
            std::fs::remove_dir_all(&dest)?;
        }

        if let Err(rename_err) = std::fs::rename(source, &dest) {
            // Rename fails across filesystems; fall back to a copy.
            trace!(error = %rename_err, "Rename into cache failed, copying");
            copy_tree(source, &dest)?;
        }

        debug!(dest = %dest.display(), "Populated cache entry");
        Ok(dest)
    }
}

/// Recursively copy a directory tree, preserving file permissions.
fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
