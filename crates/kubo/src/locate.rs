//! Locating the binary inside a release tree.
//!
//! Release archives have moved the binary around between kubo versions
//! (`kubo/ipfs`, `go-ipfs/ipfs`, occasionally deeper), so the locator
//! searches the whole subtree rather than assuming a layout.

use setup_ipfs_core::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// One open directory in the walk.
struct Frame {
    dir: PathBuf,
    entries: fs::ReadDir,
}

/// Find the directory containing a file named `name`.
///
/// Depth-first over the subtree: entries are taken in read order and
/// subdirectories are descended into as they are encountered, so the
/// first match in that order wins. The walk is iterative and keeps a
/// set of visited canonical paths, so symlink cycles terminate instead
/// of recursing forever.
///
/// Returns `None` when the subtree is exhausted without a match;
/// callers treat that as fatal.
pub fn binary_dir(root: &Path, name: &str) -> Result<Option<PathBuf>> {
    let mut visited: HashSet<PathBuf> = HashSet::new();
    visited.insert(fs::canonicalize(root)?);

    let mut stack = vec![Frame {
        dir: root.to_path_buf(),
        entries: fs::read_dir(root)?,
    }];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.entries.next(),
            None => return Ok(None),
        };

        let Some(entry) = next else {
            stack.pop();
            continue;
        };
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            let canonical = fs::canonicalize(&path)?;
            if visited.insert(canonical) {
                trace!(dir = %path.display(), "Descending");
                let entries = fs::read_dir(&path)?;
                stack.push(Frame { dir: path, entries });
            }
        } else if entry.file_name() == name {
            return Ok(stack.last().map(|frame| frame.dir.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_match_at_depth_zero() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("ipfs"));

        let found = binary_dir(root.path(), "ipfs").unwrap();
        assert_eq!(found, Some(root.path().to_path_buf()));
    }

    #[test]
    fn test_match_nested() {
        let root = TempDir::new().unwrap();
        let deep = root.path().join("kubo").join("bin").join("inner");
        std::fs::create_dir_all(&deep).unwrap();
        touch(&deep.join("ipfs"));

        let found = binary_dir(root.path(), "ipfs").unwrap();
        assert_eq!(found, Some(deep));
    }

    #[test]
    fn test_exact_name_only() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("ipfs.sig"));
        touch(&root.path().join("go-ipfs"));

        assert_eq!(binary_dir(root.path(), "ipfs").unwrap(), None);
    }

    #[test]
    fn test_exhausted_tree() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("a").join("b")).unwrap();
        touch(&root.path().join("a").join("README.md"));

        assert_eq!(binary_dir(root.path(), "ipfs").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_terminates() {
        let root = TempDir::new().unwrap();
        let sub = root.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::os::unix::fs::symlink(root.path(), sub.join("loop")).unwrap();

        assert_eq!(binary_dir(root.path(), "ipfs").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_match_behind_symlink_cycle() {
        let root = TempDir::new().unwrap();
        let sub = root.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::os::unix::fs::symlink(root.path(), sub.join("loop")).unwrap();
        touch(&sub.join("ipfs"));

        let found = binary_dir(root.path(), "ipfs").unwrap();
        assert_eq!(found, Some(sub));
    }
}
