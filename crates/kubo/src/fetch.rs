//! Artifact download and extraction.
//!
//! Downloads a release artifact from the fixed kubo endpoint and turns
//! it into a directory tree containing the binary: gzipped tarballs are
//! unpacked, anything else is treated as the raw executable. Nothing
//! here is retried; any network or filesystem failure is fatal.

use flate2::read::GzDecoder;
use setup_ipfs_core::{Error, Result};
use std::io::Cursor;
use std::path::Path;
use tar::Archive;
use tempfile::TempDir;
use tracing::{debug, info};

use crate::BINARY_NAME;

/// Base of the fixed download endpoint.
pub const DOWNLOAD_HOST: &str = "https://github.com/ipfs/kubo/releases/download";

/// Artifact file name for a release build.
///
/// Every platform in the supported allowlist ships a gzipped tarball;
/// a raw executable uses the same name without the suffix.
#[must_use]
pub fn artifact_name(version: &str, platform: &str) -> String {
    format!("kubo_v{version}_{platform}.tar.gz")
}

/// Download URL for a release build.
#[must_use]
pub fn download_url(version: &str, platform: &str) -> String {
    let artifact = artifact_name(version, platform);
    format!("{DOWNLOAD_HOST}/v{version}/{artifact}")
}

/// A downloaded artifact, extracted when archived.
///
/// The backing temporary directory is removed when the value is dropped,
/// after a cache populate has moved the binary out.
#[derive(Debug)]
pub struct FetchedArtifact {
    root: TempDir,
}

impl FetchedArtifact {
    /// Root of the extracted (or raw) tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Download the release artifact for `version` on `platform`.
pub async fn fetch(
    client: &reqwest::Client,
    version: &str,
    platform: &str,
) -> Result<FetchedArtifact> {
    let url = download_url(version, platform);
    info!(%url, "Downloading kubo release");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::download(url.as_str(), e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::download(
            url.as_str(),
            format!("HTTP {}", response.status()),
        ));
    }

    let payload = response
        .bytes()
        .await
        .map_err(|e| Error::download(url.as_str(), e.to_string()))?;

    materialize(&payload, &artifact_name(version, platform))
}

/// Turn a downloaded payload into a directory tree containing the binary.
///
/// A `.tar.gz`/`.tgz` artifact is unpacked into a fresh temporary
/// directory; any other artifact is the raw executable and is written
/// out under the binary's name so the locator finds it unchanged.
pub fn materialize(payload: &[u8], artifact: &str) -> Result<FetchedArtifact> {
    let root = TempDir::with_prefix("setup-ipfs-")?;

    if artifact.ends_with(".tar.gz") || artifact.ends_with(".tgz") {
        let decoder = GzDecoder::new(Cursor::new(payload));
        let mut archive = Archive::new(decoder);
        archive
            .unpack(root.path())
            .map_err(|e| Error::extract(artifact, e.to_string()))?;
        debug!(root = %root.path().display(), "Extracted archive");
    } else {
        let dest = root.path().join(BINARY_NAME);
        std::fs::write(&dest, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&dest)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&dest, perms)?;
        }

        debug!(dest = %dest.display(), "Stored raw binary");
    }

    Ok(FetchedArtifact { root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    /// Gzipped tarball with the binary nested under `kubo/`.
    fn kubo_tarball() -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        let payload = b"fake binary";
        let mut header = tar::Header::new_gnu();
        header.set_size(payload.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "kubo/ipfs", payload.as_slice())
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_download_url() {
        assert_eq!(
            download_url("0.30.0", "linux-amd64"),
            "https://github.com/ipfs/kubo/releases/download/v0.30.0/kubo_v0.30.0_linux-amd64.tar.gz"
        );
    }

    #[test]
    fn test_materialize_tarball() {
        let fetched = materialize(&kubo_tarball(), "kubo_v0.30.0_linux-amd64.tar.gz").unwrap();
        let binary = fetched.root().join("kubo").join("ipfs");
        assert!(binary.is_file());
        assert_eq!(std::fs::read(&binary).unwrap(), b"fake binary");
    }

    #[test]
    fn test_materialize_raw_binary() {
        let fetched = materialize(b"#!/bin/sh\n", "kubo_v0.30.0_linux-amd64").unwrap();
        let binary = fetched.root().join("ipfs");
        assert!(binary.is_file());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&binary).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_materialize_corrupt_archive() {
        let err = materialize(b"not a tarball", "kubo_v0.30.0_linux-amd64.tar.gz").unwrap_err();
        assert!(err.to_string().starts_with("Failed to extract"));
    }

    #[test]
    fn test_root_removed_on_drop() {
        let fetched = materialize(b"payload", "kubo_v0.30.0_linux-amd64").unwrap();
        let root = fetched.root().to_path_buf();
        drop(fetched);
        assert!(!root.exists());
    }
}
