//! Offline walk through the acquisition pipeline: materialize an
//! archived build, locate the binary, populate the cache, then take the
//! cache-hit path and install from the entry.

use flate2::Compression;
use flate2::write::GzEncoder;
use setup_ipfs_kubo::cache::ToolCache;
use setup_ipfs_kubo::{BINARY_NAME, TOOL_NAME, fetch, locate};
use tempfile::TempDir;

/// Gzipped tarball shaped like a kubo release: `kubo/ipfs` plus the
/// usual sidecar files, with no execute bits on the binary.
fn kubo_tarball(script: &[u8]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, content) in [
        ("kubo/LICENSE", b"MIT".as_slice()),
        ("kubo/ipfs", script),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, content).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

#[test]
fn test_miss_populates_then_hits() {
    let temp = TempDir::new().unwrap();
    let cache = ToolCache::new(temp.path().join("cache"));

    // First run: cache miss, fetch and populate.
    assert!(cache.lookup(TOOL_NAME, "0.30.0", "linux-amd64").is_none());

    let payload = kubo_tarball(b"#!/bin/sh\necho 'ipfs version 0.30.0'\n");
    let fetched = fetch::materialize(&payload, "kubo_v0.30.0_linux-amd64.tar.gz").unwrap();
    let bin_dir = locate::binary_dir(fetched.root(), BINARY_NAME)
        .unwrap()
        .expect("binary should be in the archive");
    let entry = cache
        .populate(&bin_dir, TOOL_NAME, "0.30.0", "linux-amd64")
        .unwrap();
    drop(fetched);

    // Second run: the same key hits and no fetch happens.
    assert_eq!(
        cache.lookup(TOOL_NAME, "0.30.0", "linux-amd64"),
        Some(entry.clone())
    );

    // The populated entry itself contains the binary at depth zero.
    let cached_bin_dir = locate::binary_dir(&entry, BINARY_NAME).unwrap();
    assert_eq!(cached_bin_dir, Some(entry));
}

#[cfg(unix)]
#[tokio::test]
async fn test_install_from_cache_entry() {
    use setup_ipfs_kubo::install;

    let temp = TempDir::new().unwrap();
    let cache = ToolCache::new(temp.path().join("cache"));

    let payload = kubo_tarball(b"#!/bin/sh\necho 'ipfs version 0.30.0'\n");
    let fetched = fetch::materialize(&payload, "kubo_v0.30.0_linux-amd64.tar.gz").unwrap();
    let bin_dir = locate::binary_dir(fetched.root(), BINARY_NAME)
        .unwrap()
        .expect("binary should be in the archive");
    let entry = cache
        .populate(&bin_dir, TOOL_NAME, "0.30.0", "linux-amd64")
        .unwrap();

    let path = std::env::var_os("PATH").unwrap_or_default();
    temp_env::async_with_vars([("PATH", Some(path))], async {
        install::set_executable(&entry.join(BINARY_NAME)).unwrap();
        install::prepend_search_path(&entry).unwrap();
        install::smoke_test().await.unwrap();
    })
    .await;
}
