//! Cache-hit behavior of the install pipeline.
//!
//! A build already in the cache must be reused without any network
//! access: these tests run offline against a pre-populated cache and
//! would fail on any attempt to reach the download endpoint.

use setup_ipfs::commands::install::ensure_cached;
use setup_ipfs_kubo::cache::ToolCache;
use setup_ipfs_kubo::releases::ReleaseClient;
use setup_ipfs_kubo::{BINARY_NAME, TOOL_NAME};
use tempfile::TempDir;

fn populated_cache(temp: &TempDir, version: &str, tag: &str) -> ToolCache {
    let cache = ToolCache::new(temp.path().join("cache"));
    let staging = temp.path().join("staging");
    std::fs::create_dir_all(&staging).unwrap();
    std::fs::write(staging.join(BINARY_NAME), b"cached binary").unwrap();
    cache.populate(&staging, TOOL_NAME, version, tag).unwrap();
    cache
}

#[tokio::test]
async fn test_hit_skips_the_fetcher() {
    let temp = TempDir::new().unwrap();
    let cache = populated_cache(&temp, "0.30.0", "linux-amd64");
    let client = ReleaseClient::new();

    let dir = ensure_cached(&cache, &client, "0.30.0", "linux-amd64")
        .await
        .expect("cached build should be reused without fetching");

    assert_eq!(dir, cache.entry_dir(TOOL_NAME, "0.30.0", "linux-amd64"));
    assert_eq!(std::fs::read(dir.join(BINARY_NAME)).unwrap(), b"cached binary");
}

#[tokio::test]
async fn test_hit_requires_the_exact_key() {
    let temp = TempDir::new().unwrap();
    let cache = populated_cache(&temp, "0.30.0", "linux-amd64");

    // A different platform misses and would have to fetch.
    assert!(cache.lookup(TOOL_NAME, "0.30.0", "darwin-amd64").is_none());
    assert!(cache.lookup(TOOL_NAME, "0.9.0", "linux-amd64").is_none());
}
