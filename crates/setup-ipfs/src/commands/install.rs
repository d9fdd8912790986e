//! The install run: acquire a kubo release, expose `ipfs` on the search
//! path, smoke-test it, and record teardown state.

use setup_ipfs_core::{Error, Result, platform, state, version};
use setup_ipfs_kubo::cache::ToolCache;
use setup_ipfs_kubo::releases::ReleaseClient;
use setup_ipfs_kubo::{BINARY_NAME, TOOL_NAME, UPSTREAM_OWNER, UPSTREAM_REPO, fetch, install, locate};
use std::path::PathBuf;
use tracing::info;

use crate::runner;

/// Environment variable kubo reads its repository location from.
const IPFS_PATH_VAR: &str = "IPFS_PATH";

/// Run the full install pipeline.
///
/// Steps run strictly in order and any failure aborts the run: resolve
/// platform, resolve version, check the cache (fetching, locating, and
/// populating on a miss), locate the binary in the entry, fix
/// permissions, expose the search path, smoke-test, record the
/// ephemeral repository, and initialize it.
pub async fn run(version_spec: &str) -> Result<()> {
    let (os, arch) = platform::host();
    let tag = platform::resolve(os, arch);
    platform::ensure_supported(&tag)?;

    let client = ReleaseClient::new();
    let version = if version_spec == version::LATEST {
        let resolved = client
            .latest_version(UPSTREAM_OWNER, UPSTREAM_REPO)
            .await?;
        info!(version = %resolved, "Latest kubo release");
        resolved
    } else {
        version::normalize(version_spec)
    };

    let cache = ToolCache::from_env()?;
    let tool_dir = ensure_cached(&cache, &client, &version, &tag).await?;

    let bin_dir = locate::binary_dir(&tool_dir, BINARY_NAME)?
        .ok_or_else(|| Error::binary_not_found(BINARY_NAME, &tool_dir))?;

    install::set_executable(&bin_dir.join(BINARY_NAME))?;
    install::prepend_search_path(&bin_dir)?;
    runner::add_path(&bin_dir);

    install::smoke_test().await?;

    let repo_dir = state::create_repo_dir()?;
    install::export_var(IPFS_PATH_VAR, &repo_dir);
    runner::export_env(IPFS_PATH_VAR, &repo_dir.display().to_string());
    state::record(&state::InstallState { repo_dir })?;

    install::init_repo().await?;

    info!("ipfs v{version} for {tag} has been set up successfully");
    Ok(())
}

/// Return the cached tool directory for this build, fetching and
/// populating the cache on a miss.
///
/// On the hit path no network access happens at all; a populated entry
/// is trusted indefinitely.
pub async fn ensure_cached(
    cache: &ToolCache,
    client: &ReleaseClient,
    version: &str,
    tag: &str,
) -> Result<PathBuf> {
    if let Some(dir) = cache.lookup(TOOL_NAME, version, tag) {
        info!(dir = %dir.display(), "Using cached kubo build");
        return Ok(dir);
    }

    let fetched = fetch::fetch(client.http(), version, tag).await?;
    let bin_dir = locate::binary_dir(fetched.root(), BINARY_NAME)?
        .ok_or_else(|| Error::binary_not_found(BINARY_NAME, fetched.root()))?;
    cache.populate(&bin_dir, TOOL_NAME, version, tag)
}
