//! Release directory client for the upstream kubo project.
//!
//! Lists published releases through the GitHub REST API and resolves the
//! `latest` sentinel to a concrete version.

use serde::Deserialize;
use setup_ipfs_core::{Error, Result};
use tracing::debug;

/// One release entry as returned by the GitHub API.
#[derive(Debug, Deserialize)]
pub struct Release {
    /// Git tag of the release (e.g. `v0.30.0`).
    pub tag_name: String,
}

/// Client for the GitHub release directory.
pub struct ReleaseClient {
    client: reqwest::Client,
}

impl Default for ReleaseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseClient {
    /// Create a new release client.
    ///
    /// # Panics
    ///
    /// Uses `expect` internally because `reqwest::Client::builder().build()`
    /// only fails on invalid TLS configuration, which cannot happen with
    /// default settings and a user agent alone.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("setup-ipfs")
                .build()
                .expect("Failed to create HTTP client - TLS backend initialization failed"),
        }
    }

    /// The underlying HTTP client, shared with the artifact fetcher.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// List all releases of `owner/repo`, in the order the API returns.
    pub async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let url = format!("https://api.github.com/repos/{owner}/{repo}/releases");
        debug!(%url, "Listing releases");

        let mut request = self.client.get(&url);

        // Add auth token if available
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            request = request.header("Authorization", format!("Bearer {token}"));
        } else if let Ok(token) = std::env::var("GH_TOKEN") {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::download(url.as_str(), e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::download(
                url.as_str(),
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| Error::download(url, e.to_string()))
    }

    /// Resolve the `latest` sentinel to a concrete version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingRelease`] when no listed tag carries a
    /// `v` prefix.
    pub async fn latest_version(&self, owner: &str, repo: &str) -> Result<String> {
        let releases = self.list_releases(owner, repo).await?;
        first_version_tag(&releases).ok_or_else(|| Error::no_matching_release(owner, repo))
    }
}

/// First tag with a `v` prefix, stripped, in the order the directory
/// returned the releases.
///
/// Upstream ordering is trusted as-is; no version comparison happens
/// here, so the result is not necessarily the numerically greatest tag.
#[must_use]
pub fn first_version_tag(releases: &[Release]) -> Option<String> {
    releases
        .iter()
        .find_map(|release| release.tag_name.strip_prefix('v'))
        .map(String::from)
}
