//! Version string normalization.

/// Sentinel version that resolves to the newest published release.
pub const LATEST: &str = "latest";

/// Strip one optional leading `v` from a requested version.
///
/// The remainder is used verbatim in download URLs and cache keys; no
/// semantic-version validation is performed.
#[must_use]
pub fn normalize(spec: &str) -> String {
    spec.strip_prefix('v').unwrap_or(spec).to_string()
}
