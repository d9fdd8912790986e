//! Host platform detection and normalization.
//!
//! Maps the host (os, arch) pair onto the platform tags kubo uses in its
//! release artifact names, then validates the tag against the fixed
//! allowlist of supported platforms. Validation happens before anything
//! touches the network.

use crate::{Error, Result};

/// Platform tags with published kubo builds.
pub const SUPPORTED_PLATFORMS: &[&str] = &[
    "linux-amd64",
    "linux-arm64",
    "darwin-amd64",
    "darwin-arm64",
];

/// Fixed (os, arch) to tag table. Pairs absent from the table pass
/// through as `{os}-{arch}` unchanged.
const PLATFORM_MAPPINGS: &[((&str, &str), &str)] = &[
    (("linux", "x86_64"), "linux-amd64"),
    (("linux", "aarch64"), "linux-arm64"),
    (("macos", "x86_64"), "darwin-amd64"),
    (("macos", "aarch64"), "darwin-arm64"),
];

/// The host (os, arch) pair as reported by the standard library.
#[must_use]
pub fn host() -> (&'static str, &'static str) {
    (std::env::consts::OS, std::env::consts::ARCH)
}

/// Normalize an (os, arch) pair to a release platform tag.
#[must_use]
pub fn resolve(os: &str, arch: &str) -> String {
    PLATFORM_MAPPINGS
        .iter()
        .find(|((mapped_os, mapped_arch), _)| *mapped_os == os && *mapped_arch == arch)
        .map_or_else(|| format!("{os}-{arch}"), |(_, tag)| (*tag).to_string())
}

/// Reject tags without a published kubo build.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] with the tag embedded verbatim.
pub fn ensure_supported(tag: &str) -> Result<()> {
    if SUPPORTED_PLATFORMS.contains(&tag) {
        Ok(())
    } else {
        Err(Error::unsupported_platform(tag))
    }
}
