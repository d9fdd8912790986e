//! Acquisition and installation pipeline for the kubo `ipfs` binary.
//!
//! Resolution and fetching follow the fixed release layout of the
//! `ipfs/kubo` GitHub project: per platform tag, an artifact is published
//! either as a `kubo_v{version}_{platform}.tar.gz` archive or as a raw
//! executable. Fetched builds are cached locally keyed by version and
//! platform, and a populated cache entry is trusted indefinitely.

pub mod cache;
pub mod fetch;
pub mod install;
pub mod locate;
pub mod releases;

/// Name of the executable this pipeline installs.
pub const BINARY_NAME: &str = "ipfs";

/// Cache key component naming the tool.
pub const TOOL_NAME: &str = "ipfs";

/// GitHub owner of the upstream project.
pub const UPSTREAM_OWNER: &str = "ipfs";

/// GitHub repository of the upstream project.
pub const UPSTREAM_REPO: &str = "kubo";
