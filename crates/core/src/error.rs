//! Error types for setup-ipfs operations.
//!
//! Every condition here aborts the current run; messages are surfaced to
//! the operator verbatim, without translation or wrapping.

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for setup-ipfs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an install or cleanup run.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Host platform has no published kubo build.
    #[error("Unsupported platform: {0}")]
    #[diagnostic(code(setup_ipfs::platform::unsupported))]
    UnsupportedPlatform(String),

    /// The release directory listed no release with a version tag.
    #[error("No ipfs release found in {owner}/{repo}")]
    #[diagnostic(code(setup_ipfs::releases::none))]
    NoMatchingRelease {
        /// Upstream repository owner.
        owner: String,
        /// Upstream repository name.
        repo: String,
    },

    /// Artifact or release listing download failed.
    #[error("Failed to download {url}: {message}")]
    #[diagnostic(code(setup_ipfs::fetch::download))]
    Download {
        /// The requested URL.
        url: String,
        /// Underlying failure.
        message: String,
    },

    /// Archive could not be unpacked.
    #[error("Failed to extract {artifact}: {message}")]
    #[diagnostic(code(setup_ipfs::fetch::extract))]
    Extract {
        /// Artifact file name.
        artifact: String,
        /// Underlying failure.
        message: String,
    },

    /// The binary was not found anywhere under the searched tree.
    #[error("{binary} binary not found in {}", dir.display())]
    #[diagnostic(code(setup_ipfs::locate::not_found))]
    BinaryNotFound {
        /// Expected executable file name.
        binary: String,
        /// Root of the exhausted subtree.
        dir: PathBuf,
    },

    /// Permission fix or tool invocation failed.
    #[error("Failed to install {binary}: {message}")]
    #[diagnostic(code(setup_ipfs::install::failed))]
    Install {
        /// Executable being installed.
        binary: String,
        /// Underlying failure.
        message: String,
    },

    /// Post-install smoke invocation failed.
    #[error("Smoke test `{command}` failed: {message}")]
    #[diagnostic(code(setup_ipfs::install::smoke_test))]
    SmokeTest {
        /// The invoked command line.
        command: String,
        /// Underlying failure.
        message: String,
    },

    /// Ephemeral repository directory could not be created.
    #[error("Failed to create temporary ipfs repository: {0}")]
    #[diagnostic(code(setup_ipfs::state::temp_dir))]
    TempDir(String),

    /// Install state record could not be read or written.
    #[error("State error: {0}")]
    #[diagnostic(code(setup_ipfs::state::record))]
    State(String),

    /// Unresolvable directories or invalid input.
    #[error("Configuration error: {0}")]
    #[diagnostic(code(setup_ipfs::config))]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    #[diagnostic(code(setup_ipfs::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported platform error.
    #[must_use]
    pub fn unsupported_platform(tag: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(tag.into())
    }

    /// Create a no matching release error.
    #[must_use]
    pub fn no_matching_release(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::NoMatchingRelease {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Create a download error.
    #[must_use]
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an extraction error.
    #[must_use]
    pub fn extract(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extract {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    /// Create a binary not found error.
    #[must_use]
    pub fn binary_not_found(binary: impl Into<String>, dir: &Path) -> Self {
        Self::BinaryNotFound {
            binary: binary.into(),
            dir: dir.to_path_buf(),
        }
    }

    /// Create an install error.
    #[must_use]
    pub fn install(binary: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Install {
            binary: binary.into(),
            message: message.into(),
        }
    }

    /// Create a smoke test error.
    #[must_use]
    pub fn smoke_test(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SmokeTest {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a temporary directory error.
    #[must_use]
    pub fn temp_dir(message: impl Into<String>) -> Self {
        Self::TempDir(message.into())
    }

    /// Create a state error.
    #[must_use]
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
