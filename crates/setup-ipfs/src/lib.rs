//! setup-ipfs - install the kubo `ipfs` binary in automated pipelines
//! and tear down its ephemeral repository afterwards.
//!
//! The binary has two entry points: `install` acquires a kubo release
//! for the host platform (from the local cache when possible), puts
//! `ipfs` on the search path, smoke-tests it, and records the ephemeral
//! repository directory; `cleanup` is invoked later, separately, and
//! removes that directory.

/// CLI argument parsing.
pub mod cli;
/// Install and cleanup command implementations.
pub mod commands;
/// CI runner file integration (`$GITHUB_PATH`, `$GITHUB_ENV`).
pub mod runner;
/// Tracing initialization.
pub mod trace;
