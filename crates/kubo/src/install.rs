//! Post-acquisition installation: permissions, search path exposure,
//! smoke test, and repository initialization.

use setup_ipfs_core::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, info};

use crate::BINARY_NAME;

/// Allow owner read/write/execute and group/other read/execute on the
/// installed binary.
pub fn set_executable(binary: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(binary)
            .map_err(|e| Error::install(BINARY_NAME, e.to_string()))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(binary, perms)
            .map_err(|e| Error::install(BINARY_NAME, e.to_string()))?;
    }
    #[cfg(not(unix))]
    {
        let _ = binary;
    }
    Ok(())
}

/// Prepend `dir` to the process `PATH` so the freshly installed binary
/// resolves by name for the remainder of the run.
///
/// The change is in-process only; it reaches other pipeline steps only
/// if the surrounding environment propagates it.
pub fn prepend_search_path(dir: &Path) -> Result<()> {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut parts = vec![dir.to_path_buf()];
    parts.extend(std::env::split_paths(&current));
    let updated = std::env::join_paths(parts)
        .map_err(|e| Error::install(BINARY_NAME, e.to_string()))?;

    export_var("PATH", &updated);
    debug!(dir = %dir.display(), "Prepended to PATH");
    Ok(())
}

/// Export an environment variable into the current process.
#[allow(unsafe_code)]
pub fn export_var(key: &str, value: impl AsRef<OsStr>) {
    // SAFETY: the run is single-threaded when the environment is
    // mutated; no other thread reads it concurrently.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Smoke-invoke the installed binary's version subcommand through the
/// updated search path.
pub async fn smoke_test() -> Result<()> {
    let command = format!("{BINARY_NAME} --version");
    let output = Command::new(BINARY_NAME)
        .arg("--version")
        .output()
        .await
        .map_err(|e| Error::smoke_test(command.as_str(), e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::smoke_test(command, stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    debug!(version = %stdout.trim(), "Smoke test passed");
    Ok(())
}

/// Initialize the IPFS repository in the exported `IPFS_PATH` and log
/// the resulting configuration.
pub async fn init_repo() -> Result<()> {
    info!("Initializing ipfs repository");
    run_tool(&["init"]).await?;

    let output = run_tool(&["config", "show"]).await?;
    let config = String::from_utf8_lossy(&output.stdout);
    debug!(config = %config.trim(), "IPFS configuration");
    Ok(())
}

/// Run the installed tool, failing on spawn error or non-zero exit.
async fn run_tool(args: &[&str]) -> Result<Output> {
    let command = format!("{BINARY_NAME} {}", args.join(" "));
    let output = Command::new(BINARY_NAME)
        .args(args)
        .output()
        .await
        .map_err(|e| Error::install(BINARY_NAME, format!("`{command}` failed: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install(
            BINARY_NAME,
            format!("`{command}` failed: {}", stderr.trim()),
        ));
    }

    Ok(output)
}
