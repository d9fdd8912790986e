//! Best-effort integration with CI runner files.
//!
//! GitHub Actions advertises `$GITHUB_PATH` and `$GITHUB_ENV`; lines
//! appended there carry the PATH entry and exported variables into
//! subsequent pipeline steps. When the files are absent the install is
//! still complete for the current process.

use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Append `dir` to the runner's PATH file, if one is advertised.
pub fn add_path(dir: &Path) {
    append("GITHUB_PATH", &dir.display().to_string());
}

/// Append `key=value` to the runner's environment file, if advertised.
pub fn export_env(key: &str, value: &str) {
    append("GITHUB_ENV", &format!("{key}={value}"));
}

/// Emit a failure annotation on stdout when running under a CI runner
/// that understands workflow commands.
#[allow(clippy::print_stdout)]
pub fn error_annotation(message: &str) {
    if std::env::var_os("GITHUB_ACTIONS").is_some() {
        println!("::error::{message}");
    }
}

fn append(file_var: &str, line: &str) {
    let Ok(file) = std::env::var(file_var) else {
        debug!(file_var, "Runner file not advertised, skipping");
        return;
    };

    let result = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&file)
        .and_then(|mut f| writeln!(f, "{line}"));

    match result {
        Ok(()) => debug!(file = %file, line, "Appended to runner file"),
        Err(e) => warn!(file = %file, error = %e, "Failed to append to runner file"),
    }
}
