//! Subset and fallback installation.
//!
//! The optimized path writes only the unsatisfied raw lines to a scoped
//! temporary manifest and runs pip quietly against it, retrying once with
//! full output when the quiet run fails. The fallback path points pip at
//! the original manifest and lets it re-verify everything itself.

use std::io::Write;
use std::path::Path;

use crate::pip::PipRunner;
use crate::ui::Output;
use crate::Result;

/// Install the given raw requirement lines through a temporary manifest.
///
/// Returns `Ok(true)` on success, `Ok(false)` when pip failed even after
/// the verbose retry, and `Err` when the attempt couldn't run at all
/// (temp file creation, pip spawn). An empty line list is a no-op success.
///
/// The temporary manifest is removed on every exit path; `NamedTempFile`
/// unlinks it when the guard drops.
pub fn install_subset(
    pip: &dyn PipRunner,
    lines: &[String],
    output: &Output,
) -> Result<bool> {
    if lines.is_empty() {
        return Ok(true);
    }

    let mut temp_manifest = tempfile::Builder::new()
        .prefix("reqsync-")
        .suffix(".txt")
        .tempfile()?;
    temp_manifest.write_all(lines.join("\n").as_bytes())?;
    temp_manifest.flush()?;

    output.println(&format!("Installing {} package(s)...", lines.len()));
    tracing::debug!(
        "Subset manifest at {}:\n{}",
        temp_manifest.path().display(),
        lines.join("\n")
    );

    if pip.install_quiet(temp_manifest.path())? {
        return Ok(true);
    }

    output.warning("Error occurred. Retrying with detailed output...");
    pip.install_verbose(temp_manifest.path())
}

/// Install the original manifest directly, delegating all resolution to pip.
pub fn install_fallback(pip: &dyn PipRunner, manifest: &Path, output: &Output) -> Result<bool> {
    output.println("Using fallback installation method...");
    pip.install_verbose(manifest)
}
