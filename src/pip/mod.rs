//! pip subprocess invocation.
//!
//! All pip interaction goes through the [`PipRunner`] trait so the
//! orchestration layer can be exercised in tests without a Python
//! environment. [`PipClient`] is the real implementation: it invokes
//! `<python> -m pip ...` the same way pip's own documentation recommends,
//! so listing and installing always target the same interpreter.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{ReqsyncError, Result};

/// One row of `pip list --format=json` output.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedPackage {
    pub name: String,
    pub version: String,
}

/// Operations reqsync needs from pip.
pub trait PipRunner {
    /// Enumerate installed packages with their exact versions.
    fn list_installed(&self) -> Result<Vec<ListedPackage>>;

    /// `pip install -q -r <manifest>` with warnings suppressed, output
    /// captured. Returns whether pip reported success.
    fn install_quiet(&self, manifest: &Path) -> Result<bool>;

    /// `pip install -r <manifest>` with stdio inherited so the user sees
    /// pip's own diagnostics. Returns whether pip reported success.
    fn install_verbose(&self, manifest: &Path) -> Result<bool>;
}

/// Resolve the Python interpreter to drive pip through.
///
/// The `--python` flag (which clap also fills from the `PYTHON`
/// environment variable) wins; otherwise the platform default launcher
/// name is used and left to PATH lookup.
pub fn resolve_interpreter(flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_interpreter()),
    }
}

fn default_interpreter() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Real pip runner backed by `std::process::Command`.
#[derive(Debug, Clone)]
pub struct PipClient {
    python: PathBuf,
}

impl PipClient {
    /// Create a client driving pip through the given interpreter.
    pub fn new(python: PathBuf) -> Self {
        Self { python }
    }

    /// The interpreter this client invokes.
    pub fn python(&self) -> &Path {
        &self.python
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.arg("-m").arg("pip");
        cmd
    }

    fn render(&self, args: &[&str]) -> String {
        format!("{} -m pip {}", self.python.display(), args.join(" "))
    }
}

impl PipRunner for PipClient {
    fn list_installed(&self) -> Result<Vec<ListedPackage>> {
        let args = ["list", "--format=json", "--disable-pip-version-check"];
        let rendered = self.render(&args);
        tracing::debug!("Running: {}", rendered);

        let output = self
            .base_command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ReqsyncError::PipSpawn {
                command: rendered.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReqsyncError::PipFailed {
                command: rendered,
                code: output.status.code(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| ReqsyncError::InventoryDecode {
            message: e.to_string(),
        })
    }

    fn install_quiet(&self, manifest: &Path) -> Result<bool> {
        let manifest_str = manifest.to_string_lossy();
        let args = [
            "install",
            "--disable-pip-version-check",
            "--no-warn-script-location",
            "-q",
            "-r",
            manifest_str.as_ref(),
        ];
        let rendered = self.render(&args);
        tracing::debug!("Running: {}", rendered);

        let output = self
            .base_command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ReqsyncError::PipSpawn {
                command: rendered,
                source,
            })?;

        if !output.status.success() {
            tracing::debug!(
                "Quiet install failed (code {:?}): {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.status.success())
    }

    fn install_verbose(&self, manifest: &Path) -> Result<bool> {
        let manifest_str = manifest.to_string_lossy();
        let args = [
            "install",
            "--disable-pip-version-check",
            "-r",
            manifest_str.as_ref(),
        ];
        let rendered = self.render(&args);
        tracing::debug!("Running: {}", rendered);

        let status = self
            .base_command()
            .args(args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| ReqsyncError::PipSpawn {
                command: rendered,
                source,
            })?;

        Ok(status.success())
    }
}
