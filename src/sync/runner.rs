//! One-pass sync orchestration.
//!
//! Control flows strictly top to bottom: read the inventory, parse the
//! manifest, compute the unsatisfied subset, install it. Each stage
//! degrades explicitly rather than aborting: a failed inventory read
//! means "treat everything as missing", a failed manifest read means
//! "nothing required", and a failed optimized install escalates to the
//! full-manifest fallback.

use std::path::{Path, PathBuf};

use crate::inventory::Inventory;
use crate::manifest;
use crate::pip::PipRunner;
use crate::sync::{checker, installer};
use crate::ui::Output;

/// Terminal state of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No manifest file present; nothing to do.
    NoManifest,
    /// Manifest present but held no parseable requirements.
    NothingRequired,
    /// Every requirement was already satisfied; pip never ran an install.
    AlreadySatisfied,
    /// The optimized subset install succeeded.
    Installed { count: usize },
    /// The optimized path failed but the full-manifest fallback succeeded.
    InstalledViaFallback,
    /// Both the optimized path and the fallback failed.
    Failed,
}

impl SyncOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncOutcome::Failed => 1,
            _ => 0,
        }
    }

    /// Whether the run left the environment in the requested state
    /// (or had nothing to do).
    pub fn is_success(&self) -> bool {
        !matches!(self, SyncOutcome::Failed)
    }
}

/// Drives one sync run against a manifest.
pub struct SyncRunner<'a> {
    pip: &'a dyn PipRunner,
    manifest_path: PathBuf,
}

impl<'a> SyncRunner<'a> {
    /// Create a runner for the given manifest.
    pub fn new(pip: &'a dyn PipRunner, manifest_path: &Path) -> Self {
        Self {
            pip,
            manifest_path: manifest_path.to_path_buf(),
        }
    }

    /// Execute the pipeline once.
    pub fn run(&self, output: &Output) -> SyncOutcome {
        if !self.manifest_path.is_file() {
            output.println(&format!(
                "No manifest found at {}.",
                self.manifest_path.display()
            ));
            return SyncOutcome::NoManifest;
        }

        output.println(&format!(
            "Checking requirements from {}...",
            self.manifest_path.display()
        ));

        let inventory = match Inventory::read(self.pip) {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::warn!("Inventory read failed: {}", e);
                output.warning(&format!("Could not read installed packages: {}", e));
                Inventory::new()
            }
        };

        let entries = match manifest::parse_file(&self.manifest_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Manifest parse failed: {}", e);
                output.error(&format!("Error reading manifest: {}", e));
                Vec::new()
            }
        };

        if entries.is_empty() {
            output.warning("No valid requirements found in manifest.");
            return SyncOutcome::NothingRequired;
        }

        let missing = checker::unsatisfied_lines(&entries, &inventory);
        tracing::debug!(
            "{} of {} requirement(s) need installation",
            missing.len(),
            entries.len()
        );

        if missing.is_empty() {
            output.success("All requirements already satisfied.");
            return SyncOutcome::AlreadySatisfied;
        }

        match installer::install_subset(self.pip, &missing, output) {
            Ok(true) => {
                output.success("All requirements installed successfully.");
                SyncOutcome::Installed {
                    count: missing.len(),
                }
            }
            Ok(false) => {
                output.warning("Optimized install failed, trying fallback...");
                self.fallback(output)
            }
            Err(e) => {
                tracing::warn!("Optimized install errored: {}", e);
                output.warning(&format!("Optimized install failed ({}), trying fallback...", e));
                self.fallback(output)
            }
        }
    }

    fn fallback(&self, output: &Output) -> SyncOutcome {
        match installer::install_fallback(self.pip, &self.manifest_path, output) {
            Ok(true) => {
                output.success("Requirements installed via fallback method.");
                SyncOutcome::InstalledViaFallback
            }
            Ok(false) => {
                output.error("Installation failed.");
                SyncOutcome::Failed
            }
            Err(e) => {
                tracing::warn!("Fallback install errored: {}", e);
                output.error(&format!("Installation failed: {}", e));
                SyncOutcome::Failed
            }
        }
    }
}
