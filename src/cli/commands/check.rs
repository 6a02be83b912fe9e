//! Check command implementation.
//!
//! `reqsync check` reports which manifest entries the current environment
//! satisfies without installing anything.

use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::manifest::{self, RequirementEntry};
use crate::pip::PipClient;
use crate::sync::is_satisfied;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    manifest_path: PathBuf,
    python: PathBuf,
    args: CheckArgs,
}

/// Per-entry status in a check report.
#[derive(Debug, Serialize)]
struct EntryStatus {
    name: String,
    version_spec: String,
    installed: Option<String>,
    satisfied: bool,
}

/// Full check report, serialized for `--json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    manifest: String,
    satisfied: usize,
    missing: usize,
    entries: Vec<EntryStatus>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(manifest_path: &Path, python: &Path, args: CheckArgs) -> Self {
        Self {
            manifest_path: manifest_path.to_path_buf(),
            python: python.to_path_buf(),
            args,
        }
    }

    fn build_report(&self, entries: &[RequirementEntry], inventory: &Inventory) -> CheckReport {
        let statuses: Vec<EntryStatus> = entries
            .iter()
            .map(|entry| EntryStatus {
                name: entry.name.clone(),
                version_spec: entry.version_spec.clone(),
                installed: inventory.version_of(&entry.name).map(str::to_string),
                satisfied: is_satisfied(entry, inventory),
            })
            .collect();

        let satisfied = statuses.iter().filter(|s| s.satisfied).count();
        CheckReport {
            manifest: self.manifest_path.display().to_string(),
            satisfied,
            missing: statuses.len() - satisfied,
            entries: statuses,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        if !self.manifest_path.is_file() {
            output.error(&format!(
                "No manifest found at {}.",
                self.manifest_path.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let pip = PipClient::new(self.python.clone());
        let inventory = match Inventory::read(&pip) {
            Ok(inventory) => inventory,
            Err(e) => {
                output.warning(&format!("Could not read installed packages: {}", e));
                Inventory::new()
            }
        };

        let entries = manifest::parse_file(&self.manifest_path)?;
        let report = self.build_report(&entries, &inventory);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        output.println(&format!("Requirements from {}:", report.manifest));
        for entry in &report.entries {
            let marker = if entry.satisfied {
                style("✓").green()
            } else {
                style("✗").red()
            };
            let installed = match &entry.installed {
                Some(version) => format!("installed {}", version),
                None => "not installed".to_string(),
            };
            output.println(&format!(
                "  {} {}{} ({})",
                marker,
                entry.name,
                style(&entry.version_spec).dim(),
                installed
            ));
        }

        if report.missing == 0 {
            output.success("All requirements already satisfied.");
        } else {
            output.warning(&format!(
                "{} of {} requirement(s) need installation.",
                report.missing,
                report.entries.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
