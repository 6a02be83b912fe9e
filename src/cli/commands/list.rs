//! List command implementation.
//!
//! `reqsync list` shows what the parser extracted from the manifest,
//! which is also the view the satisfaction checker works from.

use console::style;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::manifest;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    manifest_path: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(manifest_path: &Path, args: ListArgs) -> Self {
        Self {
            manifest_path: manifest_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        if !self.manifest_path.is_file() {
            output.error(&format!(
                "No manifest found at {}.",
                self.manifest_path.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let entries = manifest::parse_file(&self.manifest_path)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        output.println(&format!(
            "{} requirement(s) in {}:",
            entries.len(),
            self.manifest_path.display()
        ));
        for entry in &entries {
            let spec = if entry.version_spec.is_empty() {
                style("(any version)").dim().to_string()
            } else {
                entry.version_spec.clone()
            };
            output.println(&format!("  {} {}", style(&entry.name).bold(), spec));
        }

        Ok(CommandResult::success())
    }
}
