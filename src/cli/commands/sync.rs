//! Sync command implementation.
//!
//! `reqsync sync` (also the default command) runs the full pipeline:
//! inventory, parse, check, install-with-fallback.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pip::PipClient;
use crate::sync::SyncRunner;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    manifest_path: PathBuf,
    python: PathBuf,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(manifest_path: &Path, python: &Path) -> Self {
        Self {
            manifest_path: manifest_path.to_path_buf(),
            python: python.to_path_buf(),
        }
    }
}

impl Command for SyncCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let pip = PipClient::new(self.python.clone());
        let runner = SyncRunner::new(&pip, &self.manifest_path);
        let outcome = runner.run(output);

        Ok(if outcome.is_success() {
            CommandResult::success()
        } else {
            CommandResult::failure(outcome.exit_code())
        })
    }
}
