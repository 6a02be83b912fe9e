//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing progress and status through `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    manifest_path: PathBuf,
    python: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the resolved manifest and interpreter.
    pub fn new(manifest_path: PathBuf, python: PathBuf) -> Self {
        Self {
            manifest_path,
            python,
        }
    }

    /// Get the resolved manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Get the resolved Python interpreter.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Dispatch and execute a command.
    ///
    /// A bare `reqsync` invocation runs the sync pipeline.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        match &cli.command {
            None | Some(Commands::Sync) => {
                let cmd = super::sync::SyncCommand::new(&self.manifest_path, &self.python);
                cmd.execute(output)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(
                    &self.manifest_path,
                    &self.python,
                    args.clone(),
                );
                cmd.execute(output)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.manifest_path, args.clone());
                cmd.execute(output)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(output)
            }
        }
    }
}
