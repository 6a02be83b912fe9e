//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// reqsync - Fast preflight installer for pip requirements manifests.
#[derive(Debug, Parser)]
#[command(name = "reqsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the requirements manifest (default: requirements.txt
    /// alongside the executable)
    #[arg(short = 'r', long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Python interpreter to drive pip through
    #[arg(long, global = true, env = "PYTHON")]
    pub python: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing requirements (default if no command specified)
    Sync,

    /// Report which requirements are satisfied without installing
    Check(CheckArgs),

    /// Show the parsed manifest entries
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_asserts_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["reqsync"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn manifest_flag_parses() {
        let cli = Cli::parse_from(["reqsync", "-r", "/tmp/requirements.txt"]);
        assert_eq!(
            cli.manifest,
            Some(PathBuf::from("/tmp/requirements.txt"))
        );
    }

    #[test]
    fn check_json_flag_parses() {
        let cli = Cli::parse_from(["reqsync", "check", "--json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("expected check command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["reqsync", "list", "--manifest", "reqs.txt", "--quiet"]);
        assert_eq!(cli.manifest, Some(PathBuf::from("reqs.txt")));
        assert!(cli.quiet);
    }
}
