//! Output mode and writer.

use console::style;
use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress plus pip's own output where available.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show only warnings, errors, and the final status.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows progress lines.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Output writer that respects output mode.
///
/// Progress goes to stdout; warnings and errors go to stderr and are
/// never suppressed.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a progress line if the mode allows it.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    /// Write a final success line with a check marker. Shown in every mode.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Write a warning line to stderr.
    pub fn warning(&self, msg: &str) {
        eprintln!("{} {}", style("!").yellow().bold(), msg);
    }

    /// Write an error line to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}
