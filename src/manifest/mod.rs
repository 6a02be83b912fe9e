//! Requirements manifest parsing.
//!
//! A manifest is a pip `requirements.txt`: one requirement per line, with
//! optional comments, URL lines, bracketed extras, and version specifiers.
//! Parsing is deliberately lenient — lines that do not look like a
//! requirement are dropped rather than treated as errors, and the original
//! line text is preserved verbatim so it can be handed back to pip.

pub mod parser;

pub use parser::{parse_file, parse_line};

use serde::Serialize;
use std::path::PathBuf;

/// One parsed line of the requirements manifest. Immutable after parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementEntry {
    /// Package name, lowercased with underscores normalized to hyphens.
    pub name: String,

    /// The original manifest line (trimmed), preserved for passthrough
    /// to pip so no specifier detail is lost.
    pub raw_line: String,

    /// Trailing version-specifier text such as `>=1.2` or `==2.31.0`.
    /// Empty when the line names a bare package.
    pub version_spec: String,
}

/// Normalize a package name the way pip compares them: lowercase, with
/// underscores replaced by hyphens. Applied to both manifest names and
/// inventory keys so lookups are consistent regardless of manifest casing.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase().replace('_', "-")
}

/// Default manifest location: `requirements.txt` alongside the executable,
/// falling back to the current directory when the executable path cannot
/// be resolved.
pub fn default_manifest_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("requirements.txt")
}
