//! Line-level manifest parsing.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{ReqsyncError, Result};
use crate::manifest::{normalize_name, RequirementEntry};

/// Leading name token, then everything else as the specifier text.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+)(.*)$").unwrap());

/// Parse a single manifest line into a [`RequirementEntry`].
///
/// Returns `None` for lines that carry no requirement: blanks, `#` comments,
/// URL lines, and anything that doesn't start with a name token. Malformed
/// lines are dropped silently — pip itself is the authority on manifest
/// syntax, and the fallback path hands it the untouched file.
pub fn parse_line(line: &str) -> Option<RequirementEntry> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with("http") {
        return None;
    }

    // `package[extra1,extra2]==1.0` — name extraction ignores the extras
    // suffix and anything after it.
    let package_part = line.split('[').next().unwrap_or(line);

    let caps = NAME_RE.captures(package_part)?;
    Some(RequirementEntry {
        name: normalize_name(&caps[1]),
        raw_line: line.to_string(),
        version_spec: caps[2].trim().to_string(),
    })
}

/// Parse a requirements manifest into an ordered list of entries.
///
/// Fails only when the file itself cannot be read; unparseable lines are
/// skipped. The caller decides whether a read failure degrades to "nothing
/// required" or aborts.
pub fn parse_file(path: &Path) -> Result<Vec<RequirementEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReqsyncError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<RequirementEntry> = contents.lines().filter_map(parse_line).collect();
    tracing::debug!(
        "Parsed {} requirement(s) from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}
