//! Requirement satisfaction checking.
//!
//! The checker is deliberately conservative: the only specifier it
//! evaluates itself is exact equality (`==`), compared byte-for-byte with
//! no semantic-version normalization. Every other operator is reported as
//! unsatisfied and handed to pip, which no-ops when the installed version
//! is already compatible. Implementing range algebra here would change
//! observable behavior for pre-releases and epochs, so don't.

use crate::inventory::Inventory;
use crate::manifest::RequirementEntry;

/// Decide whether a single requirement is satisfied by the inventory.
pub fn is_satisfied(entry: &RequirementEntry, inventory: &Inventory) -> bool {
    let Some(installed) = inventory.get(&entry.name) else {
        return false;
    };

    // Bare name, or an extras-bracket remnant the parser let through:
    // presence at any version is enough.
    if entry.version_spec.is_empty() || entry.version_spec.starts_with('[') {
        return true;
    }

    if let Some(required) = entry.version_spec.strip_prefix("==") {
        return installed.version == required.trim();
    }

    // >=, <=, ~=, !=, ranges: delegated to pip.
    false
}

/// Collect the raw manifest lines of every unsatisfied entry, preserving
/// manifest order. These lines, not the normalized names, are what pip
/// receives so specifiers and extras survive intact.
pub fn unsatisfied_lines(entries: &[RequirementEntry], inventory: &Inventory) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| !is_satisfied(entry, inventory))
        .map(|entry| entry.raw_line.clone())
        .collect()
}
