//! Installed-package inventory.
//!
//! The inventory is a snapshot of what the target Python environment
//! currently has installed, keyed by normalized package name. It is rebuilt
//! from scratch on every run and never persisted.

use std::collections::HashMap;

use crate::manifest::normalize_name;
use crate::pip::{ListedPackage, PipRunner};
use crate::Result;

/// One installed package as reported by pip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Normalized package name (lowercase, hyphens).
    pub name: String,
    /// Exact installed version string, uninterpreted.
    pub version: String,
}

/// Mapping from normalized package name to installed package.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    packages: HashMap<String, InstalledPackage>,
}

impl Inventory {
    /// Create an empty inventory. With an empty inventory every
    /// requirement looks unsatisfied, which errs toward over-installation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the inventory by querying pip.
    pub fn read(pip: &dyn PipRunner) -> Result<Self> {
        let listed = pip.list_installed()?;
        tracing::debug!("pip reports {} installed package(s)", listed.len());
        Ok(Self::from_listed(listed))
    }

    /// Build an inventory from pip's package listing, normalizing names
    /// to match manifest-side lookups. Later duplicates win, though pip
    /// does not report duplicates in practice.
    pub fn from_listed(listed: Vec<ListedPackage>) -> Self {
        let packages = listed
            .into_iter()
            .map(|pkg| {
                let name = normalize_name(&pkg.name);
                (
                    name.clone(),
                    InstalledPackage {
                        name,
                        version: pkg.version,
                    },
                )
            })
            .collect();
        Self { packages }
    }

    /// Look up an installed package by normalized name.
    pub fn get(&self, name: &str) -> Option<&InstalledPackage> {
        self.packages.get(name)
    }

    /// Installed version for a normalized name, if present.
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(|pkg| pkg.version.as_str())
    }

    /// Whether a normalized name is installed at any version.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Number of installed packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Record a package. Used to build fixtures in tests and to patch the
    /// snapshot after a successful install if a caller wants to reuse it.
    pub fn insert(&mut self, name: &str, version: &str) {
        let name = normalize_name(name);
        self.packages.insert(
            name.clone(),
            InstalledPackage {
                name,
                version: version.to_string(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(pairs: &[(&str, &str)]) -> Vec<ListedPackage> {
        pairs
            .iter()
            .map(|(name, version)| ListedPackage {
                name: name.to_string(),
                version: version.to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_inventory_contains_nothing() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert!(!inv.contains("requests"));
        assert!(inv.version_of("requests").is_none());
    }

    #[test]
    fn from_listed_normalizes_keys() {
        let inv = Inventory::from_listed(listed(&[("Typing_Extensions", "4.9.0")]));
        assert!(inv.contains("typing-extensions"));
        assert_eq!(inv.version_of("typing-extensions"), Some("4.9.0"));
        assert!(!inv.contains("Typing_Extensions"));
    }

    #[test]
    fn from_listed_keeps_exact_versions() {
        let inv = Inventory::from_listed(listed(&[("requests", "2.31.0"), ("idna", "3.6")]));
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.version_of("requests"), Some("2.31.0"));
        assert_eq!(inv.version_of("idna"), Some("3.6"));
    }

    #[test]
    fn get_returns_installed_package() {
        let inv = Inventory::from_listed(listed(&[("flask", "3.0.0")]));
        let pkg = inv.get("flask").unwrap();
        assert_eq!(pkg.name, "flask");
        assert_eq!(pkg.version, "3.0.0");
    }

    #[test]
    fn insert_normalizes_like_from_listed() {
        let mut inv = Inventory::new();
        inv.insert("My_Package", "1.0");
        assert_eq!(inv.version_of("my-package"), Some("1.0"));
    }
}
