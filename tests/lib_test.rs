//! Integration tests exercising the library API end to end:
//! manifest parsing feeding the satisfaction checker against a
//! fixed inventory.

use reqsync::inventory::Inventory;
use reqsync::manifest::{parse_file, parse_line};
use reqsync::pip::ListedPackage;
use reqsync::sync::{is_satisfied, unsatisfied_lines};
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
# web stack
Flask==3.0.0
requests[security]>=2.28
gunicorn

# tooling
Typing_Extensions==4.9.0
https://example.com/wheels/custom-0.1.whl
"#;

fn installed() -> Inventory {
    Inventory::from_listed(vec![
        ListedPackage {
            name: "Flask".into(),
            version: "3.0.0".into(),
        },
        ListedPackage {
            name: "requests".into(),
            version: "2.31.0".into(),
        },
        ListedPackage {
            name: "typing_extensions".into(),
            version: "4.8.0".into(),
        },
    ])
}

#[test]
fn full_manifest_parses_to_expected_entries() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");
    fs::write(&path, MANIFEST).unwrap();

    let entries = parse_file(&path).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["flask", "requests", "gunicorn", "typing-extensions"]
    );
}

#[test]
fn unsatisfied_subset_carries_raw_lines_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");
    fs::write(&path, MANIFEST).unwrap();

    let entries = parse_file(&path).unwrap();
    let missing = unsatisfied_lines(&entries, &installed());

    // flask==3.0.0 matches exactly; requests[security]>=2.28 is satisfied
    // by presence (extras line, empty parsed spec); gunicorn is absent;
    // typing-extensions is pinned to a different version.
    assert_eq!(missing, vec!["gunicorn", "Typing_Extensions==4.9.0"]);
}

#[test]
fn exact_pin_mismatch_is_reported_missing() {
    let entry = parse_line("Typing_Extensions==4.9.0").unwrap();
    assert!(!is_satisfied(&entry, &installed()));

    let entry = parse_line("Typing_Extensions==4.8.0").unwrap();
    assert!(is_satisfied(&entry, &installed()));
}

#[test]
fn range_specifiers_are_always_delegated() {
    let entry = parse_line("Flask>=2.0").unwrap();
    assert!(!is_satisfied(&entry, &installed()));
}

#[test]
fn checker_is_idempotent_across_runs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("requirements.txt");
    fs::write(&path, MANIFEST).unwrap();

    let inventory = installed();
    let first = unsatisfied_lines(&parse_file(&path).unwrap(), &inventory);
    let second = unsatisfied_lines(&parse_file(&path).unwrap(), &inventory);

    assert_eq!(first, second);
}
