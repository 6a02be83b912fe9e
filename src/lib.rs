//! reqsync - Fast preflight installer for pip requirements manifests.
//!
//! reqsync compares a `requirements.txt` against the packages currently
//! installed in a Python environment and asks pip to install only the
//! entries that are missing, with a full `pip install -r` fallback pass
//! whenever the optimized path fails.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Installed-package inventory reader
//! - [`manifest`] - Requirements manifest parsing
//! - [`pip`] - pip subprocess invocation
//! - [`sync`] - Satisfaction checking and install orchestration
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use reqsync::manifest::parse_line;
//!
//! let entry = parse_line("Requests[security]>=2.0  # http client").unwrap();
//! assert_eq!(entry.name, "requests");
//! ```

pub mod cli;
pub mod error;
pub mod inventory;
pub mod manifest;
pub mod pip;
pub mod sync;
pub mod ui;

pub use error::{ReqsyncError, Result};
