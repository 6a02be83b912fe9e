//! Satisfaction checking and install orchestration.
//!
//! - [`checker`] decides which manifest entries the installed inventory
//!   already covers
//! - [`installer`] drives the optimized subset install and the
//!   full-manifest fallback
//! - [`runner`] wires the stages into the one-pass pipeline

pub mod checker;
pub mod installer;
pub mod runner;

pub use checker::{is_satisfied, unsatisfied_lines};
pub use runner::{SyncOutcome, SyncRunner};
