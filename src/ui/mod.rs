//! Terminal output.
//!
//! reqsync is non-interactive, so the UI layer is a single [`Output`]
//! writer that gates progress lines behind an [`OutputMode`] and styles
//! status markers with `console`.

pub mod output;

pub use output::{Output, OutputMode};
