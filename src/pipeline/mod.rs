//! Pipeline entry point for search runs.
//!
//! - `run_search`: Bootstrap a session, then fetch, filter, and write page
//!   by page.

pub mod run;

pub use run::{RunSummary, run_search};
