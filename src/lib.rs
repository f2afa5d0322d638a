//! Core crate exports for the `tabula` record viewer.
//!
//! The widgets themselves live in `tabula-tui`; this crate loads records,
//! composes a filter field with a data table, and runs the terminal loop.

pub mod app;
pub mod app_dirs;
pub mod logging;
pub mod records;

pub use app::{App, AppOptions, Focus, InputOptions, Outcome, run};
pub use records::{Dataset, Record, RecordError, RecordId, load_records};
