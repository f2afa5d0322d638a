//! Terminal widgets for `tabula`.
//!
//! Two widgets live here: a [`DataTable`] with single-key sorting and a
//! checkbox selection column, and a controlled [`TextField`]. Both keep their
//! state transitions separate from rendering so they can be driven and
//! inspected without a terminal. Colours come from the [`style`] themes
//! bundled with the crate.

pub mod components;
pub mod input;
pub mod style;

pub use crate::components::table::{self, DataTable, TableRow};
pub use crate::input::{FieldEvent, TextField, TextFieldState};
pub use crate::style::{Theme, default_theme};
