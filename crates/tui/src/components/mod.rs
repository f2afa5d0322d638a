//! Reusable widgets built on ratatui.

/// Scrollbar for viewports.
pub mod scrollbar;
/// Sortable, selectable data table.
pub mod table;

pub use scrollbar::{point_in_rect, render_scrollbar};
pub use table::{
	CheckState, Column, DataTable, DataTableBuilder, FieldValue, SortDirection, SortState,
	StaleSelection, TableBody, TableChrome, TableRow, render_data_table,
};
