//! Sortable, selectable data table.
//!
//! [`DataTable`] owns the transient state of a table instance: the active
//! sort, the selection set, and the cursor. Every state transition is a plain
//! method so the behaviour can be exercised without a terminal; rendering and
//! event handling live in [`render`] and [`events`].
//!
//! Whenever the selection or the row collection changes, the table resolves
//! the selected ids against the current rows and hands the result to the
//! `on_row_select` callback. Sorting never triggers the callback.

mod column;
mod events;
pub mod render;
mod row;
mod selection;
mod sort;

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

pub use column::{CellRenderer, Column};
pub use render::{TableChrome, render_data_table};
pub use row::{FieldValue, TableRow};
pub use selection::{CheckState, Selection, StaleSelection};
pub use sort::{SortDirection, SortState, sorted_order};

/// Callback receiving the selected rows in row-collection order.
pub type SelectionCallback<R> = Box<dyn FnMut(&[&R])>;

/// What the table body shows.
#[derive(Debug, PartialEq)]
pub enum TableBody<'t, R> {
	/// A single busy line spanning `span` columns.
	Loading { span: usize },
	/// A single "no data" line spanning `span` columns.
	Empty { span: usize },
	/// One line per row, in sorted order.
	Populated(Vec<&'t R>),
}

/// Sort marker shown next to a sortable column title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
	/// The column is sortable but not the active sort key.
	Inactive,
	/// The column is the active sort key.
	Active(SortDirection),
}

/// Screen geometry captured during the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct TableLayout {
	pub(crate) header: Rect,
	pub(crate) body: Rect,
	pub(crate) checkbox: Option<Rect>,
	pub(crate) columns: Vec<Rect>,
	pub(crate) scrollbar: Option<Rect>,
}

/// Cursor and viewport state that only matters to the terminal front-end.
#[derive(Debug, Default)]
pub(crate) struct ViewState {
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) column_cursor: usize,
	pub(crate) layout: Option<TableLayout>,
}

/// Table of rows with single-key sorting and an optional checkbox column.
pub struct DataTable<R: TableRow> {
	rows: Vec<R>,
	columns: Vec<Column<R>>,
	title: Option<String>,
	loading: bool,
	selectable: bool,
	stale_selection: StaleSelection,
	sort: SortState<R::Field>,
	order: Vec<usize>,
	selection: Selection<R::Id>,
	on_row_select: Option<SelectionCallback<R>>,
	pub(crate) view: ViewState,
}

impl<R: TableRow> DataTable<R> {
	/// Start building a table with the given column descriptors.
	pub fn builder(columns: Vec<Column<R>>) -> DataTableBuilder<R> {
		DataTableBuilder::new(columns)
	}

	/// Request a sort on the column identified by `key`.
	///
	/// Returns `false` (and leaves the sort state untouched) when no column
	/// has that key or the column is not sortable.
	pub fn request_sort(&mut self, key: &str) -> bool {
		match self.columns.iter().position(|column| column.key() == key) {
			Some(index) => self.request_sort_at(index),
			None => false,
		}
	}

	/// Request a sort on the column at `index`.
	pub fn request_sort_at(&mut self, index: usize) -> bool {
		let Some(column) = self.columns.get(index) else {
			return false;
		};
		if !column.is_sortable() {
			log::debug!("ignoring sort request on non-sortable column `{}`", column.key());
			return false;
		}

		let anchor = self.cursor_source_index();
		self.sort = self.sort.next(column.field());
		log::debug!("sort state is now {:?}", self.sort);
		self.recompute_order();
		self.restore_cursor(anchor);
		true
	}

	/// Select every visible row when `checked`, otherwise clear the selection.
	pub fn toggle_all(&mut self, checked: bool) {
		let visible: Vec<R::Id> = self.order.iter().map(|&index| self.rows[index].id()).collect();
		self.selection.toggle_all(checked, visible);
		self.emit_selection();
	}

	/// Add `id` to the selection, or remove it when already selected.
	pub fn toggle_row(&mut self, id: &R::Id) {
		self.selection.toggle(id);
		self.emit_selection();
	}

	/// Replace the row collection.
	///
	/// The sorted view is recomputed under the current sort and the selection
	/// is re-resolved against the new rows before the callback fires.
	pub fn set_rows(&mut self, rows: Vec<R>) {
		let anchor = self.cursor_source_index().map(|index| self.rows[index].id());
		self.rows = rows;
		self.recompute_order();

		if self.stale_selection == StaleSelection::Prune {
			let present: std::collections::HashSet<R::Id> =
				self.rows.iter().map(TableRow::id).collect();
			self.selection.retain(|id| present.contains(id));
		}

		let anchor = anchor.and_then(|id| self.rows.iter().position(|row| row.id() == id));
		self.restore_cursor(anchor);
		log::debug!("table rows replaced ({} rows)", self.rows.len());
		self.emit_selection();
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	pub fn set_selectable(&mut self, selectable: bool) {
		self.selectable = selectable;
	}

	pub fn set_title(&mut self, title: Option<String>) {
		self.title = title;
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn is_selectable(&self) -> bool {
		self.selectable
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// The caller's rows in their original order.
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	pub fn sort_state(&self) -> SortState<R::Field> {
		self.sort
	}

	/// Rows in display order.
	pub fn sorted_rows(&self) -> Vec<&R> {
		self.order.iter().map(|&index| &self.rows[index]).collect()
	}

	pub fn selection(&self) -> &Selection<R::Id> {
		&self.selection
	}

	pub fn is_selected(&self, id: &R::Id) -> bool {
		self.selection.contains(id)
	}

	/// Number of ids in the selection set, stale ones included.
	pub fn selected_count(&self) -> usize {
		self.selection.len()
	}

	pub fn total_rows(&self) -> usize {
		self.rows.len()
	}

	/// Selected rows in row-collection order.
	pub fn selected_rows(&self) -> Vec<&R> {
		self.rows
			.iter()
			.filter(|row| self.selection.contains(&row.id()))
			.collect()
	}

	pub fn header_check_state(&self) -> CheckState {
		CheckState::derive(self.selected_count(), self.total_rows())
	}

	/// Number of grid columns, counting the checkbox column when selectable.
	pub fn column_span(&self) -> usize {
		self.columns.len() + usize::from(self.selectable)
	}

	pub fn body(&self) -> TableBody<'_, R> {
		if self.loading {
			TableBody::Loading {
				span: self.column_span(),
			}
		} else if self.rows.is_empty() {
			TableBody::Empty {
				span: self.column_span(),
			}
		} else {
			TableBody::Populated(self.sorted_rows())
		}
	}

	/// Sort marker for the column at `index`; `None` for non-sortable columns.
	pub fn sort_indicator(&self, index: usize) -> Option<SortIndicator> {
		let column = self.columns.get(index)?;
		if !column.is_sortable() {
			return None;
		}
		Some(match self.sort.direction_of(column.field()) {
			Some(direction) => SortIndicator::Active(direction),
			None => SortIndicator::Inactive,
		})
	}

	/// Row under the cursor.
	pub fn cursor_row(&self) -> Option<&R> {
		self.cursor_source_index().map(|index| &self.rows[index])
	}

	/// Cursor position within the sorted view.
	pub fn cursor(&self) -> Option<usize> {
		self.view.table_state.selected()
	}

	/// Column the keyboard column cursor points at.
	pub fn column_cursor(&self) -> usize {
		self.view.column_cursor
	}

	fn recompute_order(&mut self) {
		self.order = sorted_order(&self.rows, self.sort);
	}

	fn cursor_source_index(&self) -> Option<usize> {
		let position = self.view.table_state.selected()?;
		self.order.get(position).copied()
	}

	/// Point the cursor at the row with source index `anchor`, or clamp it.
	fn restore_cursor(&mut self, anchor: Option<usize>) {
		let position = anchor.and_then(|source| self.order.iter().position(|&index| index == source));
		let position = match (position, self.view.table_state.selected()) {
			(Some(position), _) => Some(position),
			_ if self.order.is_empty() => None,
			(None, Some(previous)) => Some(previous.min(self.order.len() - 1)),
			(None, None) => Some(0),
		};
		self.view.table_state.select(position);
	}

	fn emit_selection(&mut self) {
		log::debug!(
			"selection holds {} of {} rows",
			self.selection.len(),
			self.rows.len()
		);
		let Some(callback) = self.on_row_select.as_mut() else {
			return;
		};
		let selected: Vec<&R> = self
			.rows
			.iter()
			.filter(|row| self.selection.contains(&row.id()))
			.collect();
		callback(&selected);
	}
}

/// Builder for [`DataTable`], mirroring the table's configuration inputs.
pub struct DataTableBuilder<R: TableRow> {
	columns: Vec<Column<R>>,
	rows: Vec<R>,
	title: Option<String>,
	loading: bool,
	selectable: bool,
	stale_selection: StaleSelection,
	initial_selection: Vec<R::Id>,
	on_row_select: Option<SelectionCallback<R>>,
}

impl<R: TableRow> DataTableBuilder<R> {
	fn new(columns: Vec<Column<R>>) -> Self {
		Self {
			columns,
			rows: Vec::new(),
			title: None,
			loading: false,
			selectable: false,
			stale_selection: StaleSelection::default(),
			initial_selection: Vec::new(),
			on_row_select: None,
		}
	}

	#[must_use]
	pub fn rows<I>(mut self, rows: I) -> Self
	where
		I: IntoIterator<Item = R>,
	{
		self.rows = rows.into_iter().collect();
		self
	}

	#[must_use]
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	#[must_use]
	pub fn selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	#[must_use]
	pub fn stale_selection(mut self, policy: StaleSelection) -> Self {
		self.stale_selection = policy;
		self
	}

	/// Ids selected when the table is first built.
	#[must_use]
	pub fn initial_selection<I>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = R::Id>,
	{
		self.initial_selection = ids.into_iter().collect();
		self
	}

	/// Callback invoked with the selected rows after every selection or row change.
	#[must_use]
	pub fn on_row_select<F>(mut self, callback: F) -> Self
	where
		F: FnMut(&[&R]) + 'static,
	{
		self.on_row_select = Some(Box::new(callback));
		self
	}

	/// Build the table and deliver the initial selection to the callback.
	pub fn build(self) -> DataTable<R> {
		warn_on_duplicate_keys(&self.columns);

		let mut table = DataTable {
			rows: self.rows,
			columns: self.columns,
			title: self.title,
			loading: self.loading,
			selectable: self.selectable,
			stale_selection: self.stale_selection,
			sort: SortState::Unsorted,
			order: Vec::new(),
			selection: Selection::from_ids(self.initial_selection),
			on_row_select: self.on_row_select,
			view: ViewState::default(),
		};
		table.recompute_order();
		table.restore_cursor(None);
		table.emit_selection();
		table
	}
}

fn warn_on_duplicate_keys<R: TableRow>(columns: &[Column<R>]) {
	let mut seen = std::collections::HashSet::new();
	for column in columns {
		if !seen.insert(column.key()) {
			log::warn!(
				"duplicate column key `{}`; sort requests resolve to the first match",
				column.key()
			);
		}
	}
}
