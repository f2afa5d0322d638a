use ratatui::layout::Constraint;
use ratatui::text::Line;

use super::row::{FieldValue, TableRow};

/// Maps a field value (and the row it came from) to the text shown in a cell.
pub type CellRenderer<R> = Box<dyn Fn(FieldValue<'_>, &R) -> Line<'static>>;

/// Column descriptor for a [`DataTable`](super::DataTable).
///
/// `key` identifies the column and must be unique within a table. `field`
/// selects the row value shown in the column and used for sorting.
pub struct Column<R: TableRow> {
	key: String,
	title: String,
	field: R::Field,
	sortable: bool,
	width: Option<Constraint>,
	render: Option<CellRenderer<R>>,
}

impl<R: TableRow> Column<R> {
	/// Create a non-sortable column bound to `field`.
	pub fn new(key: impl Into<String>, title: impl Into<String>, field: R::Field) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			field,
			sortable: false,
			width: None,
			render: None,
		}
	}

	/// Allow sort requests on this column.
	#[must_use]
	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	/// Set whether sort requests are honoured.
	#[must_use]
	pub fn with_sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Use a fixed layout constraint instead of sharing the remaining width.
	#[must_use]
	pub fn width(mut self, width: Constraint) -> Self {
		self.width = Some(width);
		self
	}

	/// Render cells through `render` instead of the value's `Display` output.
	#[must_use]
	pub fn render_with<F>(mut self, render: F) -> Self
	where
		F: Fn(FieldValue<'_>, &R) -> Line<'static> + 'static,
	{
		self.render = Some(Box::new(render));
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn field(&self) -> R::Field {
		self.field
	}

	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Layout constraint used when rendering, `Fill(1)` unless overridden.
	pub fn constraint(&self) -> Constraint {
		self.width.unwrap_or(Constraint::Fill(1))
	}

	/// Produce the cell content for `row`.
	pub fn cell(&self, row: &R) -> Line<'static> {
		let value = row.field(self.field);
		match &self.render {
			Some(render) => render(value, row),
			None => Line::from(value.to_string()),
		}
	}
}

impl<R: TableRow> std::fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("title", &self.title)
			.field("field", &self.field)
			.field("sortable", &self.sortable)
			.field("width", &self.width)
			.field("custom_render", &self.render.is_some())
			.finish()
	}
}
