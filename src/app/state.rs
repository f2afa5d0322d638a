use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::{Constraint, Rect};
use serde_json::Value;
use tabula_tui::input::{FieldSize, FieldVariant, TextField, TextFieldState};
use tabula_tui::style::Theme;
use tabula_tui::table::{Column, DataTable, StaleSelection, TableRow};
use throbber_widgets_tui::ThrobberState;

use super::filter::filter_records;
use crate::records::{Dataset, FieldIndex, Record, RecordId, column_title};

/// Widget receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Filter,
	Table,
}

/// Filter field presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOptions {
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub helper_text: Option<String>,
	pub variant: FieldVariant,
	pub size: FieldSize,
	pub show_clear_button: bool,
}

impl Default for InputOptions {
	fn default() -> Self {
		Self {
			label: Some("Filter".to_string()),
			placeholder: Some("Type to filter rows".to_string()),
			helper_text: None,
			variant: FieldVariant::default(),
			size: FieldSize::default(),
			show_clear_button: true,
		}
	}
}

/// Everything the viewer needs besides the records themselves.
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub title: Option<String>,
	pub selectable: bool,
	pub loading: bool,
	pub stale_selection: StaleSelection,
	/// Sortable column keys; `None` defers to the dataset, then to all columns.
	pub sortable: Option<Vec<String>>,
	pub initial_query: String,
	pub initial_selection: Vec<RecordId>,
	pub input: InputOptions,
	pub theme: Theme,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			title: None,
			selectable: true,
			loading: false,
			stale_selection: StaleSelection::default(),
			sortable: None,
			initial_query: String::new(),
			initial_selection: Vec::new(),
			input: InputOptions::default(),
			theme: Theme::default(),
		}
	}
}

/// How the viewer ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
	pub accepted: bool,
	pub query: String,
	/// Chosen records as JSON objects, `id` first.
	pub selection: Vec<Value>,
}

/// Ids most recently reported by the table's selection callback.
pub(crate) type SelectionSink = Rc<RefCell<Vec<RecordId>>>;

/// Viewer state: the controlled filter value, the table, and focus.
pub struct App {
	pub(crate) columns: Vec<String>,
	pub(crate) records: Vec<Rc<Record>>,
	pub(crate) table: DataTable<Rc<Record>>,
	pub(crate) query: String,
	pub(crate) field_state: TextFieldState,
	pub(crate) input: InputOptions,
	pub(crate) focus: Focus,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) visible_selection: SelectionSink,
	pub(crate) input_area: Option<Rect>,
	pub(crate) table_area: Option<Rect>,
}

impl App {
	pub fn new(dataset: Dataset, options: AppOptions) -> Self {
		let sortable = options
			.sortable
			.clone()
			.or_else(|| dataset.suggested_sortable().map(<[String]>::to_vec));
		let (columns, records) = dataset.into_parts();
		let records: Vec<Rc<Record>> = records.into_iter().map(Rc::new).collect();

		let table_columns: Vec<Column<Rc<Record>>> = columns
			.iter()
			.enumerate()
			.map(|(index, key)| {
				let is_sortable = sortable
					.as_ref()
					.is_none_or(|keys| keys.iter().any(|candidate| candidate == key));
				Column::new(key.clone(), column_title(key), FieldIndex(index))
					.with_sortable(is_sortable)
					.width(Constraint::Fill(1))
			})
			.collect();

		let visible_selection: SelectionSink = Rc::default();
		let sink = Rc::clone(&visible_selection);
		let mut builder = DataTable::builder(table_columns)
			.rows(filter_records(&options.initial_query, &records))
			.selectable(options.selectable)
			.loading(options.loading)
			.stale_selection(options.stale_selection)
			.initial_selection(options.initial_selection)
			.on_row_select(move |rows: &[&Rc<Record>]| {
				*sink.borrow_mut() = rows.iter().map(|row| TableRow::id(*row)).collect();
			});
		if let Some(title) = options.title {
			builder = builder.title(title);
		}

		Self {
			columns,
			records,
			table: builder.build(),
			query: options.initial_query,
			field_state: TextFieldState::default(),
			input: options.input,
			focus: Focus::Filter,
			theme: options.theme,
			throbber_state: ThrobberState::default(),
			visible_selection,
			input_area: None,
			table_area: None,
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn table(&self) -> &DataTable<Rc<Record>> {
		&self.table
	}

	/// Ids of selected rows that pass the current filter.
	pub fn visible_selection(&self) -> Vec<RecordId> {
		self.visible_selection.borrow().clone()
	}

	/// The filter field for this frame.
	pub(crate) fn field(&self) -> TextField<'_> {
		let mut field = TextField::new(&self.query)
			.variant(self.input.variant)
			.size(self.input.size)
			.show_clear_button(self.input.show_clear_button)
			.focused(self.focus == Focus::Filter)
			.theme(self.theme)
			.throbber(&self.throbber_state);
		if let Some(label) = self.input.label.as_deref() {
			field = field.label(label);
		}
		if let Some(placeholder) = self.input.placeholder.as_deref() {
			field = field.placeholder(placeholder);
		}
		if let Some(helper) = self.input.helper_text.as_deref() {
			field = field.helper_text(helper);
		}
		field
	}

	/// Replace the query and hand the matching records to the table.
	pub(crate) fn set_query(&mut self, query: String) {
		if query == self.query {
			return;
		}
		self.query = query;
		self.table.set_rows(filter_records(&self.query, &self.records));
	}

	pub(crate) fn toggle_focus(&mut self) {
		self.focus = match self.focus {
			Focus::Filter => Focus::Table,
			Focus::Table => Focus::Filter,
		};
	}

	/// Selected records across the whole collection, or the cursor row when
	/// nothing is selected.
	pub(crate) fn chosen_records(&self) -> Vec<Value> {
		let selection = self.table.selection();
		let mut chosen: Vec<Value> = self
			.records
			.iter()
			.filter(|record| selection.contains(Record::id(record)))
			.map(|record| record.to_json(&self.columns))
			.collect();
		if chosen.is_empty() {
			if let Some(row) = self.table.cursor_row() {
				chosen.push(row.to_json(&self.columns));
			}
		}
		chosen
	}

	pub(crate) fn outcome(&self, accepted: bool) -> Outcome {
		Outcome {
			accepted,
			query: self.query.clone(),
			selection: if accepted {
				self.chosen_records()
			} else {
				Vec::new()
			},
		}
	}
}
