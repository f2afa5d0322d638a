//! Terminal rendering for [`DataTable`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::{CheckState, DataTable, SortDirection, SortIndicator, TableBody, TableLayout, TableRow};
use crate::components::scrollbar::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
const CHECKBOX_WIDTH: u16 = 3;

/// Text shown next to the spinner while the table is loading.
pub const LOADING_LABEL: &str = "Loading...";
/// Text shown when there are no rows.
pub const EMPTY_LABEL: &str = "No data available";

/// Surrounding presentation state for a table render.
pub struct TableChrome<'a> {
	/// Colour theme.
	pub theme: &'a Theme,
	/// Spinner animation state used by the loading body.
	pub throbber: &'a ThrobberState,
	/// Whether the table currently receives keyboard input.
	pub focused: bool,
}

/// Render `table` into `area` and remember its geometry for mouse handling.
pub fn render_data_table<R: TableRow>(
	frame: &mut Frame,
	area: Rect,
	table: &mut DataTable<R>,
	chrome: TableChrome<'_>,
) {
	let TableChrome {
		theme,
		throbber,
		focused,
	} = chrome;

	let border_style = if focused {
		theme.focus_border
	} else {
		theme.frame_style()
	};
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	if let Some(title) = table.title() {
		block = block.title(title.to_string());
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		table.view.layout = None;
		return;
	}

	let widths = column_constraints(table);
	let header = header_row(table, theme, focused);
	let (rows, message) = match table.body() {
		TableBody::Loading { .. } => (Vec::new(), Some(loading_line(theme, throbber))),
		TableBody::Empty { .. } => (Vec::new(), Some(empty_line(theme))),
		TableBody::Populated(sorted) => (body_rows(table, &sorted, theme), None),
	};

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let widget = Table::new(rows, widths.clone())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.flex(Flex::Start)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(widget, table_area, &mut table.view.table_state);

	let mut scrollbar_area = None;
	if needs_scrollbar {
		let position = table.view.table_state.selected().unwrap_or(0);
		table.view.scrollbar_state = table
			.view
			.scrollbar_state
			.content_length(total_rows)
			.viewport_content_length(available_rows)
			.position(position);
		render_scrollbar(
			frame,
			inner,
			&mut table.view.scrollbar_state,
			&mut scrollbar_area,
			theme,
		);
	}

	render_header_separator(frame, table_area, theme);

	let body = Rect {
		y: table_area.y.saturating_add(TABLE_HEADER_ROWS),
		height: table_area.height.saturating_sub(TABLE_HEADER_ROWS),
		..table_area
	};
	if let Some(line) = message {
		if body.height > 0 {
			// The message spans every grid column, so it takes the full body width.
			let message_area = Rect { height: 1, ..body };
			let paragraph = Paragraph::new(line).alignment(Alignment::Center);
			frame.render_widget(paragraph, message_area);
		}
	}

	table.view.layout = Some(resolve_layout(
		table_area,
		body,
		&widths,
		table.is_selectable(),
		table.columns().len(),
		scrollbar_area,
	));
}

fn column_constraints<R: TableRow>(table: &DataTable<R>) -> Vec<Constraint> {
	let mut widths = Vec::with_capacity(table.column_span());
	if table.is_selectable() {
		widths.push(Constraint::Length(CHECKBOX_WIDTH));
	}
	widths.extend(table.columns().iter().map(|column| column.constraint()));
	if widths.is_empty() {
		widths.push(Constraint::Fill(1));
	}
	widths
}

fn header_row<R: TableRow>(table: &DataTable<R>, theme: &Theme, focused: bool) -> Row<'static> {
	let mut cells = Vec::with_capacity(table.column_span());
	if table.is_selectable() {
		let state = table.header_check_state();
		let style = match state {
			CheckState::Unchecked => theme.header,
			CheckState::Indeterminate | CheckState::Checked => theme.highlight,
		};
		cells.push(Cell::from(Span::styled(state.symbol(), style)));
	}

	for (index, column) in table.columns().iter().enumerate() {
		let mut title_style = Style::default();
		if focused && index == table.column_cursor() {
			title_style = title_style.add_modifier(Modifier::UNDERLINED);
		}
		let mut spans = vec![Span::styled(column.title().to_string(), title_style)];
		match table.sort_indicator(index) {
			Some(SortIndicator::Active(direction)) => {
				spans.push(Span::raw(" "));
				spans.push(Span::styled(sort_symbol(direction), theme.highlight));
			}
			Some(SortIndicator::Inactive) => {
				spans.push(Span::raw(" "));
				spans.push(Span::styled(sort_symbol(SortDirection::Ascending), theme.empty));
			}
			None => {}
		}
		cells.push(Cell::from(Line::from(spans)));
	}

	Row::new(cells).style(theme.header).height(1).bottom_margin(1)
}

fn body_rows<R: TableRow>(table: &DataTable<R>, sorted: &[&R], theme: &Theme) -> Vec<Row<'static>> {
	sorted
		.iter()
		.map(|row| {
			let selected = table.is_selectable() && table.is_selected(&row.id());
			let mut cells = Vec::with_capacity(table.column_span());
			if table.is_selectable() {
				let (symbol, style) = if selected {
					(CheckState::Checked.symbol(), theme.highlight)
				} else {
					(CheckState::Unchecked.symbol(), Style::default())
				};
				cells.push(Cell::from(Span::styled(symbol, style)));
			}
			cells.extend(table.columns().iter().map(|column| Cell::from(column.cell(row))));

			let style = if selected {
				theme.selected
			} else {
				Style::default()
			};
			Row::new(cells).style(style)
		})
		.collect()
}

fn loading_line(theme: &Theme, throbber: &ThrobberState) -> Line<'static> {
	let spinner = Throbber::default()
		.style(theme.empty)
		.throbber_style(theme.empty);
	let symbol = spinner.to_symbol_span(throbber);
	Line::from(vec![
		Span::styled(symbol.content.into_owned(), symbol.style),
		Span::raw(" "),
		Span::styled(LOADING_LABEL, theme.empty),
	])
}

fn empty_line(theme: &Theme) -> Line<'static> {
	Line::from(Span::styled(EMPTY_LABEL, theme.empty))
}

fn sort_symbol(direction: SortDirection) -> &'static str {
	match direction {
		SortDirection::Ascending => "▲",
		SortDirection::Descending => "▼",
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	let header_height = 1;
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.frame_style());
	let spans = vec![Span::raw(" "), middle, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

/// Mirror the column layout `Table` computes so clicks map back to columns.
fn resolve_layout(
	table_area: Rect,
	body: Rect,
	constraints: &[Constraint],
	selectable: bool,
	column_count: usize,
	scrollbar: Option<Rect>,
) -> TableLayout {
	let selection_width = UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16;
	let [_, columns_area] = Layout::horizontal([
		Constraint::Length(selection_width),
		Constraint::Fill(0),
	])
	.areas(table_area);

	let mut columns: Vec<Rect> = Layout::horizontal(constraints.to_vec())
		.flex(Flex::Start)
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.to_vec();
	let checkbox = if selectable && !columns.is_empty() {
		Some(columns.remove(0))
	} else {
		None
	};
	columns.truncate(column_count);

	TableLayout {
		header: Rect {
			height: table_area.height.min(1),
			..table_area
		},
		body,
		checkbox,
		columns,
		scrollbar,
	}
}
