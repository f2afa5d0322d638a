use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tabula_tui::table::{TableChrome, render_data_table};

use super::state::{App, Focus};

const KEY_HINTS: &str = "Tab focus · Space select · a all · 1-9 sort · Enter accept · Esc cancel";

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let field_height = self.field().height();
		let [input_area, table_area, status_area] = Layout::vertical([
			Constraint::Length(field_height),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		let mut field_state = self.field_state;
		frame.render_stateful_widget(&self.field(), input_area, &mut field_state);
		self.field_state = field_state;
		self.input_area = Some(input_area);

		let chrome = TableChrome {
			theme: &self.theme,
			throbber: &self.throbber_state,
			focused: self.focus == Focus::Table,
		};
		render_data_table(frame, table_area, &mut self.table, chrome);
		self.table_area = Some(table_area);

		frame.render_widget(Paragraph::new(self.status_line()), status_area);
	}

	fn status_line(&self) -> Line<'static> {
		let mut spans = Vec::new();
		if self.table.is_selectable() {
			let visible = self.visible_selection.borrow().len();
			spans.push(Span::styled(
				format!("{visible} selected"),
				self.theme.highlight,
			));
			spans.push(Span::styled(" · ", self.theme.empty));
		}
		spans.push(Span::styled(
			format!(
				"{} of {} rows",
				self.table.total_rows(),
				self.records.len()
			),
			self.theme.prompt,
		));
		spans.push(Span::styled(format!("  {KEY_HINTS}"), self.theme.empty));
		Line::from(spans)
	}
}
