use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tabula_tui::components::point_in_rect;
use tabula_tui::input::FieldEvent;

use super::state::{App, Focus, Outcome};

impl App {
	/// Process a keyboard event and return an outcome when the viewer exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
			KeyCode::Char('r') if ctrl => {
				let loading = !self.table.is_loading();
				log::debug!("table loading set to {loading}");
				self.table.set_loading(loading);
			}
			_ => match self.focus {
				Focus::Table => {
					self.table.handle_key(key);
				}
				Focus::Filter => self.handle_filter_key(key),
			},
		}
		None
	}

	fn handle_filter_key(&mut self, key: KeyEvent) {
		// Vertical movement reaches the table so the cursor works while typing.
		if matches!(
			key.code,
			KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
		) {
			self.table.handle_key(key);
			return;
		}

		let mut state = self.field_state;
		let event = self.field().handle_key(&mut state, key);
		self.field_state = state;
		match event {
			Some(FieldEvent::Changed(value)) => self.set_query(value),
			Some(FieldEvent::ClearRequested) => self.set_query(String::new()),
			None => {}
		}
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let in_input = self
			.input_area
			.is_some_and(|area| point_in_rect(column, row, area));
		let in_table = self
			.table_area
			.is_some_and(|area| point_in_rect(column, row, area));

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) if in_input => {
				self.focus = Focus::Filter;
				self.click_field(column, row);
			}
			MouseEventKind::Down(MouseButton::Left) if in_table => {
				self.focus = Focus::Table;
				self.table.handle_mouse(mouse);
			}
			_ if in_table => {
				self.table.handle_mouse(mouse);
			}
			_ => {}
		}
	}

	fn click_field(&mut self, column: u16, row: u16) {
		let Some(area) = self.input_area else {
			return;
		};
		let mut state = self.field_state;
		let event = self.field().handle_click(&mut state, area, column, row);
		self.field_state = state;
		if event == Some(FieldEvent::ClearRequested) {
			self.set_query(String::new());
		}
	}
}
