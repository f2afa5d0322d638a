//! Keyboard and mouse handling for [`DataTable`].

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{DataTable, TableLayout, TableRow};
use crate::components::scrollbar::point_in_rect;

const PAGE_STEP: usize = 10;
const WHEEL_STEP: usize = 3;

impl<R: TableRow> DataTable<R> {
	/// Apply a key press. Returns `true` when the table consumed the key.
	///
	/// Row-level keys are ignored while loading because no rows are shown;
	/// header actions (sorting, select all) stay available.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
		{
			return false;
		}

		let rows_shown = !self.loading;
		match key.code {
			KeyCode::Up if rows_shown => self.move_cursor_up(1),
			KeyCode::Down if rows_shown => self.move_cursor_down(1),
			KeyCode::PageUp if rows_shown => self.move_cursor_up(PAGE_STEP),
			KeyCode::PageDown if rows_shown => self.move_cursor_down(PAGE_STEP),
			KeyCode::Home if rows_shown => self.move_cursor_up(usize::MAX),
			KeyCode::End if rows_shown => self.move_cursor_down(usize::MAX),
			KeyCode::Char(' ') if rows_shown && self.selectable => self.toggle_cursor_row(),
			KeyCode::Char('a') if self.selectable => {
				self.toggle_all(self.header_check_state().toggled_value());
			}
			KeyCode::Left => {
				self.view.column_cursor = self.view.column_cursor.saturating_sub(1);
			}
			KeyCode::Right => {
				let last = self.columns.len().saturating_sub(1);
				self.view.column_cursor = (self.view.column_cursor + 1).min(last);
			}
			KeyCode::Char('s') => {
				self.request_sort_at(self.view.column_cursor);
			}
			KeyCode::Char(digit @ '1'..='9') => {
				let index = digit as usize - '1' as usize;
				if index < self.columns.len() {
					self.view.column_cursor = index;
				}
				self.request_sort_at(index);
			}
			_ => return false,
		}
		true
	}

	/// Apply a mouse event using the geometry of the last render.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		let Some(layout) = self.view.layout.clone() else {
			return false;
		};
		let (column, row) = (mouse.column, mouse.row);

		if let Some(track) = layout.scrollbar {
			if matches!(
				mouse.kind,
				MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
			) && point_in_rect(column, row, track)
			{
				return self.jump_to_track_position(row, track);
			}
		}

		match mouse.kind {
			MouseEventKind::ScrollUp if !self.loading && point_in_rect(column, row, layout.body) => {
				self.move_cursor_up(WHEEL_STEP);
				true
			}
			MouseEventKind::ScrollDown
				if !self.loading && point_in_rect(column, row, layout.body) =>
			{
				self.move_cursor_down(WHEEL_STEP);
				true
			}
			MouseEventKind::Down(MouseButton::Left) if point_in_rect(column, row, layout.header) => {
				self.click_header(column, &layout)
			}
			MouseEventKind::Down(MouseButton::Left) if point_in_rect(column, row, layout.body) => {
				self.click_body(column, row, &layout)
			}
			_ => false,
		}
	}

	fn click_header(&mut self, column: u16, layout: &TableLayout) -> bool {
		if self.selectable && layout.checkbox.is_some_and(|area| within_x(column, area)) {
			self.toggle_all(self.header_check_state().toggled_value());
			return true;
		}

		let Some(index) = layout.columns.iter().position(|&area| within_x(column, area)) else {
			return false;
		};
		self.view.column_cursor = index;
		self.request_sort_at(index);
		true
	}

	fn click_body(&mut self, column: u16, row: u16, layout: &TableLayout) -> bool {
		if self.loading {
			return false;
		}

		let position = self.view.table_state.offset() + usize::from(row - layout.body.y);
		if position >= self.order.len() {
			return false;
		}
		self.view.table_state.select(Some(position));

		if self.selectable && layout.checkbox.is_some_and(|area| within_x(column, area)) {
			self.toggle_cursor_row();
		}
		true
	}

	/// Move the cursor proportionally to a click on the scrollbar track.
	fn jump_to_track_position(&mut self, row: u16, track: Rect) -> bool {
		if self.loading || self.order.is_empty() {
			return false;
		}
		let offset = usize::from(row.saturating_sub(track.y));
		let span = usize::from(track.height.saturating_sub(1)).max(1);
		let last = self.order.len() - 1;
		let position = (offset * last / span).min(last);
		self.view.table_state.select(Some(position));
		true
	}

	fn toggle_cursor_row(&mut self) {
		if let Some(id) = self.cursor_row().map(TableRow::id) {
			self.toggle_row(&id);
		}
	}

	fn move_cursor_up(&mut self, step: usize) {
		if self.order.is_empty() {
			return;
		}
		let current = self.view.table_state.selected().unwrap_or(0);
		self.view.table_state.select(Some(current.saturating_sub(step)));
	}

	fn move_cursor_down(&mut self, step: usize) {
		if self.order.is_empty() {
			return;
		}
		let last = self.order.len() - 1;
		let current = self.view.table_state.selected().unwrap_or(0);
		self.view
			.table_state
			.select(Some(current.saturating_add(step).min(last)));
	}
}

fn within_x(column: u16, area: Rect) -> bool {
	column >= area.x && column < area.right()
}
