//! Key and mouse handling for [`TextField`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use ratatui::layout::Rect;

use super::render::Affordance;
use super::{TextField, TextFieldState};

/// Outcome of a key press on a [`TextField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
	/// The value the field would hold after the key press.
	Changed(String),
	/// The clear affordance was activated.
	ClearRequested,
}

impl TextField<'_> {
	/// Apply `key` to the field.
	///
	/// The field never stores the edited value: the candidate is computed on a
	/// scratch editor seeded with the current value and returned to the caller.
	/// `Ctrl+L` requests a clear and `Ctrl+T` toggles password reveal.
	pub fn handle_key(&self, state: &mut TextFieldState, key: KeyEvent) -> Option<FieldEvent> {
		if key.kind == KeyEventKind::Release {
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('t') if ctrl => {
				if self.reveal_toggle_visible() {
					state.toggle_reveal();
				}
				return None;
			}
			KeyCode::Char('l') if ctrl => {
				return self.clear_visible().then_some(FieldEvent::ClearRequested);
			}
			_ => {}
		}

		if !self.is_interactive() || is_ignored(key) {
			return None;
		}
		if let KeyCode::Char(ch) = key.code {
			let plain = !key
				.modifiers
				.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
			if plain && !self.kind.accepts(ch) {
				return None;
			}
		}

		let mut editor = TextArea::new(vec![self.value.to_string()]);
		editor.move_cursor(CursorMove::End);
		if !editor.input(key) {
			return None;
		}
		let candidate = editor.lines().concat();
		(candidate != self.value).then(|| FieldEvent::Changed(candidate))
	}

	/// Apply a left click at (`column`, `row`) to a field rendered into `area`.
	///
	/// Clicking `✕` requests a clear and clicking `show`/`hide` toggles reveal,
	/// the same as `Ctrl+L` and `Ctrl+T`. Clicks elsewhere do nothing.
	pub fn handle_click(
		&self,
		state: &mut TextFieldState,
		area: Rect,
		column: u16,
		row: u16,
	) -> Option<FieldEvent> {
		match self.affordance_at(state, area, column, row)? {
			Affordance::Clear => Some(FieldEvent::ClearRequested),
			Affordance::Reveal => {
				state.toggle_reveal();
				None
			}
			Affordance::Spinner => None,
		}
	}
}

/// Keys that would break the single line or move focus.
fn is_ignored(key: KeyEvent) -> bool {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	match key.code {
		KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => true,
		KeyCode::Char('m' | 'j') => ctrl,
		_ => false,
	}
}
