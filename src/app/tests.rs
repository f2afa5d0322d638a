use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use serde_json::json;

use super::*;
use crate::records::{Dataset, RecordId};

fn app() -> App {
	App::new(Dataset::sample(), AppOptions::default())
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

fn screen(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	let buffer = terminal.backend().buffer();
	let area = buffer.area;
	(0..area.height)
		.map(|y| {
			(0..area.width)
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

/// Cell holding the first `symbol` on screen.
fn find_on_screen(text: &str, symbol: char) -> (u16, u16) {
	text.lines()
		.enumerate()
		.find_map(|(y, line)| {
			line.chars()
				.position(|ch| ch == symbol)
				.map(|x| (x as u16, y as u16))
		})
		.unwrap_or_else(|| panic!("`{symbol}` is not drawn"))
}

#[test]
fn typing_narrows_the_rows() {
	let mut app = app();
	assert_eq!(app.focus(), Focus::Filter);
	assert_eq!(app.table().total_rows(), 2);

	type_text(&mut app, "smith");
	assert_eq!(app.query(), "smith");
	assert_eq!(app.table().total_rows(), 1);
	assert_eq!(
		app.table().cursor_row().map(|row| row.id().clone()),
		Some(RecordId::Integer(2))
	);

	app.handle_key(ctrl('l'));
	assert_eq!(app.query(), "");
	assert_eq!(app.table().total_rows(), 2);

	type_text(&mut app, "zzz");
	assert_eq!(app.table().total_rows(), 0);
	assert!(app.table().cursor().is_none());
}

#[test]
fn visible_selection_tracks_the_filter() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	assert_eq!(app.focus(), Focus::Table);

	app.handle_key(key(KeyCode::Char('a')));
	assert_eq!(
		app.visible_selection(),
		vec![RecordId::Integer(1), RecordId::Integer(2)]
	);

	app.handle_key(key(KeyCode::BackTab));
	type_text(&mut app, "smith");
	assert_eq!(app.visible_selection(), vec![RecordId::Integer(2)]);
	// Retained ids still count once the filter is cleared.
	app.handle_key(ctrl('l'));
	assert_eq!(app.visible_selection().len(), 2);
}

#[test]
fn enter_returns_the_cursor_row_without_a_selection() {
	let mut app = app();
	let outcome = app.handle_key(key(KeyCode::Enter)).unwrap();
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "");
	assert_eq!(
		outcome.selection,
		vec![json!({
			"id": 1,
			"name": "John Doe",
			"email": "john@example.com",
			"age": 28,
			"role": "Admin",
		})]
	);
}

#[test]
fn enter_returns_selected_records_in_collection_order() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Down));
	app.handle_key(key(KeyCode::Char(' ')));
	let outcome = app.handle_key(key(KeyCode::Enter)).unwrap();
	let ids: Vec<_> = outcome
		.selection
		.iter()
		.map(|value| value["id"].clone())
		.collect();
	assert_eq!(ids, vec![json!(2)]);
}

#[test]
fn escape_and_ctrl_c_cancel() {
	let mut app = app();
	type_text(&mut app, "ja");
	let outcome = app.handle_key(key(KeyCode::Esc)).unwrap();
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "ja");
	assert!(outcome.selection.is_empty());

	let outcome = app.handle_key(ctrl('c')).unwrap();
	assert!(!outcome.accepted);
}

#[test]
fn ctrl_r_toggles_loading() {
	let mut app = app();
	app.handle_key(ctrl('r'));
	assert!(app.table().is_loading());
	app.handle_key(ctrl('r'));
	assert!(!app.table().is_loading());
}

#[test]
fn initial_options_are_applied() {
	let options = AppOptions {
		title: Some("Users".to_string()),
		initial_query: "john".to_string(),
		initial_selection: vec![RecordId::Integer(2)],
		..AppOptions::default()
	};
	let app = App::new(Dataset::sample(), options);
	assert_eq!(app.table().title(), Some("Users"));
	assert_eq!(app.table().total_rows(), 1);
	assert!(app.table().is_selected(&RecordId::Integer(2)));
	assert!(app.visible_selection().is_empty());
}

#[test]
fn sortable_columns_follow_the_dataset() {
	let app = app();
	let sortable: Vec<_> = app
		.table()
		.columns()
		.iter()
		.filter(|column| column.is_sortable())
		.map(|column| column.key().to_string())
		.collect();
	assert_eq!(sortable, ["name", "age"]);
}

#[test]
fn draw_shows_field_table_and_status() {
	let mut app = app();
	let text = screen(&mut app, 100, 14);
	assert!(text.contains("Filter"));
	assert!(text.contains("Type to filter rows"));
	assert!(text.contains("Jane Smith"));
	assert!(text.contains("Name ▲"));
	assert!(text.contains("0 selected · 2 of 2 rows"));
	assert!(app.input_area.is_some());
	assert!(app.table_area.is_some());
}

#[test]
fn clicking_the_clear_mark_empties_the_filter() {
	let mut app = app();
	type_text(&mut app, "smith");
	assert_eq!(app.table().total_rows(), 1);
	app.handle_key(key(KeyCode::Tab));
	assert_eq!(app.focus(), Focus::Table);

	let (x, y) = find_on_screen(&screen(&mut app, 100, 14), '✕');
	app.handle_mouse(click(x, y));
	assert_eq!(app.focus(), Focus::Filter);
	assert_eq!(app.query(), "");
	assert_eq!(app.table().total_rows(), 2);
}

#[test]
fn clicking_the_filter_text_only_moves_focus() {
	let mut app = app();
	type_text(&mut app, "smith");
	app.handle_key(key(KeyCode::Tab));

	let (x, y) = find_on_screen(&screen(&mut app, 100, 14), 's');
	app.handle_mouse(click(x, y));
	assert_eq!(app.focus(), Focus::Filter);
	assert_eq!(app.query(), "smith");
}
