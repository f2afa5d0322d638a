use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use throbber_widgets_tui::ThrobberState;

use super::*;
use crate::style::Theme;

#[derive(Debug, Clone, PartialEq)]
struct User {
	id: u32,
	name: &'static str,
	email: &'static str,
	age: u32,
	role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserField {
	Name,
	Email,
	Age,
	Role,
}

impl TableRow for User {
	type Id = u32;
	type Field = UserField;

	fn id(&self) -> u32 {
		self.id
	}

	fn field(&self, field: UserField) -> FieldValue<'_> {
		match field {
			UserField::Name => self.name.into(),
			UserField::Email => self.email.into(),
			UserField::Age => FieldValue::Integer(i64::from(self.age)),
			UserField::Role => self.role.into(),
		}
	}
}

fn user(id: u32, name: &'static str, email: &'static str, age: u32, role: &'static str) -> User {
	User {
		id,
		name,
		email,
		age,
		role,
	}
}

fn users() -> Vec<User> {
	vec![
		user(1, "John Doe", "john@example.com", 28, "Admin"),
		user(2, "Jane Smith", "jane@example.com", 34, "User"),
		user(3, "Alice Brown", "alice@example.com", 28, "Editor"),
	]
}

fn columns() -> Vec<Column<User>> {
	vec![
		Column::new("name", "Name", UserField::Name).sortable(),
		Column::new("email", "Email", UserField::Email),
		Column::new("age", "Age", UserField::Age).sortable(),
		Column::new("role", "Role", UserField::Role),
	]
}

fn table() -> DataTable<User> {
	DataTable::builder(columns()).rows(users()).build()
}

fn selectable_table() -> DataTable<User> {
	DataTable::builder(columns())
		.rows(users())
		.selectable(true)
		.build()
}

fn ids(table: &DataTable<User>) -> Vec<u32> {
	table.sorted_rows().iter().map(|row| row.id).collect()
}

type Notifications = Rc<RefCell<Vec<Vec<u32>>>>;

fn recording_table(initial: &[u32], policy: StaleSelection) -> (DataTable<User>, Notifications) {
	let notifications: Notifications = Rc::default();
	let sink = Rc::clone(&notifications);
	let table = DataTable::builder(columns())
		.rows(users())
		.selectable(true)
		.stale_selection(policy)
		.initial_selection(initial.iter().copied())
		.on_row_select(move |rows: &[&User]| {
			sink.borrow_mut().push(rows.iter().map(|row| row.id).collect());
		})
		.build();
	(table, notifications)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn draw_table(table: &mut DataTable<User>, width: u16, height: u16) -> Vec<String> {
	let theme = Theme::default();
	let throbber = ThrobberState::default();
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal
		.draw(|frame| {
			let chrome = TableChrome {
				theme: &theme,
				throbber: &throbber,
				focused: true,
			};
			render_data_table(frame, frame.area(), table, chrome);
		})
		.unwrap();

	let buffer = terminal.backend().buffer();
	(0..buffer.area.height)
		.map(|y| {
			(0..buffer.area.width)
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
		})
		.collect()
}

#[test]
fn rows_start_in_collection_order() {
	let table = table();
	assert_eq!(table.sort_state(), SortState::Unsorted);
	assert_eq!(ids(&table), vec![1, 2, 3]);
}

#[test]
fn sort_request_on_non_sortable_column_is_ignored() {
	let mut table = table();
	assert!(!table.request_sort("email"));
	assert!(!table.request_sort("role"));
	assert!(!table.request_sort("missing"));
	assert_eq!(table.sort_state(), SortState::Unsorted);

	assert!(table.request_sort("age"));
	assert!(!table.request_sort("email"));
	assert_eq!(
		table.sort_state(),
		SortState::Sorted {
			field: UserField::Age,
			direction: SortDirection::Ascending,
		}
	);
}

#[test]
fn ascending_sort_keeps_ties_in_collection_order() {
	let mut table = table();
	table.request_sort("age");
	insta::assert_debug_snapshot!(ids(&table), @r"
	[
	    1,
	    3,
	    2,
	]
	");

	let ages: Vec<u32> = table.sorted_rows().iter().map(|row| row.age).collect();
	assert!(ages.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn descending_sort_reverses_the_inequality() {
	let mut table = table();
	table.request_sort("name");
	table.request_sort("name");
	let names: Vec<&str> = table.sorted_rows().iter().map(|row| row.name).collect();
	assert_eq!(names, vec!["John Doe", "Jane Smith", "Alice Brown"]);
	assert!(names.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn repeated_sort_requests_toggle_between_two_directions() {
	let mut table = table();
	let mut directions = Vec::new();
	for _ in 0..3 {
		table.request_sort("age");
		directions.push(table.sort_state().direction_of(UserField::Age));
	}
	assert_eq!(
		directions,
		vec![
			Some(SortDirection::Ascending),
			Some(SortDirection::Descending),
			Some(SortDirection::Ascending),
		]
	);
}

#[test]
fn sorting_a_new_column_starts_ascending() {
	let mut table = table();
	table.request_sort("age");
	table.request_sort("age");
	table.request_sort("name");
	assert_eq!(
		table.sort_state(),
		SortState::Sorted {
			field: UserField::Name,
			direction: SortDirection::Ascending,
		}
	);
	assert_eq!(ids(&table), vec![3, 2, 1]);
}

#[test]
fn sort_indicators_follow_the_active_column() {
	let mut table = table();
	assert_eq!(table.sort_indicator(0), Some(SortIndicator::Inactive));
	assert_eq!(table.sort_indicator(1), None);

	table.request_sort("age");
	assert_eq!(table.sort_indicator(0), Some(SortIndicator::Inactive));
	assert_eq!(
		table.sort_indicator(2),
		Some(SortIndicator::Active(SortDirection::Ascending))
	);
	assert_eq!(table.sort_indicator(9), None);
}

#[test]
fn toggle_all_selects_every_row_then_clears() {
	let mut table = selectable_table();
	table.toggle_all(true);
	assert_eq!(table.selected_count(), table.total_rows());
	assert_eq!(table.header_check_state(), CheckState::Checked);

	table.toggle_all(false);
	assert_eq!(table.selected_count(), 0);
	assert_eq!(table.header_check_state(), CheckState::Unchecked);
}

#[test]
fn toggle_row_is_self_inverse() {
	let mut table = selectable_table();
	table.toggle_row(&3);
	let before = table.selection().clone();

	table.toggle_row(&1);
	assert!(table.is_selected(&1));
	assert_eq!(table.header_check_state(), CheckState::Indeterminate);

	table.toggle_row(&1);
	assert_eq!(table.selection(), &before);
}

#[test]
fn selected_rows_follow_collection_order() {
	let mut table = selectable_table();
	table.request_sort("name");
	table.toggle_row(&3);
	table.toggle_row(&1);
	let selected: Vec<u32> = table.selected_rows().iter().map(|row| row.id).collect();
	assert_eq!(selected, vec![1, 3]);
}

#[test]
fn callback_fires_after_build_and_each_selection_change() {
	let (mut table, notifications) = recording_table(&[2], StaleSelection::Retain);
	table.toggle_row(&1);
	table.toggle_all(true);
	table.toggle_all(false);

	insta::assert_debug_snapshot!(notifications.borrow().clone(), @r"
	[
	    [
	        2,
	    ],
	    [
	        1,
	        2,
	    ],
	    [
	        1,
	        2,
	        3,
	    ],
	    [],
	]
	");
}

#[test]
fn sorting_does_not_notify() {
	let (mut table, notifications) = recording_table(&[], StaleSelection::Retain);
	table.request_sort("age");
	table.request_sort("age");
	assert_eq!(notifications.borrow().len(), 1);
}

#[test]
fn retained_ids_resurface_when_rows_return() {
	let (mut table, notifications) = recording_table(&[1, 2], StaleSelection::Retain);
	table.set_rows(vec![user(2, "Jane Smith", "jane@example.com", 34, "User")]);
	assert_eq!(table.selected_count(), 2);
	assert_eq!(table.header_check_state(), CheckState::Unchecked);

	table.set_rows(users());
	assert_eq!(table.header_check_state(), CheckState::Indeterminate);
	assert_eq!(
		notifications.borrow().as_slice(),
		&[vec![1, 2], vec![2], vec![1, 2]]
	);
}

#[test]
fn pruned_ids_are_dropped_with_their_rows() {
	let (mut table, notifications) = recording_table(&[1, 2], StaleSelection::Prune);
	table.set_rows(vec![user(2, "Jane Smith", "jane@example.com", 34, "User")]);
	assert_eq!(table.selected_count(), 1);
	assert_eq!(table.header_check_state(), CheckState::Checked);

	table.set_rows(users());
	assert!(!table.is_selected(&1));
	assert_eq!(notifications.borrow().last(), Some(&vec![2]));
}

#[test]
fn set_rows_keeps_sort_and_cursor_row() {
	let mut table = table();
	table.request_sort("name");
	table.handle_key(key(KeyCode::Up));
	assert_eq!(table.cursor_row().map(|row| row.id), Some(2));

	let mut rows = users();
	rows.push(user(4, "Bob Stone", "bob@example.com", 41, "User"));
	table.set_rows(rows);
	assert_eq!(ids(&table), vec![3, 4, 2, 1]);
	assert_eq!(table.cursor_row().map(|row| row.id), Some(2));
}

#[test]
fn body_reflects_loading_and_empty_states() {
	let populated = table();
	assert!(matches!(populated.body(), TableBody::Populated(rows) if rows.len() == 3));

	let loading = DataTable::builder(columns())
		.selectable(true)
		.loading(true)
		.build();
	assert!(matches!(loading.body(), TableBody::Loading { span: 5 }));

	let empty = DataTable::<User>::builder(columns()).build();
	assert!(matches!(empty.body(), TableBody::Empty { span: 4 }));

	let mut busy = table();
	busy.set_loading(true);
	assert!(matches!(busy.body(), TableBody::Loading { span: 4 }));
}

#[test]
fn keys_move_cursor_and_toggle_rows() {
	let mut table = selectable_table();
	assert_eq!(table.cursor(), Some(0));

	assert!(table.handle_key(key(KeyCode::End)));
	assert_eq!(table.cursor(), Some(2));
	assert!(table.handle_key(key(KeyCode::Char(' '))));
	assert!(table.is_selected(&3));

	assert!(table.handle_key(key(KeyCode::Char('a'))));
	assert_eq!(table.header_check_state(), CheckState::Checked);
	assert!(table.handle_key(key(KeyCode::Char('a'))));
	assert_eq!(table.selected_count(), 0);

	assert!(!table.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
	assert!(!table.handle_key(key(KeyCode::Char('z'))));
}

#[test]
fn keys_sort_by_column() {
	let mut table = table();
	assert!(table.handle_key(key(KeyCode::Char('3'))));
	assert_eq!(table.column_cursor(), 2);
	assert_eq!(table.sort_state().field(), Some(UserField::Age));

	table.handle_key(key(KeyCode::Left));
	table.handle_key(key(KeyCode::Left));
	table.handle_key(key(KeyCode::Char('s')));
	assert_eq!(table.sort_state().field(), Some(UserField::Name));

	table.handle_key(key(KeyCode::Right));
	table.handle_key(key(KeyCode::Char('s')));
	assert_eq!(table.sort_state().field(), Some(UserField::Name));
}

#[test]
fn sorting_keeps_cursor_on_the_same_row() {
	let mut table = table();
	table.handle_key(key(KeyCode::Down));
	assert_eq!(table.cursor_row().map(|row| row.id), Some(2));

	table.request_sort("age");
	assert_eq!(table.cursor(), Some(2));
	assert_eq!(table.cursor_row().map(|row| row.id), Some(2));
}

#[test]
fn row_keys_are_ignored_while_loading() {
	let mut table = selectable_table();
	table.set_loading(true);
	assert!(!table.handle_key(key(KeyCode::Down)));
	assert!(!table.handle_key(key(KeyCode::Char(' '))));
	assert_eq!(table.selected_count(), 0);
	assert!(table.handle_key(key(KeyCode::Char('a'))));
	assert_eq!(table.selected_count(), 3);
}

#[test]
fn populated_render_shows_rows_without_placeholders() {
	let mut table = DataTable::builder(columns())
		.rows(users().into_iter().take(2))
		.title("Users")
		.build();
	let lines = draw_table(&mut table, 72, 8).join("\n");
	assert!(lines.contains("Users"));
	assert!(lines.contains("John Doe"));
	assert!(lines.contains("Jane Smith"));
	assert!(lines.contains("Name ▲"));
	assert!(!lines.contains(render::LOADING_LABEL));
	assert!(!lines.contains(render::EMPTY_LABEL));
}

#[test]
fn loading_render_shows_one_busy_line() {
	let mut table = DataTable::<User>::builder(columns()).loading(true).build();
	let lines = draw_table(&mut table, 60, 8);
	let busy: Vec<&String> = lines
		.iter()
		.filter(|line| line.contains(render::LOADING_LABEL))
		.collect();
	assert_eq!(busy.len(), 1);
	assert!(!lines.iter().any(|line| line.contains(render::EMPTY_LABEL)));
}

#[test]
fn empty_render_shows_placeholder() {
	let mut table = DataTable::<User>::builder(columns()).build();
	let lines = draw_table(&mut table, 60, 8);
	let empty = lines
		.iter()
		.filter(|line| line.contains(render::EMPTY_LABEL))
		.count();
	assert_eq!(empty, 1);
	assert!(!lines.iter().any(|line| line.contains(render::LOADING_LABEL)));
}

#[test]
fn selected_rows_render_checked_boxes() {
	let mut table = selectable_table();
	table.toggle_row(&2);
	let lines = draw_table(&mut table, 80, 8);
	assert!(lines[1].contains("[-]"));
	assert!(lines[4].contains("[x]"));
	assert!(lines[4].contains("Jane Smith"));
	assert!(lines[3].contains("[ ]"));
}

#[test]
fn mouse_clicks_hit_checkboxes_and_headers() {
	let mut table = selectable_table();
	assert!(!table.handle_mouse(click(4, 1)));

	draw_table(&mut table, 80, 8);
	// Border at row 0, header at row 1, separator at row 2, rows from row 3.
	// The checkbox column starts after the border and highlight symbol.
	assert!(table.handle_mouse(click(4, 4)));
	assert_eq!(table.cursor(), Some(1));
	assert!(table.is_selected(&2));

	assert!(table.handle_mouse(click(4, 1)));
	assert_eq!(table.header_check_state(), CheckState::Checked);
	assert!(table.handle_mouse(click(4, 1)));
	assert_eq!(table.header_check_state(), CheckState::Unchecked);

	let name_column = table.view.layout.as_ref().unwrap().columns[0];
	assert!(table.handle_mouse(click(name_column.x, 1)));
	assert_eq!(table.sort_state().field(), Some(UserField::Name));
	assert_eq!(table.column_cursor(), 0);
}

#[derive(Debug, Clone)]
struct Score {
	id: u32,
	points: Option<i64>,
}

impl TableRow for Score {
	type Id = u32;
	type Field = ();

	fn id(&self) -> u32 {
		self.id
	}

	fn field(&self, _: ()) -> FieldValue<'_> {
		self.points.into()
	}
}

#[test]
fn sorting_a_column_with_missing_values_orders_the_rest() {
	let rows: Vec<Score> = (0..30)
		.map(|id| Score {
			id,
			points: (id % 3 != 0).then_some(i64::from((id * 41) % 97)),
		})
		.collect();
	let mut table = DataTable::builder(vec![Column::<Score>::new("points", "Points", ()).sortable()])
		.rows(rows)
		.build();

	assert!(table.request_sort("points"));
	let ascending: Vec<Option<i64>> = table.sorted_rows().iter().map(|row| row.points).collect();
	assert!(ascending[..10].iter().all(Option::is_none));
	assert!(ascending[10..].windows(2).all(|pair| pair[0] <= pair[1]));

	assert!(table.request_sort("points"));
	let descending: Vec<Option<i64>> = table.sorted_rows().iter().map(|row| row.points).collect();
	assert!(descending[20..].iter().all(Option::is_none));
	assert!(descending[..20].windows(2).all(|pair| pair[0] >= pair[1]));
}
