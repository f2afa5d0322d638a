use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the table and text field widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for table headers and borders around panes.
	pub header: Style,
	/// Style for the row under the cursor.
	pub row_highlight: Style,
	/// Style for rows that are part of the selection set.
	pub selected: Style,
	/// Style for field labels and input text.
	pub prompt: Style,
	/// Style for placeholders, helper text, and empty states.
	pub empty: Style,
	/// Style for active sort indicators and checked boxes.
	pub highlight: Style,
	/// Style for error borders and messages.
	pub error: Style,
	/// Border style for an unfocused field.
	pub border: Style,
	/// Border style for a focused field.
	pub focus_border: Style,
	/// Style applied over disabled fields.
	pub disabled: Style,
	/// Background used by the filled field variant.
	pub filled: Style,
}

impl Theme {
	/// A theme that leaves every cell in the terminal's own colours.
	#[must_use]
	pub const fn plain() -> Self {
		let style = Style::new();
		Self {
			header: style,
			row_highlight: style.add_modifier(Modifier::REVERSED),
			selected: style,
			prompt: style,
			empty: style,
			highlight: style,
			error: style,
			border: style,
			focus_border: style,
			disabled: style,
			filled: style,
		}
	}

	/// Foreground colour of the header, used for borders and separators.
	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	/// Style used for table borders and separator lines.
	#[must_use]
	pub fn frame_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}
}
