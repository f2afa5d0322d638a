use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_truncate::UnicodeTruncateStr;

use super::{FieldVariant, HelperLine, TextField, TextFieldState};
use crate::components::point_in_rect;

const CLEAR_SYMBOL: &str = "✕";
const SHOW_LABEL: &str = "show";
const HIDE_LABEL: &str = "hide";

/// Clickable marks drawn at the end of the text row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Affordance {
	Spinner,
	Clear,
	Reveal,
}

struct FieldLayout {
	label: Rect,
	frame: Rect,
	text: Rect,
	affordances: Rect,
	helper: Rect,
}

/// Width of the affordances joined by single spaces.
fn strip_width(parts: &[(Affordance, Span<'static>)]) -> u16 {
	let spans: usize = parts.iter().map(|(_, span)| span.width()).sum();
	(spans + parts.len().saturating_sub(1)) as u16
}

fn strip_line(parts: Vec<(Affordance, Span<'static>)>) -> Line<'static> {
	let mut line = Vec::with_capacity(parts.len() * 2);
	for (index, (_, span)) in parts.into_iter().enumerate() {
		if index > 0 {
			line.push(Span::raw(" "));
		}
		line.push(span);
	}
	Line::from(line)
}

impl TextField<'_> {
	/// Rows needed to draw the field: label, input box and helper line.
	pub fn height(&self) -> u16 {
		u16::from(self.label.is_some()) + self.box_height() + u16::from(self.helper_line().is_some())
	}

	fn box_height(&self) -> u16 {
		let border = if self.variant.has_border() { 2 } else { 0 };
		1 + 2 * self.size.vertical_padding() + border
	}

	fn border_style(&self) -> Style {
		if self.has_error() {
			self.theme.error
		} else if self.disabled {
			self.theme.disabled
		} else if self.focused {
			self.theme.focus_border
		} else {
			self.theme.border
		}
	}

	fn box_style(&self) -> Style {
		match self.variant {
			FieldVariant::Filled if self.has_error() => self.theme.filled.patch(self.theme.error),
			FieldVariant::Filled => self.theme.filled,
			FieldVariant::Outlined | FieldVariant::Ghost => Style::default(),
		}
	}

	fn affordances(&self, state: &TextFieldState) -> Vec<(Affordance, Span<'static>)> {
		let mut parts = Vec::new();
		if self.loading {
			let fallback = ThrobberState::default();
			let throbber = self.throbber.unwrap_or(&fallback);
			let symbol = Throbber::default()
				.throbber_style(self.theme.empty)
				.to_symbol_span(throbber);
			parts.push((
				Affordance::Spinner,
				Span::styled(symbol.content.into_owned(), symbol.style),
			));
		}
		if self.clear_visible() {
			parts.push((
				Affordance::Clear,
				Span::styled(CLEAR_SYMBOL, self.theme.empty),
			));
		}
		if self.reveal_toggle_visible() {
			let label = if state.reveal_password {
				HIDE_LABEL
			} else {
				SHOW_LABEL
			};
			parts.push((Affordance::Reveal, Span::styled(label, self.theme.empty)));
		}
		parts
	}

	fn block(&self) -> Block<'static> {
		let block = Block::default().style(self.box_style());
		if self.variant.has_border() {
			block
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(self.border_style())
		} else {
			block
		}
	}

	fn layout(&self, area: Rect, affordance_width: u16) -> FieldLayout {
		let [label, frame, helper] = Layout::vertical([
			Constraint::Length(u16::from(self.label.is_some())),
			Constraint::Length(self.box_height()),
			Constraint::Length(u16::from(self.helper_line().is_some())),
		])
		.areas(area);

		let inner = self.block().inner(frame);
		let padding = self.size.horizontal_padding();
		let text_row = Rect {
			x: inner.x.saturating_add(padding),
			y: inner.y.saturating_add(self.size.vertical_padding()),
			width: inner.width.saturating_sub(padding * 2),
			height: 1,
		}
		.intersection(inner);
		let gap = u16::from(affordance_width > 0);
		let [text, _, affordances] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Length(gap),
			Constraint::Length(affordance_width),
		])
		.areas(text_row);

		FieldLayout {
			label,
			frame,
			text,
			affordances,
			helper,
		}
	}

	/// Affordance drawn under (`column`, `row`) when the field occupies `area`.
	pub(super) fn affordance_at(
		&self,
		state: &TextFieldState,
		area: Rect,
		column: u16,
		row: u16,
	) -> Option<Affordance> {
		let parts = self.affordances(state);
		let layout = self.layout(area, strip_width(&parts));
		if !point_in_rect(column, row, layout.affordances) {
			return None;
		}
		let mut x = layout.affordances.x;
		for (affordance, span) in &parts {
			let end = x.saturating_add(span.width() as u16);
			if (x..end).contains(&column) {
				return Some(*affordance);
			}
			x = end.saturating_add(1);
		}
		None
	}

	fn text_line(&self, state: &TextFieldState, width: u16) -> Line<'static> {
		let show_cursor = self.focused && self.is_interactive();
		let available = usize::from(width.saturating_sub(u16::from(show_cursor)));
		let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED));

		if self.value.is_empty() {
			let placeholder = self.placeholder.unwrap_or_default();
			let (visible, _) = placeholder.unicode_truncate(available);
			let mut spans = Vec::with_capacity(2);
			if show_cursor {
				spans.push(cursor);
			}
			spans.push(Span::styled(visible.to_string(), self.theme.empty));
			return Line::from(spans);
		}

		// Keep the end of the value in view; that is where edits land.
		let shown = self.display_text(state);
		let (visible, _) = shown.unicode_truncate_start(available);
		let mut spans = vec![Span::styled(visible.to_string(), self.theme.prompt)];
		if show_cursor {
			spans.push(cursor);
		}
		Line::from(spans)
	}
}

impl StatefulWidget for &TextField<'_> {
	type State = TextFieldState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.is_empty() {
			return;
		}

		let parts = self.affordances(state);
		let layout = self.layout(area, strip_width(&parts));

		if let Some(label) = self.label {
			Line::styled(label, self.theme.header).render(layout.label, buf);
		}

		self.block().render(layout.frame, buf);

		if !layout.text.is_empty() {
			self.text_line(state, layout.text.width)
				.render(layout.text, buf);
		}
		strip_line(parts).render(layout.affordances, buf);

		if let Some(helper) = self.helper_line() {
			let style = match helper {
				HelperLine::Error(_) => self.theme.error,
				HelperLine::Helper(_) => self.theme.empty,
			};
			Line::styled(helper.text(), style).render(layout.helper, buf);
		}

		if self.disabled {
			buf.set_style(area.intersection(buf.area), self.theme.disabled);
		}
	}
}
