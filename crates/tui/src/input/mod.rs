//! Controlled single-line text field.
//!
//! [`TextField`] borrows everything it shows for the duration of a frame: the
//! caller owns the value and applies the [`FieldEvent`]s the field produces.
//! The only state the field keeps between frames is [`TextFieldState`], which
//! remembers whether a password is currently revealed.

mod editing;
mod render;
mod variant;


use std::borrow::Cow;

use throbber_widgets_tui::ThrobberState;
use unicode_segmentation::UnicodeSegmentation;

pub use editing::FieldEvent;
pub use variant::{FieldKind, FieldSize, FieldVariant};

use crate::style::Theme;

/// Character used to mask each grapheme of a hidden password.
pub const MASK_CHAR: char = '•';

/// Text shown below the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperLine<'a> {
	Error(&'a str),
	Helper(&'a str),
}

impl<'a> HelperLine<'a> {
	pub fn text(self) -> &'a str {
		match self {
			Self::Error(text) | Self::Helper(text) => text,
		}
	}
}

/// Internal state of a [`TextField`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFieldState {
	pub reveal_password: bool,
}

impl TextFieldState {
	pub fn toggle_reveal(&mut self) {
		self.reveal_password = !self.reveal_password;
	}
}

/// A labelled single-line input whose value is supplied by the caller.
#[derive(Debug, Clone)]
pub struct TextField<'a> {
	value: &'a str,
	label: Option<&'a str>,
	placeholder: Option<&'a str>,
	helper_text: Option<&'a str>,
	error_message: Option<&'a str>,
	kind: FieldKind,
	variant: FieldVariant,
	size: FieldSize,
	disabled: bool,
	invalid: bool,
	loading: bool,
	show_clear_button: bool,
	focused: bool,
	theme: Theme,
	throbber: Option<&'a ThrobberState>,
}

impl<'a> TextField<'a> {
	pub fn new(value: &'a str) -> Self {
		Self {
			value,
			label: None,
			placeholder: None,
			helper_text: None,
			error_message: None,
			kind: FieldKind::default(),
			variant: FieldVariant::default(),
			size: FieldSize::default(),
			disabled: false,
			invalid: false,
			loading: false,
			show_clear_button: false,
			focused: false,
			theme: Theme::default(),
			throbber: None,
		}
	}

	#[must_use]
	pub fn label(mut self, label: &'a str) -> Self {
		self.label = Some(label);
		self
	}

	#[must_use]
	pub fn placeholder(mut self, placeholder: &'a str) -> Self {
		self.placeholder = Some(placeholder);
		self
	}

	#[must_use]
	pub fn helper_text(mut self, helper_text: &'a str) -> Self {
		self.helper_text = Some(helper_text);
		self
	}

	#[must_use]
	pub fn error_message(mut self, error_message: &'a str) -> Self {
		self.error_message = Some(error_message);
		self
	}

	#[must_use]
	pub fn kind(mut self, kind: FieldKind) -> Self {
		self.kind = kind;
		self
	}

	#[must_use]
	pub fn variant(mut self, variant: FieldVariant) -> Self {
		self.variant = variant;
		self
	}

	#[must_use]
	pub fn size(mut self, size: FieldSize) -> Self {
		self.size = size;
		self
	}

	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	#[must_use]
	pub fn invalid(mut self, invalid: bool) -> Self {
		self.invalid = invalid;
		self
	}

	#[must_use]
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	#[must_use]
	pub fn show_clear_button(mut self, show: bool) -> Self {
		self.show_clear_button = show;
		self
	}

	#[must_use]
	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	#[must_use]
	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Spinner state animated while `loading` is set.
	#[must_use]
	pub fn throbber(mut self, throbber: &'a ThrobberState) -> Self {
		self.throbber = Some(throbber);
		self
	}

	pub fn value(&self) -> &'a str {
		self.value
	}

	pub fn field_kind(&self) -> FieldKind {
		self.kind
	}

	/// True only when the field is flagged invalid and has a message to show.
	pub fn has_error(&self) -> bool {
		self.invalid && self.error_message.is_some_and(|message| !message.is_empty())
	}

	pub fn is_interactive(&self) -> bool {
		!self.disabled && !self.loading
	}

	pub fn clear_visible(&self) -> bool {
		self.show_clear_button && !self.value.is_empty() && self.is_interactive()
	}

	/// The show/hide affordance stays available on disabled fields.
	pub fn reveal_toggle_visible(&self) -> bool {
		self.kind == FieldKind::Password && !self.loading
	}

	/// Kind the value is presented as; a revealed password reads as text.
	pub fn effective_kind(&self, state: &TextFieldState) -> FieldKind {
		match self.kind {
			FieldKind::Password if state.reveal_password => FieldKind::Text,
			kind => kind,
		}
	}

	pub fn display_text(&self, state: &TextFieldState) -> Cow<'a, str> {
		if self.effective_kind(state) == FieldKind::Password {
			let graphemes = self.value.graphemes(true).count();
			Cow::Owned(std::iter::repeat_n(MASK_CHAR, graphemes).collect())
		} else {
			Cow::Borrowed(self.value)
		}
	}

	/// Error text wins over helper text; empty strings count as absent.
	pub fn helper_line(&self) -> Option<HelperLine<'a>> {
		if self.has_error() {
			return self.error_message.map(HelperLine::Error);
		}
		self.helper_text
			.filter(|text| !text.is_empty())
			.map(HelperLine::Helper)
	}
}
