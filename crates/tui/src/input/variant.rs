//! Presentation options for [`TextField`](super::TextField).

use serde::Deserialize;

/// How the field interprets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	#[default]
	Text,
	Password,
	Email,
	Number,
}

impl FieldKind {
	/// Whether `ch` may be typed into a field of this kind.
	pub fn accepts(self, ch: char) -> bool {
		match self {
			Self::Number => ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'),
			Self::Text | Self::Password | Self::Email => true,
		}
	}
}

/// Visual treatment of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
	/// Background fill, no border.
	Filled,
	/// Rounded border.
	#[default]
	Outlined,
	/// Neither border nor fill.
	Ghost,
}

impl FieldVariant {
	pub(crate) fn has_border(self) -> bool {
		matches!(self, Self::Outlined)
	}
}

/// Field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSize {
	Sm,
	#[default]
	Md,
	Lg,
}

impl FieldSize {
	/// Blank columns on each side of the text.
	pub fn horizontal_padding(self) -> u16 {
		match self {
			Self::Sm => 0,
			Self::Md => 1,
			Self::Lg => 2,
		}
	}

	/// Blank rows above and below the text.
	pub fn vertical_padding(self) -> u16 {
		match self {
			Self::Sm | Self::Md => 0,
			Self::Lg => 1,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn number_fields_only_accept_numeric_characters() {
		for ch in ['0', '9', '-', '+', '.', 'e', 'E'] {
			assert!(FieldKind::Number.accepts(ch), "{ch}");
		}
		for ch in ['a', ' ', ',', 'x'] {
			assert!(!FieldKind::Number.accepts(ch), "{ch}");
		}
		assert!(FieldKind::Email.accepts('@'));
	}

	#[test]
	fn options_deserialize_from_lowercase_names() {
		#[derive(Deserialize)]
		struct Options {
			kind: FieldKind,
			variant: FieldVariant,
			size: FieldSize,
		}

		let options: Options =
			toml::from_str("kind = \"password\"\nvariant = \"ghost\"\nsize = \"lg\"").unwrap();
		assert_eq!(options.kind, FieldKind::Password);
		assert_eq!(options.variant, FieldVariant::Ghost);
		assert_eq!(options.size, FieldSize::Lg);
	}

	#[test]
	fn sizes_pad_progressively() {
		assert_eq!(FieldSize::Sm.horizontal_padding(), 0);
		assert_eq!(FieldSize::Md.horizontal_padding(), 1);
		assert_eq!(FieldSize::Lg.horizontal_padding(), 2);
		assert_eq!(FieldSize::Lg.vertical_padding(), 1);
		assert_eq!(FieldSize::default(), FieldSize::Md);
	}
}
