use serde::Deserialize;
use tabula::app::InputOptions;
use tabula_tui::input::{FieldSize, FieldVariant};

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[input]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InputSection {
	pub(super) label: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) helper_text: Option<String>,
	pub(super) variant: Option<String>,
	pub(super) size: Option<String>,
	pub(super) show_clear_button: Option<bool>,
	pub(super) query: Option<String>,
}

impl InputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.query = Some(query);
		}
	}

	/// Field options plus the initial query.
	pub(super) fn resolve(
		self,
		sources: &ConfigSources,
	) -> Result<(InputOptions, String), ConfigError> {
		let defaults = InputOptions::default();

		let variant = match self.variant {
			Some(value) => parse_variant(&value).ok_or_else(|| {
				ConfigError::invalid(
					"input.variant",
					value.clone(),
					sources.source_for_variant(),
					"expected `filled`, `outlined` or `ghost`",
				)
			})?,
			None => defaults.variant,
		};
		let size = match self.size {
			Some(value) => parse_size(&value).ok_or_else(|| {
				ConfigError::invalid(
					"input.size",
					value.clone(),
					sources.source_for_size(),
					"expected `sm`, `md` or `lg`",
				)
			})?,
			None => defaults.size,
		};

		// An explicitly empty label or placeholder hides it.
		let label = match self.label {
			Some(label) => non_blank(Some(label)),
			None => defaults.label,
		};
		let placeholder = match self.placeholder {
			Some(placeholder) => non_blank(Some(placeholder)),
			None => defaults.placeholder,
		};

		let options = InputOptions {
			label,
			placeholder,
			helper_text: non_blank(self.helper_text),
			variant,
			size,
			show_clear_button: self
				.show_clear_button
				.unwrap_or(defaults.show_clear_button),
		};
		Ok((options, self.query.unwrap_or_default()))
	}
}

fn parse_variant(value: &str) -> Option<FieldVariant> {
	match value.trim().to_ascii_lowercase().as_str() {
		"filled" => Some(FieldVariant::Filled),
		"outlined" => Some(FieldVariant::Outlined),
		"ghost" => Some(FieldVariant::Ghost),
		_ => None,
	}
}

fn parse_size(value: &str) -> Option<FieldSize> {
	match value.trim().to_ascii_lowercase().as_str() {
		"sm" | "small" => Some(FieldSize::Sm),
		"md" | "medium" => Some(FieldSize::Md),
		"lg" | "large" => Some(FieldSize::Lg),
		_ => None,
	}
}
