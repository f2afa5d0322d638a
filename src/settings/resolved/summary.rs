use tabula_tui::input::{FieldSize, FieldVariant};
use tabula_tui::table::StaleSelection;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  Records: {}",
		config
			.file
			.as_ref()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "(built-in sample)".to_string())
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Table title: {title}"));
	}
	lines.push(format!("  Selectable: {}", bool_to_word(config.selectable)));
	lines.push(format!("  Start loading: {}", bool_to_word(config.loading)));
	lines.push(format!(
		"  Stale selection: {}",
		match config.stale_selection {
			StaleSelection::Retain => "retain",
			StaleSelection::Prune => "prune",
		}
	));
	lines.push(format!(
		"  Columns: {}",
		list_or(config.columns.as_deref(), "(from records)")
	));
	lines.push(format!(
		"  Sortable columns: {}",
		list_or(config.sortable.as_deref(), "(all)")
	));
	if !config.initial_selection.is_empty() {
		lines.push(format!(
			"  Initial selection: {}",
			config.initial_selection.join(", ")
		));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	if let Some(label) = &config.input.label {
		lines.push(format!("  Filter label: {label}"));
	}
	lines.push(format!(
		"  Filter variant: {}",
		match config.input.variant {
			FieldVariant::Filled => "filled",
			FieldVariant::Outlined => "outlined",
			FieldVariant::Ghost => "ghost",
		}
	));
	lines.push(format!(
		"  Filter size: {}",
		match config.input.size {
			FieldSize::Sm => "sm",
			FieldSize::Md => "md",
			FieldSize::Lg => "lg",
		}
	));
	lines.push(format!(
		"  Clear button: {}",
		bool_to_word(config.input.show_clear_button)
	));
	lines.push(format!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	));
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

fn list_or(values: Option<&[String]>, fallback: &str) -> String {
	match values {
		Some(values) => values.join(", "),
		None => fallback.to_string(),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
