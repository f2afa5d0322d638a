use std::path::PathBuf;

use log::LevelFilter;
use tabula::app::InputOptions;
use tabula_tui::table::StaleSelection;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Record file; `None` shows the built-in sample data.
	pub file: Option<PathBuf>,
	pub title: Option<String>,
	pub selectable: bool,
	pub loading: bool,
	pub stale_selection: StaleSelection,
	pub columns: Option<Vec<String>>,
	pub sortable: Option<Vec<String>>,
	/// Record ids, as written, that start selected.
	pub initial_selection: Vec<String>,
	pub initial_query: String,
	pub input: InputOptions,
	pub theme: Option<String>,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			file: None,
			title: None,
			selectable: true,
			loading: false,
			stale_selection: StaleSelection::default(),
			columns: None,
			sortable: None,
			initial_selection: Vec::new(),
			initial_query: String::new(),
			input: InputOptions::default(),
			theme: None,
			log_level: LevelFilter::Info,
		}
	}
}
