use serde::Deserialize;
use tabula_tui::table::StaleSelection;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::{non_blank, sanitize_keys};
use crate::cli::CliArgs;

/// `[table]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) title: Option<String>,
	pub(super) selectable: Option<bool>,
	pub(super) loading: Option<bool>,
	pub(super) stale_selection: Option<String>,
	pub(super) columns: Option<Vec<String>>,
	pub(super) sortable: Option<Vec<String>>,
	pub(super) initial_selection: Option<Vec<String>>,
}

pub(super) struct TableResolution {
	pub(super) title: Option<String>,
	pub(super) selectable: bool,
	pub(super) loading: bool,
	pub(super) stale_selection: StaleSelection,
	pub(super) columns: Option<Vec<String>>,
	pub(super) sortable: Option<Vec<String>>,
	pub(super) initial_selection: Vec<String>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(selectable) = cli.selectable_override() {
			self.selectable = Some(selectable);
		}
		if let Some(loading) = cli.loading_override() {
			self.loading = Some(loading);
		}
		if let Some(policy) = cli.stale_selection {
			self.stale_selection = Some(policy.as_str().to_string());
		}
		if let Some(columns) = &cli.columns {
			self.columns = Some(columns.clone());
		}
		if let Some(sortable) = &cli.sortable {
			self.sortable = Some(sortable.clone());
		}
		if let Some(ids) = &cli.select {
			self.initial_selection = Some(ids.clone());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<TableResolution, ConfigError> {
		let stale_selection = match self.stale_selection {
			Some(value) => parse_stale_selection(&value).ok_or_else(|| {
				ConfigError::invalid(
					"table.stale_selection",
					value.clone(),
					sources.source_for_stale_selection(),
					"expected `retain` or `prune`",
				)
			})?,
			None => StaleSelection::default(),
		};

		Ok(TableResolution {
			title: non_blank(self.title),
			selectable: self.selectable.unwrap_or(true),
			loading: self.loading.unwrap_or(false),
			stale_selection,
			columns: self.columns.map(sanitize_keys),
			sortable: self.sortable.map(sanitize_keys),
			initial_selection: self
				.initial_selection
				.map(sanitize_keys)
				.unwrap_or_default(),
		})
	}
}

fn parse_stale_selection(value: &str) -> Option<StaleSelection> {
	match value.trim().to_ascii_lowercase().as_str() {
		"retain" => Some(StaleSelection::Retain),
		"prune" => Some(StaleSelection::Prune),
		_ => None,
	}
}
