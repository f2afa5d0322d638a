use std::env;

use anyhow::{Error, Result};
use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::util::non_blank;

mod input;
mod table;

use input::InputSection;
use table::TableSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	input: InputSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.table.apply_cli_overrides(cli);
		self.input.apply_cli_overrides(cli);
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level {
			self.log.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"TABULA__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"TABULA__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
			stale_selection: detect_source(
				cli.stale_selection.is_some(),
				self.table.stale_selection.is_some(),
				"TABULA__TABLE__STALE_SELECTION",
				"--stale-selection",
				"table.stale_selection",
			),
			columns: detect_source(
				cli.columns.is_some(),
				self.table.columns.is_some(),
				"TABULA__TABLE__COLUMNS",
				"--columns",
				"table.columns",
			),
			sortable: detect_source(
				cli.sortable.is_some(),
				self.table.sortable.is_some(),
				"TABULA__TABLE__SORTABLE",
				"--sortable",
				"table.sortable",
			),
			variant: detect_config_source(
				self.input.variant.is_some(),
				"TABULA__INPUT__VARIANT",
				"input.variant",
			),
			size: detect_config_source(
				self.input.size.is_some(),
				"TABULA__INPUT__SIZE",
				"input.size",
			),
		};

		let table = self.table.resolve(&sources).map_err(Error::new)?;
		let (input, initial_query) = self.input.resolve(&sources).map_err(Error::new)?;
		let log_level = match self.log.level {
			Some(level) => parse_level(&level, &sources).map_err(Error::new)?,
			None => LevelFilter::Info,
		};

		let config = ResolvedConfig {
			file: cli.file.clone(),
			title: table.title,
			selectable: table.selectable,
			loading: table.loading,
			stale_selection: table.stale_selection,
			columns: table.columns,
			sortable: table.sortable,
			initial_selection: table.initial_selection,
			initial_query,
			input,
			theme: non_blank(self.ui.theme),
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn parse_level(value: &str, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
	value.trim().parse().map_err(|_| {
		ConfigError::invalid(
			"log.level",
			value,
			sources.source_for_log_level(),
			"expected one of off, error, warn, info, debug, trace",
		)
	})
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	detect_config_source(value_present, env_var, key)
}

/// Origin of a setting that has no CLI flag.
fn detect_config_source(
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
