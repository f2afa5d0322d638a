use std::collections::HashSet;

use tabula::records::ID_KEY;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(theme) = config.theme.as_deref()
		&& tabula_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!(
				"unknown theme; available: {}",
				tabula_tui::style::names().join(", ")
			),
		));
	}

	if let Some(columns) = &config.columns {
		if columns.is_empty() {
			return Err(ConfigError::invalid(
				"table.columns",
				"",
				sources.source_for_columns(),
				"must name at least one column",
			));
		}
		let mut seen = HashSet::new();
		for column in columns {
			if column == ID_KEY {
				return Err(ConfigError::invalid(
					"table.columns",
					column.as_str(),
					sources.source_for_columns(),
					"the id key is not a column",
				));
			}
			if !seen.insert(column.as_str()) {
				return Err(ConfigError::invalid(
					"table.columns",
					column.as_str(),
					sources.source_for_columns(),
					"listed more than once",
				));
			}
		}
	}

	// Without explicit columns the record file decides; that check happens
	// once the data is loaded.
	if let (Some(columns), Some(sortable)) = (&config.columns, &config.sortable)
		&& let Some(unknown) = sortable.iter().find(|key| !columns.contains(key))
	{
		return Err(ConfigError::invalid(
			"table.sortable",
			unknown.as_str(),
			sources.source_for_sortable(),
			"not one of the configured columns",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn defaults_are_valid() {
		validate(&ResolvedConfig::default(), &ConfigSources::default()).unwrap();
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("no-such-theme".into()),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::CliFlag("--theme")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("value: no-such-theme"));
		assert!(message.contains("CLI flag `--theme`"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn validation_accepts_builtin_theme_names() {
		let config = ResolvedConfig {
			theme: Some("Solarized-Dark".into()),
			..ResolvedConfig::default()
		};
		validate(&config, &ConfigSources::default()).unwrap();
	}

	#[test]
	fn validation_rejects_bad_columns() {
		let sources = ConfigSources {
			columns: Some(SettingSource::Environment("TABULA__TABLE__COLUMNS")),
			..ConfigSources::default()
		};
		for (columns, reason) in [
			(strings(&[]), "at least one column"),
			(strings(&["id", "name"]), "the id key"),
			(strings(&["name", "name"]), "more than once"),
		] {
			let config = ResolvedConfig {
				columns: Some(columns),
				..ResolvedConfig::default()
			};
			let err = validate(&config, &sources).unwrap_err();
			assert_eq!(err.key, "table.columns");
			let message = err.to_string();
			assert!(message.contains(reason), "{message}");
			assert!(message.contains("environment variable"));
		}
	}

	#[test]
	fn sortable_columns_must_be_configured_columns() {
		let config = ResolvedConfig {
			columns: Some(strings(&["name", "age"])),
			sortable: Some(strings(&["email"])),
			..ResolvedConfig::default()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "table.sortable");
		let message = err.to_string();
		assert!(message.contains("value: email"));
		assert!(message.contains("configuration key `table.sortable`"));
	}
}
