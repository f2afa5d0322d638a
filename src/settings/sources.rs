use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use tabula::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment overrides, e.g. `TABULA__TABLE__TITLE`.
pub(super) const ENV_PREFIX: &str = "TABULA";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".tabula.toml"));
		files.push(current_dir.join("tabula.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".tabula.toml")));
		assert!(files.iter().any(|path| path.ends_with("tabula.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "[table]\ntitle = \"Team\"\nsortable = [\"name\"]").unwrap();

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["tabula", "--no-config", "--config", path.as_str()]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_string("table.title").unwrap(), "Team");
		let sortable: Vec<String> = config.get("table.sortable").unwrap();
		assert_eq!(sortable, ["name"]);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let cli = CliArgs::parse_from([
			"tabula",
			"--no-config",
			"--config",
			"/definitely/not/here.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
