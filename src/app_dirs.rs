//! Resolve configuration, cache, and data directories for `tabula`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "tabula";
const APPLICATION: &str = "tabula";

pub const CONFIG_DIR_ENV: &str = "TABULA_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "TABULA_DATA_DIR";
pub const CACHE_DIR_ENV: &str = "TABULA_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for tabula"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for user data such as record files.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		// SAFETY: the variable name is unique to this test.
		unsafe { env::set_var("TABULA_TEST_EMPTY_DIR", "") };
		assert_eq!(dir_from_env("TABULA_TEST_EMPTY_DIR"), None);
	}

	#[test]
	fn override_is_used_verbatim() {
		// SAFETY: the variable name is unique to this test.
		unsafe { env::set_var("TABULA_TEST_SOME_DIR", "/tmp/tabula-test") };
		assert_eq!(
			dir_from_env("TABULA_TEST_SOME_DIR"),
			Some(PathBuf::from("/tmp/tabula-test"))
		);
	}
}
