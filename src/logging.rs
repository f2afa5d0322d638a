//! File logging for the viewer.
//!
//! The terminal belongs to ratatui while the viewer runs, so log records go
//! to `<cache dir>/tabula.log` instead of stderr.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "tabula.log";

/// Install the global file logger and return the log file path.
///
/// `LevelFilter::Off` skips installation entirely.
pub fn initialize(level: LevelFilter) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}

	let dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_time_level(LevelFilter::Debug)
		.add_filter_allow_str("tabula")
		.build();
	WriteLogger::init(level, config, file).context("logger already initialised")?;
	log::info!("logging at {level} to {}", path.display());
	Ok(Some(path))
}
