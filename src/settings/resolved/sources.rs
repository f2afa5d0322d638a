use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
	pub(crate) stale_selection: Option<SettingSource>,
	pub(crate) columns: Option<SettingSource>,
	pub(crate) sortable: Option<SettingSource>,
	pub(crate) variant: Option<SettingSource>,
	pub(crate) size: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "log.level")
	}

	pub(crate) fn source_for_stale_selection(&self) -> SettingSource {
		or_key(&self.stale_selection, "table.stale_selection")
	}

	pub(crate) fn source_for_columns(&self) -> SettingSource {
		or_key(&self.columns, "table.columns")
	}

	pub(crate) fn source_for_sortable(&self) -> SettingSource {
		or_key(&self.sortable, "table.sortable")
	}

	pub(crate) fn source_for_variant(&self) -> SettingSource {
		or_key(&self.variant, "input.variant")
	}

	pub(crate) fn source_for_size(&self) -> SettingSource {
		or_key(&self.size, "input.size")
	}
}
