use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat, StaleSelectionArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabula` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tabula",
	version,
	long_version = long_version(),
	about = "Browse, sort and pick records from a JSON array in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "JSON array of records to display (default: built-in sample data)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TABULA_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the table title (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial filter query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		overrides_with = "no_selectable",
		help = "Show the selection checkbox column (default: enabled)"
	)]
	pub(crate) selectable: bool,
	#[arg(
		long = "no-selectable",
		overrides_with = "selectable",
		help = "Hide the selection checkbox column"
	)]
	pub(crate) no_selectable: bool,
	#[arg(
		long,
		help = "Start with the table in its loading state; Ctrl+R toggles it (default: disabled)"
	)]
	pub(crate) loading: bool,
	#[arg(
		long = "stale-selection",
		value_enum,
		help = "What happens to selected ids that leave the row set (default: retain)"
	)]
	pub(crate) stale_selection: Option<StaleSelectionArg>,
	#[arg(
		long = "columns",
		value_delimiter = ',',
		value_name = "KEY",
		help = "Comma-separated record keys to show as columns (default: every key)"
	)]
	pub(crate) columns: Option<Vec<String>>,
	#[arg(
		long = "sortable",
		value_delimiter = ',',
		value_name = "KEY",
		help = "Comma-separated column keys that can be sorted (default: all columns)"
	)]
	pub(crate) sortable: Option<Vec<String>>,
	#[arg(
		long = "select",
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated record ids that start selected (default: none)"
	)]
	pub(crate) select: Option<Vec<String>>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Verbosity of the log file (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
}

impl CliArgs {
	/// `Some` when either selection flag was passed; the last one wins.
	pub(crate) fn selectable_override(&self) -> Option<bool> {
		if self.no_selectable {
			Some(false)
		} else if self.selectable {
			Some(true)
		} else {
			None
		}
	}

	pub(crate) fn loading_override(&self) -> Option<bool> {
		self.loading.then_some(true)
	}
}
