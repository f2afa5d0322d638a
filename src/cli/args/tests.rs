use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, LogLevelArg, OutputFormat, StaleSelectionArg};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["tabula"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.file.is_none());
	assert_eq!(parsed.selectable_override(), None);
	assert_eq!(parsed.loading_override(), None);
}

#[test]
fn selection_flags_override_each_other() {
	let cli = CliArgs::parse_from(["tabula", "--selectable", "--no-selectable"]);
	assert_eq!(cli.selectable_override(), Some(false));

	let cli = CliArgs::parse_from(["tabula", "--no-selectable", "--selectable"]);
	assert_eq!(cli.selectable_override(), Some(true));
}

#[test]
fn lists_and_enums_parse() {
	let cli = CliArgs::parse_from([
		"tabula",
		"users.json",
		"--columns",
		"name,age",
		"--sortable=age",
		"--select",
		"2,x",
		"--stale-selection",
		"prune",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);
	assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("users.json")));
	assert_eq!(cli.columns, Some(vec!["name".to_string(), "age".to_string()]));
	assert_eq!(cli.sortable, Some(vec!["age".to_string()]));
	assert_eq!(cli.select, Some(vec!["2".to_string(), "x".to_string()]));
	assert_eq!(cli.stale_selection, Some(StaleSelectionArg::Prune));
	assert_eq!(cli.log_level, Some(LogLevelArg::Debug));
	assert_eq!(cli.output, OutputFormat::Json);
}
