mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tabula::records::{Dataset, load_records};
use tabula::{AppOptions, Outcome, logging};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tabula_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(resolved.log_level)?;

	let outcome = run_viewer(resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Load the records, build the viewer options and run the viewer.
fn run_viewer(settings: ResolvedConfig) -> Result<Outcome> {
	let dataset = load_dataset(&settings)?;

	// Columns that do not exist in the data are a user error, not a silent no-op.
	if let Some(sortable) = &settings.sortable {
		for key in sortable {
			dataset
				.column_index(key)
				.with_context(|| format!("invalid sortable column `{key}`"))?;
		}
	}

	let initial_selection = settings
		.initial_selection
		.iter()
		.map(|id| {
			dataset
				.find_id(id)
				.with_context(|| format!("invalid selected id `{id}`"))
		})
		.collect::<Result<Vec<_>>>()?;

	let theme = match settings.theme.as_deref() {
		Some(name) => tabula_tui::style::by_name(name)
			.with_context(|| format!("unknown theme `{name}`"))?,
		None => tabula_tui::style::default_theme(),
	};

	let options = AppOptions {
		title: settings.title,
		selectable: settings.selectable,
		loading: settings.loading,
		stale_selection: settings.stale_selection,
		sortable: settings.sortable,
		initial_query: settings.initial_query,
		initial_selection,
		input: settings.input,
		theme,
	};
	log::info!(
		"starting viewer with {} records and {} columns",
		dataset.records().len(),
		dataset.columns().len()
	);
	tabula::run(dataset, options)
}

fn load_dataset(settings: &ResolvedConfig) -> Result<Dataset> {
	let columns = settings.columns.as_deref();
	match &settings.file {
		Some(path) => load_records(path, columns)
			.with_context(|| format!("failed to load records from {}", path.display())),
		None => {
			let sample = Dataset::sample();
			match columns {
				Some(columns) => sample.restrict(columns).context("invalid column selection"),
				None => Ok(sample),
			}
		}
	}
}
