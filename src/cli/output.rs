use anyhow::Result;
use serde_json::{Value, json};
use tabula::Outcome;
use tabula::records::ID_KEY;

/// Plain-text lines for an outcome: one record id per line.
pub(crate) fn format_plain(outcome: &Outcome) -> Vec<String> {
	if !outcome.accepted {
		return vec![format!("Cancelled (query: '{}')", outcome.query)];
	}
	if outcome.selection.is_empty() {
		return vec!["No selection".to_string()];
	}

	outcome
		.selection
		.iter()
		.map(|record| match record.get(ID_KEY) {
			Some(Value::String(text)) => text.clone(),
			Some(other) => other.to_string(),
			None => record.to_string(),
		})
		.collect()
}

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	for line in format_plain(outcome) {
		println!("{line}");
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
