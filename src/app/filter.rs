use std::rc::Rc;

use frizbee::{Config, match_list};

use crate::records::Record;

/// Matcher settings for narrowing the table.
///
/// Filtering removes rows instead of ranking them, so no typos are allowed:
/// a row survives only when it contains the query as a fuzzy subsequence.
pub(crate) fn config_for_query() -> Config {
	Config {
		prefilter: true,
		max_typos: Some(0),
		sort: false,
		..Config::default()
	}
}

/// Records matching `query`, in collection order. An empty query keeps all.
pub(crate) fn filter_records(query: &str, records: &[Rc<Record>]) -> Vec<Rc<Record>> {
	let trimmed = query.trim();
	if trimmed.is_empty() {
		return records.to_vec();
	}

	let haystacks: Vec<String> = records.iter().map(|record| record.haystack()).collect();
	let config = config_for_query();
	let mut matched: Vec<usize> = match_list(trimmed, &haystacks, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| entry.index as usize)
		.collect();
	matched.sort_unstable();
	matched.dedup();

	log::debug!(
		"query `{trimmed}` kept {} of {} records",
		matched.len(),
		records.len()
	);
	matched
		.into_iter()
		.filter_map(|index| records.get(index).cloned())
		.collect()
}
