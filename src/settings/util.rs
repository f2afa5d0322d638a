/// Trim keys and ids, dropping empty entries.
pub(super) fn sanitize_keys(keys: Vec<String>) -> Vec<String> {
	keys.into_iter()
		.map(|key| key.trim().to_string())
		.filter(|key| !key.is_empty())
		.collect()
}

/// Treat blank strings as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_are_trimmed_and_filtered() {
		let keys = sanitize_keys(vec![" name ".into(), "".into(), "age".into()]);
		assert_eq!(keys, vec!["name", "age"]);
	}

	#[test]
	fn blank_values_are_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some("Users".into())), Some("Users".into()));
		assert_eq!(non_blank(None), None);
	}
}
