//! Row selection bookkeeping for tables with a checkbox column.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Deserialize;

/// Set of selected row identifiers.
#[derive(Debug, Clone)]
pub struct Selection<Id> {
	ids: HashSet<Id>,
}

impl<Id> Default for Selection<Id> {
	fn default() -> Self {
		Self {
			ids: HashSet::new(),
		}
	}
}

impl<Id: Clone + Eq + Hash> Selection<Id> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the selection from an initial list of ids.
	pub fn from_ids<I>(ids: I) -> Self
	where
		I: IntoIterator<Item = Id>,
	{
		Self {
			ids: ids.into_iter().collect(),
		}
	}

	/// Replace the selection with `visible` when `checked`, otherwise clear it.
	pub fn toggle_all<I>(&mut self, checked: bool, visible: I)
	where
		I: IntoIterator<Item = Id>,
	{
		self.ids = if checked {
			visible.into_iter().collect()
		} else {
			HashSet::new()
		};
	}

	/// Flip membership of `id`. Returns whether the id is selected afterwards.
	pub fn toggle(&mut self, id: &Id) -> bool {
		if self.ids.remove(id) {
			false
		} else {
			self.ids.insert(id.clone());
			true
		}
	}

	pub fn contains(&self, id: &Id) -> bool {
		self.ids.contains(id)
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Keep only ids accepted by `keep`.
	pub fn retain<F>(&mut self, keep: F)
	where
		F: FnMut(&Id) -> bool,
	{
		self.ids.retain(keep);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Id> {
		self.ids.iter()
	}
}

impl<Id: Eq + Hash> PartialEq for Selection<Id> {
	fn eq(&self, other: &Self) -> bool {
		self.ids == other.ids
	}
}

/// Tri-state value of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
	Unchecked,
	Indeterminate,
	Checked,
}

impl CheckState {
	/// Derive the header state from the selection size and the row count.
	///
	/// A selection larger than the row count (stale ids kept after rows were
	/// replaced) is neither partial nor complete and reads as unchecked.
	#[must_use]
	pub fn derive(selected: usize, total: usize) -> Self {
		if total > 0 && selected == total {
			Self::Checked
		} else if selected > 0 && selected < total {
			Self::Indeterminate
		} else {
			Self::Unchecked
		}
	}

	/// Checkbox glyph for this state.
	#[must_use]
	pub fn symbol(self) -> &'static str {
		match self {
			Self::Unchecked => "[ ]",
			Self::Indeterminate => "[-]",
			Self::Checked => "[x]",
		}
	}

	/// Value a select-all click applies: anything but checked selects all.
	#[must_use]
	pub fn toggled_value(self) -> bool {
		self != Self::Checked
	}
}

/// What happens to selected ids whose rows disappear after `set_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleSelection {
	/// Keep them until the next select-all recomputes the set.
	#[default]
	Retain,
	/// Drop them as soon as the rows are replaced.
	Prune,
}
