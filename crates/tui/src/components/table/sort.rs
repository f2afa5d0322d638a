//! Single-key sort state and the stable ordering it produces.

use std::cmp::Ordering;

use super::row::TableRow;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	Ascending,
	Descending,
}

impl SortDirection {
	/// The opposite direction.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Orient an ascending comparison result for this direction. Ties stay ties.
	#[must_use]
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// Sort state of a table: unsorted, or sorted by exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState<F> {
	Unsorted,
	Sorted { field: F, direction: SortDirection },
}

impl<F> Default for SortState<F> {
	fn default() -> Self {
		Self::Unsorted
	}
}

impl<F: Copy + Eq> SortState<F> {
	/// State after a sort request on `field`.
	///
	/// A new field always starts ascending. Repeating the request on the
	/// active field flips the direction; there is no way back to
	/// [`SortState::Unsorted`].
	#[must_use]
	pub fn next(self, field: F) -> Self {
		match self {
			Self::Sorted {
				field: current,
				direction,
			} if current == field => Self::Sorted {
				field,
				direction: direction.toggled(),
			},
			_ => Self::Sorted {
				field,
				direction: SortDirection::Ascending,
			},
		}
	}

	/// The active sort field, if any.
	pub fn field(&self) -> Option<F> {
		match self {
			Self::Unsorted => None,
			Self::Sorted { field, .. } => Some(*field),
		}
	}

	/// Direction applied to `field`, or `None` when it is not the sort key.
	pub fn direction_of(&self, field: F) -> Option<SortDirection> {
		match self {
			Self::Sorted {
				field: current,
				direction,
			} if *current == field => Some(*direction),
			_ => None,
		}
	}
}

/// Indices of `rows` in display order for `state`.
///
/// The caller's slice is never reordered. Equal keys keep their relative
/// order in both directions.
pub fn sorted_order<R: TableRow>(rows: &[R], state: SortState<R::Field>) -> Vec<usize> {
	let mut order: Vec<usize> = (0..rows.len()).collect();
	if let SortState::Sorted { field, direction } = state {
		order.sort_by(|&a, &b| {
			let left = rows[a].field(field);
			let right = rows[b].field(field);
			direction.apply(left.compare(&right))
		});
	}
	order
}
