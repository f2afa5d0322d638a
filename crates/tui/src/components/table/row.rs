//! Row contract and the values a row exposes per field.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A record that can be displayed by [`DataTable`](super::DataTable).
///
/// Rows expose a unique identifier and a typed field selector. The selector is
/// usually a small `Copy` enum naming the row's fields, which lets columns
/// refer to fields that are checked at compile time instead of by string name.
pub trait TableRow {
	/// Unique identifier for the row, stable across re-renders.
	type Id: Clone + Eq + Hash + fmt::Debug;
	/// Selector naming one of the row's fields.
	type Field: Copy + Eq + fmt::Debug;

	/// Identifier of this row.
	fn id(&self) -> Self::Id;

	/// Value of the given field on this row.
	fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<T: TableRow + ?Sized> TableRow for Rc<T> {
	type Id = T::Id;
	type Field = T::Field;

	fn id(&self) -> Self::Id {
		(**self).id()
	}

	fn field(&self, field: Self::Field) -> FieldValue<'_> {
		(**self).field(field)
	}
}

impl<T: TableRow + ?Sized> TableRow for Arc<T> {
	type Id = T::Id;
	type Field = T::Field;

	fn id(&self) -> Self::Id {
		(**self).id()
	}

	fn field(&self, field: Self::Field) -> FieldValue<'_> {
		(**self).field(field)
	}
}

/// Scalar value read from a row field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
	/// Textual value.
	Text(Cow<'a, str>),
	/// Whole number.
	Integer(i64),
	/// Floating point number.
	Float(f64),
	/// Boolean flag.
	Bool(bool),
	/// Missing value; renders as an empty cell.
	Empty,
}

impl FieldValue<'_> {
	/// Compare two values by their natural ordering.
	///
	/// This is a total order, so every column sorts consistently. Kinds rank
	/// as empty, then booleans, then numbers, then text. Integers and floats
	/// compare numerically with each other, and floats use
	/// [`f64::total_cmp`] so NaN sorts after every other number.
	#[must_use]
	pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
		use FieldValue::{Bool, Float, Integer, Text};

		match (self, other) {
			(Text(a), Text(b)) => a.as_ref().cmp(b.as_ref()),
			(Integer(a), Integer(b)) => a.cmp(b),
			(Float(a), Float(b)) => a.total_cmp(b),
			(Integer(a), Float(b)) => (*a as f64).total_cmp(b),
			(Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
			(Bool(a), Bool(b)) => a.cmp(b),
			_ => self.kind_rank().cmp(&other.kind_rank()),
		}
	}

	fn kind_rank(&self) -> u8 {
		match self {
			Self::Empty => 0,
			Self::Bool(_) => 1,
			Self::Integer(_) | Self::Float(_) => 2,
			Self::Text(_) => 3,
		}
	}

	/// Convert into a value that owns its text.
	#[must_use]
	pub fn into_owned(self) -> FieldValue<'static> {
		match self {
			Self::Text(text) => FieldValue::Text(Cow::Owned(text.into_owned())),
			Self::Integer(value) => FieldValue::Integer(value),
			Self::Float(value) => FieldValue::Float(value),
			Self::Bool(value) => FieldValue::Bool(value),
			Self::Empty => FieldValue::Empty,
		}
	}

	/// Whether the value is missing.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

impl fmt::Display for FieldValue<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Integer(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Empty => Ok(()),
		}
	}
}

impl<'a> From<&'a str> for FieldValue<'a> {
	fn from(value: &'a str) -> Self {
		Self::Text(Cow::Borrowed(value))
	}
}

impl<'a> From<&'a String> for FieldValue<'a> {
	fn from(value: &'a String) -> Self {
		Self::Text(Cow::Borrowed(value.as_str()))
	}
}

impl From<String> for FieldValue<'_> {
	fn from(value: String) -> Self {
		Self::Text(Cow::Owned(value))
	}
}

macro_rules! integer_field_value {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FieldValue<'_> {
				fn from(value: $ty) -> Self {
					Self::Integer(i64::from(value))
				}
			}
		)*
	};
}

integer_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FieldValue<'_> {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for FieldValue<'_> {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for FieldValue<'_> {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
	T: Into<FieldValue<'a>>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}
