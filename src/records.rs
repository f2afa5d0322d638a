//! Record loading for the viewer.
//!
//! Records come from a JSON array of objects. Every object carries an `id`
//! (string or integer); the remaining keys become columns in first-seen order.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tabula_tui::table::{FieldValue, TableRow};
use thiserror::Error;

/// Key holding the record identifier.
pub const ID_KEY: &str = "id";

/// Errors raised while reading a record file.
#[derive(Debug, Error)]
pub enum RecordError {
	#[error("failed to read {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("records are not valid JSON")]
	Parse(#[from] serde_json::Error),
	#[error("expected a JSON array of objects at the top level")]
	NotAnArray,
	#[error("record {index} is not a JSON object")]
	NotAnObject { index: usize },
	#[error("record {index} has no `id`")]
	MissingId { index: usize },
	#[error("record {index} has an `id` that is neither a string nor an integer")]
	InvalidId { index: usize },
	#[error("duplicate id {id} (record {index})")]
	DuplicateId { id: RecordId, index: usize },
	#[error("unknown column `{0}`")]
	UnknownColumn(String),
	#[error("no record has id `{0}`")]
	UnknownId(String),
}

/// Identifier of a record: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
	Integer(i64),
	Text(String),
}

impl RecordId {
	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Number(number) => number.as_i64().map(Self::Integer),
			Value::String(text) => Some(Self::Text(text.clone())),
			_ => None,
		}
	}
}

impl fmt::Display for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Integer(id) => write!(f, "{id}"),
			Self::Text(id) => f.write_str(id),
		}
	}
}

/// Position of a column in [`Dataset::columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldIndex(pub usize);

/// One row of the viewer: an id plus values aligned with the dataset columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	id: RecordId,
	values: Vec<Value>,
}

impl Record {
	pub fn id(&self) -> &RecordId {
		&self.id
	}

	pub fn value(&self, index: FieldIndex) -> Option<&Value> {
		self.values.get(index.0)
	}

	/// JSON object with `id` first, then `columns` in order.
	pub fn to_json(&self, columns: &[String]) -> Value {
		let mut object = Map::new();
		object.insert(
			ID_KEY.to_string(),
			serde_json::to_value(&self.id).unwrap_or(Value::Null),
		);
		for (column, value) in columns.iter().zip(&self.values) {
			object.insert(column.clone(), value.clone());
		}
		Value::Object(object)
	}

	/// Cell texts joined with spaces; what the filter matches against.
	pub fn haystack(&self) -> String {
		self.values
			.iter()
			.map(display_value)
			.filter(|text| !text.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl TableRow for Record {
	type Id = RecordId;
	type Field = FieldIndex;

	fn id(&self) -> RecordId {
		self.id.clone()
	}

	fn field(&self, field: FieldIndex) -> FieldValue<'_> {
		match self.value(field) {
			None | Some(Value::Null) => FieldValue::Empty,
			Some(Value::String(text)) => FieldValue::Text(Cow::Borrowed(text)),
			Some(Value::Bool(flag)) => FieldValue::Bool(*flag),
			Some(Value::Number(number)) => match number.as_i64() {
				Some(integer) => FieldValue::Integer(integer),
				None => number.as_f64().map_or(FieldValue::Empty, FieldValue::Float),
			},
			Some(other) => FieldValue::Text(Cow::Owned(other.to_string())),
		}
	}
}

/// Records plus the column list they are aligned with.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
	columns: Vec<String>,
	records: Vec<Record>,
	suggested_sortable: Option<Vec<String>>,
}

impl Dataset {
	/// Parse a JSON document.
	///
	/// With `columns` set, only those keys are kept, in that order; otherwise
	/// the union of keys is discovered in first-seen order.
	pub fn from_json_str(text: &str, columns: Option<&[String]>) -> Result<Self, RecordError> {
		let document: Value = serde_json::from_str(text)?;
		let Value::Array(items) = document else {
			return Err(RecordError::NotAnArray);
		};

		let mut objects = Vec::with_capacity(items.len());
		for (index, item) in items.into_iter().enumerate() {
			match item {
				Value::Object(object) => objects.push(object),
				_ => return Err(RecordError::NotAnObject { index }),
			}
		}

		let columns = match columns {
			Some(columns) => columns.to_vec(),
			None => discover_columns(&objects),
		};
		Self::from_objects(columns, objects, None)
	}

	fn from_objects(
		columns: Vec<String>,
		objects: Vec<Map<String, Value>>,
		suggested_sortable: Option<Vec<String>>,
	) -> Result<Self, RecordError> {
		let mut seen = HashSet::with_capacity(objects.len());
		let mut records = Vec::with_capacity(objects.len());
		for (index, mut object) in objects.into_iter().enumerate() {
			let raw_id = object
				.remove(ID_KEY)
				.ok_or(RecordError::MissingId { index })?;
			let id = RecordId::from_value(&raw_id).ok_or(RecordError::InvalidId { index })?;
			if !seen.insert(id.clone()) {
				return Err(RecordError::DuplicateId { id, index });
			}

			let values = columns
				.iter()
				.map(|column| object.remove(column).unwrap_or(Value::Null))
				.collect();
			records.push(Record { id, values });
		}

		log::debug!(
			"loaded {} records with columns {:?}",
			records.len(),
			columns
		);
		Ok(Self {
			columns,
			records,
			suggested_sortable,
		})
	}

	/// The users table shown when no file is given.
	pub fn sample() -> Self {
		let document = json!([
			{ "id": 1, "name": "John Doe", "email": "john@example.com", "age": 28, "role": "Admin" },
			{ "id": 2, "name": "Jane Smith", "email": "jane@example.com", "age": 34, "role": "User" },
		]);
		let objects = match document {
			Value::Array(items) => items
				.into_iter()
				.filter_map(|item| match item {
					Value::Object(object) => Some(object),
					_ => None,
				})
				.collect(),
			_ => Vec::new(),
		};
		let columns = ["name", "email", "age", "role"].map(String::from).to_vec();
		let sortable = Some(["name", "age"].map(String::from).to_vec());
		// The literal above always has unique integer ids.
		Self::from_objects(columns, objects, sortable).unwrap_or_else(|_| Self::empty())
	}

	pub fn empty() -> Self {
		Self {
			columns: Vec::new(),
			records: Vec::new(),
			suggested_sortable: None,
		}
	}

	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Columns the data source suggests as sortable, when it has an opinion.
	pub fn suggested_sortable(&self) -> Option<&[String]> {
		self.suggested_sortable.as_deref()
	}

	pub fn column_index(&self, key: &str) -> Result<FieldIndex, RecordError> {
		self.columns
			.iter()
			.position(|column| column == key)
			.map(FieldIndex)
			.ok_or_else(|| RecordError::UnknownColumn(key.to_string()))
	}

	/// Id of the record whose id reads as `text`, so `2` finds both `2` and `"2"`.
	pub fn find_id(&self, text: &str) -> Result<RecordId, RecordError> {
		self.records
			.iter()
			.map(Record::id)
			.find(|id| id.to_string() == text)
			.cloned()
			.ok_or_else(|| RecordError::UnknownId(text.to_string()))
	}

	/// Keep only `columns`, in that order. Unknown keys are an error.
	pub fn restrict(self, columns: &[String]) -> Result<Self, RecordError> {
		let indices = columns
			.iter()
			.map(|key| self.column_index(key).map(|index| index.0))
			.collect::<Result<Vec<_>, _>>()?;
		let records = self
			.records
			.into_iter()
			.map(|record| Record {
				values: indices
					.iter()
					.map(|&index| record.values.get(index).cloned().unwrap_or(Value::Null))
					.collect(),
				id: record.id,
			})
			.collect();
		let suggested_sortable = self.suggested_sortable.map(|keys| {
			keys.into_iter()
				.filter(|key| columns.contains(key))
				.collect()
		});
		Ok(Self {
			columns: columns.to_vec(),
			records,
			suggested_sortable,
		})
	}

	/// Split into the column list and the records.
	pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
		(self.columns, self.records)
	}
}

/// Read and parse a record file.
pub fn load_records(path: &Path, columns: Option<&[String]>) -> Result<Dataset, RecordError> {
	let text = fs::read_to_string(path).map_err(|source| RecordError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	Dataset::from_json_str(&text, columns)
}

/// Title shown for a column key: `first_name` becomes `First name`.
pub fn column_title(key: &str) -> String {
	let spaced = key.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn discover_columns(objects: &[Map<String, Value>]) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut columns = Vec::new();
	for key in objects.iter().flat_map(|object| object.keys()) {
		if key != ID_KEY && seen.insert(key.as_str()) {
			columns.push(key.clone());
		}
	}
	columns
}

fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
