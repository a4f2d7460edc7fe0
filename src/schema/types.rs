//! Schema documents as returned by `GET /v1/graph/{name}/schema`.
//!
//! Records keep every field the backend sent, in the order it sent them, so
//! the inspector can show them verbatim. Only the fields the viewer itself
//! relies on are lifted out and validated.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A vertex description. `gid` is required and must be a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct VertexRecord {
	gid: String,
	fields: Map<String, Value>,
}

/// An edge description. `gid`, `from` and `to` are required strings; a
/// missing or non-string `label` reads as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct EdgeRecord {
	gid: String,
	from: String,
	to: String,
	label: String,
	fields: Map<String, Value>,
}

/// A full schema graph. Replaced wholesale on every load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
	/// Vertex records in backend order.
	pub vertices: Vec<VertexRecord>,
	/// Edge records in backend order.
	pub edges: Vec<EdgeRecord>,
}

fn required_str(fields: &Map<String, Value>, key: &str) -> Result<String, String> {
	match fields.get(key) {
		Some(Value::String(s)) => Ok(s.clone()),
		Some(other) => Err(format!("field `{key}` must be a string, got {other}")),
		None => Err(format!("missing field `{key}`")),
	}
}

impl VertexRecord {
	/// Globally unique id within the document's vertices.
	pub fn gid(&self) -> &str {
		&self.gid
	}

	/// Every field as received, `gid` included.
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}
}

impl EdgeRecord {
	/// Globally unique id within the document's edges.
	pub fn gid(&self) -> &str {
		&self.gid
	}

	/// gid of the tail vertex.
	pub fn from(&self) -> &str {
		&self.from
	}

	/// gid of the head vertex.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Display text, possibly empty.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Every field as received.
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}
}

impl TryFrom<Map<String, Value>> for VertexRecord {
	type Error = String;

	fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
		let gid = required_str(&fields, "gid")?;
		Ok(Self { gid, fields })
	}
}

impl TryFrom<Map<String, Value>> for EdgeRecord {
	type Error = String;

	fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
		let gid = required_str(&fields, "gid")?;
		let from = required_str(&fields, "from")?;
		let to = required_str(&fields, "to")?;
		let label = fields
			.get("label")
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_owned();
		Ok(Self {
			gid,
			from,
			to,
			label,
			fields,
		})
	}
}

impl From<VertexRecord> for Map<String, Value> {
	fn from(record: VertexRecord) -> Self {
		record.fields
	}
}

impl From<EdgeRecord> for Map<String, Value> {
	fn from(record: EdgeRecord) -> Self {
		record.fields
	}
}

/// What the inspector shows: nothing, or one record borrowed straight out of
/// the current document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SelectionRecord<'a> {
	/// Nothing selected.
	#[default]
	Empty,
	/// A selected vertex.
	Vertex(&'a VertexRecord),
	/// A selected edge.
	Edge(&'a EdgeRecord),
}

impl SelectionRecord<'_> {
	/// True when nothing is selected.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// gid of the selected record.
	pub fn gid(&self) -> Option<&str> {
		match self {
			Self::Empty => None,
			Self::Vertex(v) => Some(v.gid()),
			Self::Edge(e) => Some(e.gid()),
		}
	}

	/// Fields of the selected record.
	pub fn fields(&self) -> Option<&Map<String, Value>> {
		match self {
			Self::Empty => None,
			Self::Vertex(v) => Some(v.fields()),
			Self::Edge(e) => Some(e.fields()),
		}
	}

	/// JSON object for display; `{}` when nothing is selected.
	pub fn to_value(&self) -> Value {
		Value::Object(self.fields().cloned().unwrap_or_default())
	}
}
