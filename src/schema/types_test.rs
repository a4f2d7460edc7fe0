use serde_json::json;

use super::*;

#[test]
fn vertex_keeps_extra_fields_in_order() {
	let vertex: VertexRecord = serde_json::from_value(json!({
		"label": "Person",
		"gid": "v1",
		"data": {"name": "STRING"}
	}))
	.unwrap();
	assert_eq!(vertex.gid(), "v1");
	let keys: Vec<&str> = vertex.fields().keys().map(String::as_str).collect();
	assert_eq!(keys, ["label", "gid", "data"]);
}

#[test]
fn vertex_without_gid_is_rejected() {
	let err = serde_json::from_value::<VertexRecord>(json!({"label": "Person"})).unwrap_err();
	assert!(err.to_string().contains("missing field `gid`"));
}

#[test]
fn vertex_with_numeric_gid_is_rejected() {
	assert!(serde_json::from_value::<VertexRecord>(json!({"gid": 7})).is_err());
}

#[test]
fn edge_label_defaults_to_empty() {
	let edge: EdgeRecord =
		serde_json::from_value(json!({"gid": "e1", "from": "a", "to": "b"})).unwrap();
	assert_eq!(edge.label(), "");
	assert_eq!(edge.from(), "a");
	assert_eq!(edge.to(), "b");
}

#[test]
fn edge_requires_endpoints() {
	assert!(serde_json::from_value::<EdgeRecord>(json!({"gid": "e1", "to": "b"})).is_err());
	assert!(serde_json::from_value::<EdgeRecord>(json!({"gid": "e1", "from": "a"})).is_err());
}

#[test]
fn document_serializes_records_verbatim() {
	let raw = json!({
		"vertices": [{"gid": "v1", "label": "Person"}],
		"edges": [{"gid": "e1", "label": "knows", "from": "v1", "to": "v1", "extra": [1, 2]}]
	});
	let doc: SchemaDocument = serde_json::from_value(raw.clone()).unwrap();
	assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
}

#[test]
fn document_requires_both_sequences() {
	assert!(serde_json::from_value::<SchemaDocument>(json!({"vertices": []})).is_err());
}

#[test]
fn empty_selection_displays_as_empty_object() {
	let selection = SelectionRecord::Empty;
	assert!(selection.is_empty());
	assert_eq!(selection.gid(), None);
	assert_eq!(selection.to_value(), json!({}));
}

#[test]
fn selection_exposes_the_record_fields() {
	let vertex: VertexRecord = serde_json::from_value(json!({"gid": "v1", "n": 1})).unwrap();
	let selection = SelectionRecord::Vertex(&vertex);
	assert_eq!(selection.gid(), Some("v1"));
	assert_eq!(selection.to_value(), json!({"gid": "v1", "n": 1}));
}
