use super::*;

#[test]
fn keeps_only_suffixed_entries_in_order() {
	let raw = ["A__schema__", "B", "C__schema__"];
	assert_eq!(filter_schema_graphs(&raw), ["A", "C"]);
}

#[test]
fn strips_only_the_trailing_marker() {
	let raw = ["x__schema__y__schema__", "__schema__z"];
	assert_eq!(filter_schema_graphs(&raw), ["x__schema__y"]);
}

#[test]
fn bare_marker_is_dropped() {
	let raw = vec!["__schema__".to_owned(), "people__schema__".to_owned()];
	assert_eq!(filter_schema_graphs(&raw), ["people"]);
}

#[test]
fn empty_listing_gives_empty_catalog() {
	let raw: [&str; 0] = [];
	assert!(filter_schema_graphs(&raw).is_empty());
}

#[test]
fn catalog_endpoint_joins_base() {
	assert_eq!(catalog_endpoint(""), "/v1/graph");
	assert_eq!(catalog_endpoint("http://localhost:8201/"), "http://localhost:8201/v1/graph");
}

#[test]
fn listing_response_decodes() {
	let body: CatalogResponse =
		serde_json::from_str(r#"{"graphs": ["a__schema__", "a"]}"#).unwrap();
	assert_eq!(filter_schema_graphs(&body.graphs), ["a"]);
}
