//! Fetch one graph's schema document.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use log::info;

use super::http;
use super::types::SchemaDocument;
use crate::error::ViewerError;

/// Path of a graph's schema under `base`. The name is percent-encoded as a
/// single path segment.
pub fn schema_endpoint(base: &str, graph: &str) -> String {
	let segment = urlencoding::encode(graph);
	http::endpoint(base, &format!("/v1/graph/{segment}/schema"))
}

/// A 404 from the schema endpoint means the graph does not exist.
fn classify(graph: &str, err: ViewerError) -> ViewerError {
	match err {
		ViewerError::Protocol {
			status: Some(404), ..
		} => ViewerError::NotFound {
			graph: graph.to_owned(),
		},
		other => other,
	}
}

/// Load the schema for `graph`.
///
/// # Errors
///
/// [`ViewerError::NotFound`] on 404, otherwise whatever the transport or
/// decoding reported.
pub async fn load_schema(base: &str, graph: &str) -> Result<SchemaDocument, ViewerError> {
	let url = schema_endpoint(base, graph);
	info!("getting the schema for graph: {graph}");
	let doc: SchemaDocument = http::get_json(&url)
		.await
		.map_err(|err| classify(graph, err))?;
	info!(
		"loaded the schema for graph {graph}: {} vertices, {} edges",
		doc.vertices.len(),
		doc.edges.len()
	);
	Ok(doc)
}
