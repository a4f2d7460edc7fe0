//! Graph catalog: which schema graphs can be picked.
//!
//! The backend lists every graph it hosts; schema graphs are the ones whose
//! name carries [`SCHEMA_SUFFIX`]. The suffix is stripped for display and for
//! building schema URLs.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use log::info;
use serde::Deserialize;

use super::http;
use crate::error::ViewerError;

/// Marker that flags a catalog entry as a schema graph.
pub const SCHEMA_SUFFIX: &str = "__schema__";

#[derive(Debug, Deserialize)]
struct CatalogResponse {
	graphs: Vec<String>,
}

/// Path of the catalog listing under `base`.
pub fn catalog_endpoint(base: &str) -> String {
	http::endpoint(base, "/v1/graph")
}

/// Keep schema graphs, strip the marker, preserve order. An entry that is
/// nothing but the marker has no name and is dropped.
pub fn filter_schema_graphs<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
	raw.iter()
		.filter_map(|entry| entry.as_ref().strip_suffix(SCHEMA_SUFFIX))
		.filter(|name| !name.is_empty())
		.map(str::to_owned)
		.collect()
}

/// List the selectable graph names.
///
/// # Errors
///
/// [`ViewerError::Network`] if the request fails, [`ViewerError::Protocol`]
/// on a bad status or body.
pub async fn list_graphs(base: &str) -> Result<Vec<String>, ViewerError> {
	let url = catalog_endpoint(base);
	info!("listing graphs from {url}");
	let body: CatalogResponse = http::get_json(&url).await?;
	let graphs = filter_schema_graphs(&body.graphs);
	info!("found graphs: {graphs:?}");
	Ok(graphs)
}
