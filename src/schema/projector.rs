//! Schema document to canvas elements.

#[cfg(test)]
#[path = "projector_test.rs"]
mod projector_test;

use super::types::SchemaDocument;
use crate::components::force_graph::{AUTOROTATE_CLASS, ElementEdge, ElementNode, ElementSet};

/// Project `doc` into the element set the canvas consumes.
///
/// Order is preserved on both sides and the output depends on nothing but
/// `doc`, so two projections of equal documents compare equal. Edges whose
/// endpoints are not vertices are projected anyway.
pub fn project(doc: &SchemaDocument) -> ElementSet {
	let nodes = doc
		.vertices
		.iter()
		.map(|v| ElementNode {
			id: v.gid().to_owned(),
		})
		.collect();
	let edges = doc
		.edges
		.iter()
		.map(|e| ElementEdge {
			id: e.gid().to_owned(),
			label: e.label().to_owned(),
			source: e.from().to_owned(),
			target: e.to().to_owned(),
			style_class: AUTOROTATE_CLASS.to_owned(),
		})
		.collect();
	ElementSet { nodes, edges }
}
