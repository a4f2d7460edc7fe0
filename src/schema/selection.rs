//! Map a tapped element back to the record behind it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use super::types::{SchemaDocument, SelectionRecord};
use crate::components::force_graph::ElementKind;

/// Position of the first record of `kind` whose gid is `id`.
pub fn position(kind: ElementKind, id: &str, doc: &SchemaDocument) -> Option<usize> {
	match kind {
		ElementKind::Node => doc.vertices.iter().position(|v| v.gid() == id),
		ElementKind::Edge => doc.edges.iter().position(|e| e.gid() == id),
	}
}

/// Record at `index`, or empty if the index is out of range.
pub fn record_at(kind: ElementKind, index: usize, doc: &SchemaDocument) -> SelectionRecord<'_> {
	match kind {
		ElementKind::Node => doc
			.vertices
			.get(index)
			.map_or(SelectionRecord::Empty, SelectionRecord::Vertex),
		ElementKind::Edge => doc
			.edges
			.get(index)
			.map_or(SelectionRecord::Empty, SelectionRecord::Edge),
	}
}

/// Look up the record for a tapped element. Unknown ids resolve to
/// [`SelectionRecord::Empty`].
pub fn resolve<'a>(kind: ElementKind, id: &str, doc: &'a SchemaDocument) -> SelectionRecord<'a> {
	position(kind, id, doc).map_or(SelectionRecord::Empty, |index| record_at(kind, index, doc))
}
