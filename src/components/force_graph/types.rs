/// Style class carried by every projected edge; the renderer keeps its label
/// aligned with the edge direction.
pub const AUTOROTATE_CLASS: &str = "autorotate";

/// A node as the canvas sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
	/// Vertex gid.
	pub id: String,
}

/// A directed edge as the canvas sees it. `source`/`target` may name nodes
/// that are not in the set; such edges are kept but drawn detached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementEdge {
	/// Edge gid.
	pub id: String,
	/// Text drawn along the edge.
	pub label: String,
	/// gid of the tail vertex.
	pub source: String,
	/// gid of the head vertex.
	pub target: String,
	/// Renderer style class.
	pub style_class: String,
}

/// Everything the canvas needs to build a scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSet {
	/// Nodes in document order.
	pub nodes: Vec<ElementNode>,
	/// Edges in document order.
	pub edges: Vec<ElementEdge>,
}

/// Which kind of element a tap landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// A vertex.
	Node,
	/// An edge.
	Edge,
}
