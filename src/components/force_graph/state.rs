use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::style::{EDGE_HIT_SLOP, EDGE_WIDTH, MAX_ZOOM, MIN_ZOOM, NODE_RADIUS};
use super::types::{AUTOROTATE_CLASS, ElementKind, ElementSet};
use crate::config::Layout;

/// Minimum ring radius for the initial placement.
const MIN_RING: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
}

/// One projected edge. Endpoints missing from the node set stay `None`; the
/// edge exists but has nothing to draw.
#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub id: String,
	pub label: String,
	pub autorotate: bool,
	pub source: Option<DefaultNodeIdx>,
	pub target: Option<DefaultNodeIdx>,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Canvas engine for one element set. Built from scratch on every rebuild and
/// dropped on teardown.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub edges: Vec<EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Screen position of the pending press, cleared once it turns into a drag.
	pub press: Option<(f64, f64)>,
	pub selected: Option<(ElementKind, String)>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

/// Ring placement for node `i` of `n`, centred on the origin.
fn ring_position(i: usize, n: usize) -> (f32, f32) {
	let radius = (n as f64 * NODE_RADIUS * 3.0 / (2.0 * PI)).max(MIN_RING);
	let angle = (i as f64) * 2.0 * PI / n.max(1) as f64;
	((radius * angle.cos()) as f32, (radius * angle.sin()) as f32)
}

/// Distance from `(px, py)` to the segment `(x1, y1)-(x2, y2)`.
pub fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len2 = dx * dx + dy * dy;
	let t = if len2 < f64::EPSILON {
		0.0
	} else {
		(((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0)
	};
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Centre and radius of the loop drawn for a self-edge on a node at `(x, y)`.
pub fn self_loop(x: f64, y: f64) -> (f64, f64, f64) {
	(x, y - NODE_RADIUS * 1.5, NODE_RADIUS * 0.75)
}

impl ForceGraphState {
	pub fn new(elements: &ElementSet, width: f64, height: f64, layout: Layout) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 4000.0,
			force_spring: 0.05,
			force_max: 200.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let pinned = layout == Layout::Circle;
		let mut id_to_idx = HashMap::new();

		let n = elements.nodes.len();
		for (i, node) in elements.nodes.iter().enumerate() {
			let (x, y) = ring_position(i, n);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: pinned,
				user_data: NodeInfo {
					id: node.id.clone(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut edges = Vec::with_capacity(elements.edges.len());
		for edge in &elements.edges {
			let source = id_to_idx.get(&edge.source).copied();
			let target = id_to_idx.get(&edge.target).copied();
			if let (Some(src), Some(tgt)) = (source, target) {
				if src != tgt {
					graph.add_edge(src, tgt, EdgeData::default());
				}
			}
			edges.push(EdgeInfo {
				id: edge.id.clone(),
				label: edge.label.clone(),
				autorotate: edge.style_class == AUTOROTATE_CLASS,
				source,
				target,
			});
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			press: None,
			selected: None,
			width,
			height,
			animation_running: !pinned,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Current world position of every node.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<(DefaultNodeIdx, String)> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < NODE_RADIUS {
				found = Some((node.index(), node.data.user_data.id.clone()));
			}
		});
		found
	}

	/// Index into `edges` of the edge under the pointer.
	pub fn edge_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let positions = self.positions();
		let slop = EDGE_HIT_SLOP + EDGE_WIDTH / 2.0;
		self.edges.iter().rposition(|edge| {
			let (Some(src), Some(tgt)) = (edge.source, edge.target) else {
				return false;
			};
			let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(&src), positions.get(&tgt))
			else {
				return false;
			};
			if src == tgt {
				let (cx, cy, r) = self_loop(x1, y1);
				let d = ((gx - cx).powi(2) + (gy - cy).powi(2)).sqrt();
				(d - r).abs() < slop
			} else {
				segment_distance(gx, gy, x1, y1, x2, y2) < slop
			}
		})
	}

	/// What a tap at screen `(sx, sy)` lands on. Nodes sit above edges.
	pub fn hit_test(&self, sx: f64, sy: f64) -> Option<(ElementKind, String)> {
		if let Some((_, id)) = self.node_at_position(sx, sy) {
			return Some((ElementKind::Node, id));
		}
		self.edge_at_position(sx, sy)
			.map(|i| (ElementKind::Edge, self.edges[i].id.clone()))
	}

	pub fn is_selected(&self, kind: ElementKind, id: &str) -> bool {
		self.selected
			.as_ref()
			.is_some_and(|(k, selected)| *k == kind && selected == id)
	}

	/// Zoom by one wheel notch around screen `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
