use super::*;
use crate::components::force_graph::{ElementEdge, ElementNode};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn edge(id: &str, source: &str, target: &str) -> ElementEdge {
	ElementEdge {
		id: id.to_owned(),
		label: id.to_owned(),
		source: source.to_owned(),
		target: target.to_owned(),
		style_class: AUTOROTATE_CLASS.to_owned(),
	}
}

fn pair() -> ElementSet {
	ElementSet {
		nodes: vec![
			ElementNode { id: "a".to_owned() },
			ElementNode { id: "b".to_owned() },
		],
		edges: vec![edge("ab", "a", "b")],
	}
}

/// Screen position of a world point under the initial transform.
fn screen(x: f64, y: f64) -> (f64, f64) {
	(x + W / 2.0, y + H / 2.0)
}

#[test]
fn circle_layout_pins_nodes_on_a_ring() {
	let state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	assert!(!state.animation_running);
	let mut pinned = 0;
	state.graph.visit_nodes(|node| {
		assert!(node.data.is_anchor);
		pinned += 1;
	});
	assert_eq!(pinned, 2);
}

#[test]
fn force_layout_runs_the_simulation() {
	let state = ForceGraphState::new(&pair(), W, H, Layout::Force);
	assert!(state.animation_running);
}

#[test]
fn tap_on_node_hits_the_node() {
	let state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	// Node "a" sits at (MIN_RING, 0), node "b" at (-MIN_RING, 0).
	let (sx, sy) = screen(MIN_RING, 0.0);
	assert_eq!(state.hit_test(sx, sy), Some((ElementKind::Node, "a".to_owned())));
	let (sx, sy) = screen(-MIN_RING + 3.0, 2.0);
	assert_eq!(state.hit_test(sx, sy), Some((ElementKind::Node, "b".to_owned())));
}

#[test]
fn tap_on_edge_midpoint_hits_the_edge() {
	let state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	let (sx, sy) = screen(0.0, 1.0);
	assert_eq!(state.hit_test(sx, sy), Some((ElementKind::Edge, "ab".to_owned())));
}

#[test]
fn tap_on_empty_space_hits_nothing() {
	let state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	let (sx, sy) = screen(0.0, 60.0);
	assert_eq!(state.hit_test(sx, sy), None);
}

#[test]
fn dangling_edge_is_kept_but_not_hit() {
	let mut elements = pair();
	elements.edges.push(edge("ghost", "a", "nowhere"));
	let state = ForceGraphState::new(&elements, W, H, Layout::Circle);
	assert_eq!(state.edges.len(), 2);
	assert!(state.edges[1].source.is_some());
	assert!(state.edges[1].target.is_none());
	let (sx, sy) = screen(0.0, 1.0);
	assert_eq!(state.hit_test(sx, sy), Some((ElementKind::Edge, "ab".to_owned())));
}

#[test]
fn self_loop_is_hit_on_its_ring() {
	let elements = ElementSet {
		nodes: vec![ElementNode { id: "a".to_owned() }],
		edges: vec![edge("aa", "a", "a")],
	};
	let state = ForceGraphState::new(&elements, W, H, Layout::Circle);
	let (cx, cy, r) = self_loop(MIN_RING, 0.0);
	let (sx, sy) = screen(cx, cy - r);
	assert_eq!(state.hit_test(sx, sy), Some((ElementKind::Edge, "aa".to_owned())));
}

#[test]
fn selection_matches_kind_and_id() {
	let mut state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	state.selected = Some((ElementKind::Edge, "ab".to_owned()));
	assert!(state.is_selected(ElementKind::Edge, "ab"));
	assert!(!state.is_selected(ElementKind::Node, "ab"));
	assert!(!state.is_selected(ElementKind::Edge, "a"));
}

#[test]
fn zoom_is_clamped() {
	let mut state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	for _ in 0..100 {
		state.zoom_at(0.0, 0.0, -1.0);
	}
	assert!((state.transform.k - MAX_ZOOM).abs() < 1e-9);
	for _ in 0..200 {
		state.zoom_at(0.0, 0.0, 1.0);
	}
	assert!((state.transform.k - MIN_ZOOM).abs() < 1e-9);
}

#[test]
fn zoom_keeps_the_pointer_fixed() {
	let mut state = ForceGraphState::new(&pair(), W, H, Layout::Circle);
	let before = state.screen_to_graph(500.0, 200.0);
	state.zoom_at(500.0, 200.0, -1.0);
	let after = state.screen_to_graph(500.0, 200.0);
	assert!((before.0 - after.0).abs() < 1e-9);
	assert!((before.1 - after.1).abs() < 1e-9);
}

#[test]
fn segment_distance_clamps_to_endpoints() {
	assert!((segment_distance(0.0, 5.0, -10.0, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-9);
	assert!((segment_distance(13.0, 4.0, 0.0, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-9);
	assert!((segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0) - 5.0).abs() < 1e-9);
}
