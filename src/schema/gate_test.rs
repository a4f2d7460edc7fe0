use super::*;
use crate::components::force_graph::{ElementEdge, ElementNode};

fn sample() -> ElementSet {
	ElementSet {
		nodes: vec![
			ElementNode { id: "a".to_owned() },
			ElementNode { id: "b".to_owned() },
		],
		edges: vec![ElementEdge {
			id: "e".to_owned(),
			label: "rel".to_owned(),
			source: "a".to_owned(),
			target: "b".to_owned(),
			style_class: "autorotate".to_owned(),
		}],
	}
}

#[test]
fn equal_sets_do_not_rebuild() {
	let x = sample();
	assert!(!should_rebuild("g", &x, Some(&x)));
	assert!(!should_rebuild("g", &x, Some(&sample())));
}

#[test]
fn nothing_applied_rebuilds() {
	assert!(should_rebuild("g", &sample(), None));
	assert!(should_rebuild("g", &ElementSet::default(), None));
}

#[test]
fn any_field_change_rebuilds() {
	let base = sample();

	let mut relabeled = sample();
	relabeled.edges[0].label = "other".to_owned();
	assert!(should_rebuild("g", &relabeled, Some(&base)));

	let mut restyled = sample();
	restyled.edges[0].style_class = String::new();
	assert!(should_rebuild("g", &restyled, Some(&base)));

	let mut reordered = sample();
	reordered.nodes.reverse();
	assert!(should_rebuild("g", &reordered, Some(&base)));
}

#[test]
fn no_graph_never_rebuilds() {
	assert!(!should_rebuild("", &sample(), None));
	assert!(!should_rebuild("", &sample(), Some(&ElementSet::default())));
}
