//! When to tear down and rebuild the canvas engine.
//!
//! Rebuilding reruns the whole layout, so it only happens when the elements
//! actually changed since the last build.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::components::force_graph::ElementSet;

/// True iff a graph is selected and `current` differs structurally from what
/// the engine last built (or nothing was built yet).
pub fn should_rebuild(graph: &str, current: &ElementSet, last_applied: Option<&ElementSet>) -> bool {
	if graph.is_empty() {
		return false;
	}
	last_applied != Some(current)
}
