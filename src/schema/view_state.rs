//! Session state for the viewer.
//!
//! DESIGN
//! ======
//! One owned value holds everything; every mutation goes through a method
//! here and the pure transforms (projection, rebuild gate, resolution) are
//! called from those methods only. The element set is recomputed whenever the
//! document changes and is never touched otherwise.
//!
//! Loads are asynchronous, so each one gets a [`LoadTicket`]. A response is
//! applied only if its ticket is still the newest one; anything older is
//! dropped.

#[cfg(test)]
#[path = "view_state_test.rs"]
mod view_state_test;

use log::{debug, error, info, warn};

use super::gate::should_rebuild;
use super::projector::project;
use super::selection::{position, record_at};
use super::types::{SchemaDocument, SelectionRecord};
use crate::components::force_graph::{ElementKind, ElementSet};
use crate::error::ViewerError;

/// Where the graph-selection lifecycle currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
	/// No graph picked.
	#[default]
	Unselected,
	/// Schema request in flight.
	Loading,
	/// Schema loaded and projected.
	Ready,
	/// The last catalog or schema request failed.
	Error,
}

/// Proof that a schema request was started for a particular selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
	graph: String,
	generation: u64,
}

impl LoadTicket {
	/// Graph the request is for.
	pub fn graph(&self) -> &str {
		&self.graph
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Selected {
	kind: ElementKind,
	index: usize,
}

/// Everything the viewer knows during a session.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
	graph: String,
	catalog: Vec<String>,
	catalog_loaded: bool,
	schema: Option<SchemaDocument>,
	elements: ElementSet,
	last_applied: Option<ElementSet>,
	selected: Option<Selected>,
	error: String,
	phase: LoadPhase,
	generation: u64,
}

impl ViewState {
	/// Fresh state with `default_graph` preselected (may be empty).
	pub fn new(default_graph: impl Into<String>) -> Self {
		Self {
			graph: default_graph.into(),
			..Self::default()
		}
	}

	/// Selected graph name, empty when none.
	pub fn graph(&self) -> &str {
		&self.graph
	}

	/// Selectable graph names.
	pub fn catalog(&self) -> &[String] {
		&self.catalog
	}

	/// Current schema document, if one is loaded.
	pub fn schema(&self) -> Option<&SchemaDocument> {
		self.schema.as_ref()
	}

	/// Projection of the current document.
	pub fn elements(&self) -> &ElementSet {
		&self.elements
	}

	/// Elements the canvas engine was last built from.
	pub fn last_applied(&self) -> Option<&ElementSet> {
		self.last_applied.as_ref()
	}

	/// Banner text, empty when there is no error.
	pub fn error(&self) -> &str {
		&self.error
	}

	/// Lifecycle phase.
	pub fn phase(&self) -> LoadPhase {
		self.phase
	}

	/// Currently selected record.
	pub fn selection(&self) -> SelectionRecord<'_> {
		match (self.selected, &self.schema) {
			(Some(sel), Some(doc)) => record_at(sel.kind, sel.index, doc),
			_ => SelectionRecord::Empty,
		}
	}

	/// Kind and gid of the selected element, for canvas highlighting.
	pub fn selected_element(&self) -> Option<(ElementKind, String)> {
		let kind = self.selected?.kind;
		self.selection().gid().map(|gid| (kind, gid.to_owned()))
	}

	/// Ticket for the preselected graph, if there is one. Used at mount.
	pub fn start_initial_load(&mut self) -> Option<LoadTicket> {
		if self.graph.is_empty() {
			return None;
		}
		let graph = self.graph.clone();
		Some(self.begin_load(graph))
	}

	fn begin_load(&mut self, graph: String) -> LoadTicket {
		self.generation += 1;
		self.phase = LoadPhase::Loading;
		info!("loading schema for {graph} (request {})", self.generation);
		LoadTicket {
			graph,
			generation: self.generation,
		}
	}

	/// Switch to `graph`. Clears the error and the selection before anything
	/// else. Returns a ticket when a schema load should be started.
	pub fn select_graph(&mut self, graph: &str) -> Option<LoadTicket> {
		info!("selected graph: {graph:?}");
		self.graph = graph.to_owned();
		self.error.clear();
		self.selected = None;

		if graph.is_empty() {
			// Invalidate any load still in flight.
			self.generation += 1;
			self.set_schema(None);
			self.phase = LoadPhase::Unselected;
			return None;
		}
		if self.catalog_loaded && !self.catalog.iter().any(|g| g == graph) {
			let err = ViewerError::NotFound {
				graph: graph.to_owned(),
			};
			self.generation += 1;
			self.fail(&err);
			return None;
		}
		Some(self.begin_load(graph.to_owned()))
	}

	/// Apply the catalog listing. A preselected graph that is not listed is
	/// deselected. A failed listing only sets the error; a graph that is
	/// loading or loaded keeps its phase.
	pub fn apply_catalog(&mut self, result: Result<Vec<String>, ViewerError>) {
		let graphs = match result {
			Ok(graphs) => graphs,
			Err(err) => {
				error!("listing graphs failed: {err}");
				self.error = err.user_message();
				if self.phase == LoadPhase::Unselected {
					self.phase = LoadPhase::Error;
				}
				return;
			}
		};
		self.catalog = graphs;
		self.catalog_loaded = true;
		if !self.graph.is_empty() && !self.catalog.iter().any(|g| *g == self.graph) {
			warn!("graph {:?} not found in catalog", self.graph);
			self.select_graph("");
		}
	}

	/// Apply a finished schema load. Returns `false` when the ticket was
	/// superseded and the result was dropped.
	pub fn apply_schema(
		&mut self,
		ticket: &LoadTicket,
		result: Result<SchemaDocument, ViewerError>,
	) -> bool {
		if ticket.generation != self.generation || ticket.graph != self.graph {
			warn!(
				"dropping stale schema response for {} (request {}, current {})",
				ticket.graph, ticket.generation, self.generation
			);
			return false;
		}
		match result {
			Ok(doc) => {
				self.selected = None;
				self.set_schema(Some(doc));
				self.phase = LoadPhase::Ready;
			}
			Err(err) => self.fail(&err),
		}
		true
	}

	fn fail(&mut self, err: &ViewerError) {
		error!("{err}");
		self.error = err.user_message();
		self.selected = None;
		self.set_schema(None);
		self.phase = LoadPhase::Error;
	}

	fn set_schema(&mut self, doc: Option<SchemaDocument>) {
		self.elements = doc.as_ref().map(project).unwrap_or_default();
		self.schema = doc;
	}

	/// Whether the canvas engine has to be rebuilt for the current elements.
	pub fn needs_rebuild(&self) -> bool {
		self.phase == LoadPhase::Ready
			&& should_rebuild(&self.graph, &self.elements, self.last_applied.as_ref())
	}

	/// Record that the engine was just rebuilt from the current elements.
	pub fn mark_applied(&mut self) {
		self.last_applied = Some(self.elements.clone());
	}

	/// Record that the engine was released.
	pub fn mark_released(&mut self) {
		self.last_applied = None;
	}

	/// Handle a tap on a canvas element. Ignored unless [`LoadPhase::Ready`];
	/// ids the document does not know clear the selection.
	pub fn handle_tap(&mut self, kind: ElementKind, id: &str) {
		if self.phase != LoadPhase::Ready {
			debug!("ignoring tap on {id} while {:?}", self.phase);
			return;
		}
		let Some(doc) = &self.schema else {
			return;
		};
		self.selected = position(kind, id, doc).map(|index| Selected { kind, index });
		debug!("tapped {kind:?} {id}: selected = {}", self.selected.is_some());
	}
}
