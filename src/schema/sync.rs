//! Async glue between the fetchers and the [`ViewState`] signal.
//!
//! Requests run on the browser's single thread via `spawn_local`; their
//! results re-enter the state through the same update methods as user input.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use super::catalog::list_graphs;
use super::loader::load_schema;
use super::view_state::{LoadTicket, ViewState};

fn spawn_load(view_state: RwSignal<ViewState>, api_base: String, ticket: LoadTicket) {
	spawn_local(async move {
		let result = load_schema(&api_base, ticket.graph()).await;
		view_state.update(|s| {
			if !s.apply_schema(&ticket, result) {
				debug!("schema for {} arrived after a newer selection", ticket.graph());
			}
		});
	});
}

/// Mount-time startup: list the catalog and load the preselected graph.
pub fn start(view_state: RwSignal<ViewState>, api_base: String) {
	let mut ticket = None;
	view_state.update(|s| ticket = s.start_initial_load());
	if let Some(ticket) = ticket {
		spawn_load(view_state, api_base.clone(), ticket);
	}

	spawn_local(async move {
		let result = list_graphs(&api_base).await;
		view_state.update(|s| s.apply_catalog(result));
	});
}

/// User picked `graph` from the catalog (empty to deselect).
pub fn select_graph(view_state: RwSignal<ViewState>, api_base: String, graph: String) {
	let mut ticket = None;
	view_state.update(|s| ticket = s.select_graph(&graph));
	if let Some(ticket) = ticket {
		spawn_load(view_state, api_base, ticket);
	}
}
