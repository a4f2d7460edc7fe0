//! Drop-down over the graph catalog.

use leptos::prelude::*;

use crate::schema::{ViewState, sync};

/// Catalog picker. Choosing an entry switches the viewer to that graph.
#[component]
pub fn GraphSelect(view_state: RwSignal<ViewState>, #[prop(into)] api_base: String) -> impl IntoView {
	let graphs = move || view_state.with(|s| s.catalog().to_vec());
	let current = move || view_state.with(|s| s.graph().to_owned());

	let on_change = move |ev: leptos::ev::Event| {
		sync::select_graph(view_state, api_base.clone(), event_target_value(&ev));
	};

	view! {
		<div id="selectGraph">
			<select
				style="width: 15%; height: 2em; font-size: 1.25em; margin: 10px auto; display: block;"
				prop:value=current
				on:change=on_change
			>
				<option value="" disabled=true>
					"Select Graph"
				</option>
				<For
					each=graphs
					key=|graph| graph.clone()
					children=move |graph: String| {
						let label = graph.clone();
						view! { <option value=graph>{label}</option> }
					}
				/>
			</select>
		</div>
	}
}
