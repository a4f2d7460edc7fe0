use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::graph_select::GraphSelect;
use crate::components::inspector::Inspector;
use crate::config::ViewerConfig;
use crate::schema::{ViewState, sync};

/// Schema viewer: catalog picker, error banner, canvas and inspector.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let view_state = RwSignal::new(ViewState::new(config.default_graph.clone()));
	sync::start(view_state, config.api_base.clone());

	let error = move || view_state.with(|s| s.error().to_owned());
	let canvas_style = format!(
		"height: {}; width: {}; margin: 5px auto; border: thin solid #d3d3d3;",
		config.height, config.width
	);

	view! {
		<GraphSelect view_state=view_state api_base=config.api_base.clone() />
		<div id="errorMessage">
			<h4 style="color: red; text-align: center;">{error}</h4>
		</div>
		<div id="cy" style=canvas_style>
			<ForceGraphCanvas view_state=view_state layout=config.layout />
		</div>
		<Inspector view_state=view_state width=config.width.clone() />
	}
}
