//! Read-only tree view of the selected schema record.
//!
//! Fields render in the order the backend sent them. There is no clipboard
//! button and no type annotations; the root object has no name.

#[cfg(test)]
#[path = "inspector_test.rs"]
mod inspector_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::schema::ViewState;

/// Text for a leaf value, as JSON (strings quoted and escaped).
fn scalar_text(value: &Value) -> String {
	value.to_string()
}

/// Item count shown next to a collapsed container.
fn size_label(len: usize) -> String {
	match len {
		1 => "1 item".to_owned(),
		n => format!("{n} items"),
	}
}

fn json_node(key: Option<String>, value: Value) -> AnyView {
	let key_view = key.map(|k| view! { <span class="json-key">{k}": "</span> });
	let (open, close, entries): (&'static str, &'static str, Vec<(String, Value)>) = match value {
		Value::Object(map) => ("{", "}", map.into_iter().collect()),
		Value::Array(items) => (
			"[",
			"]",
			items
				.into_iter()
				.enumerate()
				.map(|(i, v)| (i.to_string(), v))
				.collect(),
		),
		scalar => {
			return view! {
				<div class="json-leaf">{key_view}<span class="json-value">{scalar_text(&scalar)}</span></div>
			}
			.into_any();
		}
	};
	let size = size_label(entries.len());
	let children = entries
		.into_iter()
		.map(|(k, v)| json_node(Some(k), v))
		.collect_view();
	view! {
		<details class="json-node" open=true>
			<summary>{key_view}{open}" "<span class="json-size">{size}</span></summary>
			<div class="json-children" style="padding-left: 1.5em;">{children}</div>
			<div>{close}</div>
		</details>
	}
	.into_any()
}

/// Inspector panel for the current selection.
#[component]
pub fn Inspector(view_state: RwSignal<ViewState>, #[prop(into)] width: String) -> impl IntoView {
	let record = move || view_state.with(|s| s.selection().to_value());

	view! {
		<div
			id="inspector"
			style=format!("width: {width}; margin: 5px auto; font-family: monospace;")
		>
			{move || json_node(None, record())}
		</div>
	}
}
