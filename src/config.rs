//! Viewer configuration from the host page.
//!
//! The page embeds the viewer into `<div id="schema-viewer">` and passes
//! settings as `data-*` attributes:
//!
//! | attribute           | meaning                               | default  |
//! |---------------------|---------------------------------------|----------|
//! | `data-defaultgraph` | graph loaded at startup               | none     |
//! | `data-width`        | CSS width of canvas and inspector     | `90%`    |
//! | `data-height`       | CSS height of the canvas              | `600px`  |
//! | `data-api-base`     | prefix for `/v1/graph` requests       | same origin |
//! | `data-layout`       | `force` or `circle`                   | `force`  |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::warn;
use wasm_bindgen::JsCast;

/// Id of the element whose dataset holds the configuration.
pub const MOUNT_ID: &str = "schema-viewer";

/// How nodes are placed on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
	/// Live force-directed simulation.
	#[default]
	Force,
	/// Nodes pinned evenly on a ring.
	Circle,
}

impl Layout {
	/// Parse a layout name; unknown names fall back to [`Layout::Force`].
	pub fn from_name(name: &str) -> Self {
		match name.trim().to_ascii_lowercase().as_str() {
			"" | "force" | "cose" => Self::Force,
			"circle" => Self::Circle,
			other => {
				warn!("unknown layout {other:?}, using force");
				Self::Force
			}
		}
	}
}

/// Startup settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
	/// Graph selected at mount, empty for none.
	pub default_graph: String,
	/// CSS width of the canvas and inspector.
	pub width: String,
	/// CSS height of the canvas.
	pub height: String,
	/// Prefix for backend requests.
	pub api_base: String,
	/// Node placement.
	pub layout: Layout,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			default_graph: String::new(),
			width: "90%".to_owned(),
			height: "600px".to_owned(),
			api_base: String::new(),
			layout: Layout::Force,
		}
	}
}

impl ViewerConfig {
	/// Build from a dataset lookup keyed by camel-cased attribute name
	/// (`defaultgraph`, `width`, `height`, `apiBase`, `layout`). Blank values
	/// count as missing.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let get = |key: &str| {
			lookup(key)
				.map(|v| v.trim().to_owned())
				.filter(|v| !v.is_empty())
		};
		let defaults = Self::default();
		Self {
			default_graph: get("defaultgraph").unwrap_or(defaults.default_graph),
			width: get("width").unwrap_or(defaults.width),
			height: get("height").unwrap_or(defaults.height),
			api_base: get("apiBase").unwrap_or(defaults.api_base),
			layout: get("layout").map_or(defaults.layout, |name| Layout::from_name(&name)),
		}
	}

	/// Read the dataset of [`MOUNT_ID`]; defaults when it is absent.
	pub fn from_document() -> Self {
		let dataset = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(MOUNT_ID))
			.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
			.map(|el| el.dataset());
		match dataset {
			Some(dataset) => Self::from_lookup(|key| dataset.get(key)),
			None => {
				warn!("#{MOUNT_ID} not found, using default configuration");
				Self::default()
			}
		}
	}
}
