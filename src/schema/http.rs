//! JSON `GET` against the backend.
//!
//! Real requests go through `gloo-net` and only exist on `wasm32`; native
//! builds (unit tests) get a transport that always reports a network error.

use serde::de::DeserializeOwned;

use crate::error::ViewerError;

/// Join the configured API base with an absolute path. An empty base means
/// same-origin.
pub fn endpoint(base: &str, path: &str) -> String {
	format!("{}{}", base.trim_end_matches('/'), path)
}

/// Fetch `url` and decode the body as `T`.
///
/// A non-success status is reported as a protocol error and wins over any
/// body parse outcome.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ViewerError> {
	let resp = gloo_net::http::Request::get(url)
		.send()
		.await
		.map_err(|e| ViewerError::Network {
			url: url.to_owned(),
			message: e.to_string(),
		})?;
	if !resp.ok() {
		return Err(ViewerError::status(resp.url(), resp.status(), &resp.status_text()));
	}
	resp.json::<T>()
		.await
		.map_err(|e| ViewerError::malformed(url, e))
}

/// Fetch `url` and decode the body as `T`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ViewerError> {
	Err(ViewerError::Network {
		url: url.to_owned(),
		message: "no browser transport on this target".to_owned(),
	})
}
