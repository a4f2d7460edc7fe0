//! Failures surfaced by the catalog and schema fetches.
//!
//! Nothing here is fatal: every variant ends up as a single message string in
//! the view state and the rest of the UI keeps running.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse classification of a [`ViewerError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	/// The request never completed.
	Network,
	/// The server answered with a non-success status or an unreadable body.
	Protocol,
	/// The requested graph does not exist.
	NotFound,
}

/// Error returned by [`crate::schema::catalog`] and [`crate::schema::loader`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
	/// Transport failure before any response arrived.
	#[error("GET {url} failed: {message}")]
	Network {
		/// Requested URL.
		url: String,
		/// Transport error text.
		message: String,
	},
	/// Bad status or malformed payload.
	#[error("GET {url} {reason}")]
	Protocol {
		/// Requested URL.
		url: String,
		/// HTTP status, when the server answered with a non-success one.
		status: Option<u16>,
		/// Status line or parse error.
		reason: String,
	},
	/// Graph absent from the catalog or from the backend.
	#[error("graph {graph:?} not found")]
	NotFound {
		/// Graph name that was asked for.
		graph: String,
	},
}

impl ViewerError {
	/// Non-success HTTP status, formatted like a status line.
	pub fn status(url: impl Into<String>, status: u16, status_text: &str) -> Self {
		let reason = if status_text.is_empty() {
			status.to_string()
		} else {
			format!("{status} {status_text}")
		};
		Self::Protocol {
			url: url.into(),
			status: Some(status),
			reason,
		}
	}

	/// Body that could not be decoded into the expected shape.
	pub fn malformed(url: impl Into<String>, detail: impl std::fmt::Display) -> Self {
		Self::Protocol {
			url: url.into(),
			status: None,
			reason: format!("returned a malformed body: {detail}"),
		}
	}

	/// Which of the three error families this belongs to.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Network { .. } => ErrorKind::Network,
			Self::Protocol { .. } => ErrorKind::Protocol,
			Self::NotFound { .. } => ErrorKind::NotFound,
		}
	}

	/// Text shown in the error banner.
	pub fn user_message(&self) -> String {
		format!("ERROR: {self}")
	}
}
