//! Schema-to-visualization synchronization.
//!
//! Fetch a schema graph, project it into canvas elements, decide when the
//! canvas has to be rebuilt and map taps back to schema records.

pub mod catalog;
pub(crate) mod http;
pub mod loader;
pub mod projector;
pub mod gate;
pub mod selection;
pub mod sync;
pub mod types;
pub mod view_state;

pub use crate::components::force_graph::{ElementEdge, ElementKind, ElementNode, ElementSet};
pub use types::{EdgeRecord, SchemaDocument, SelectionRecord, VertexRecord};
pub use view_state::{LoadPhase, LoadTicket, ViewState};
