mod component;
mod render;
mod state;
mod style;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{AUTOROTATE_CLASS, ElementEdge, ElementKind, ElementNode, ElementSet};
