//! Static look of the schema canvas.

pub const BACKGROUND: &str = "#ffffff";

pub const NODE_RADIUS: f64 = 24.0;
pub const NODE_BORDER: f64 = 3.0;
pub const NODE_COLOR: &str = "#bcbcbc";
pub const NODE_SELECTED_COLOR: &str = "#4286f4";
pub const NODE_FONT_PX: f64 = 12.0;
pub const NODE_TEXT_COLOR: &str = "#222222";

pub const EDGE_WIDTH: f64 = 4.0;
pub const EDGE_COLOR: &str = "#ffaaaa";
pub const EDGE_SELECTED_COLOR: &str = "#4286f4";
pub const EDGE_FONT_PX: f64 = 11.0;
pub const EDGE_TEXT_COLOR: &str = "#555555";
pub const ARROW_SIZE: f64 = 12.0;

/// Tap tolerance around an edge, in world units.
pub const EDGE_HIT_SLOP: f64 = 6.0;
/// Pointer travel (screen px) above which a press is a drag, not a tap.
pub const TAP_SLOP: f64 = 4.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
