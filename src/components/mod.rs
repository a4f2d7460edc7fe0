pub mod force_graph;
pub mod graph_select;
pub mod inspector;
