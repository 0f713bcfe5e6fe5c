//! Export module for dumping a graph's structure to external tools.
//!
//! Supports:
//! - **JSON**: mapping from each node to its sorted direct out-set
//! - **DOT**: Graphviz visualization

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{adjacency_map, export_json};
