//! # incgraph
//!
//! A small directed graph for dependency analysis: a set of nodes, a set of
//! out-edges per node, breadth-first shortest paths and reachability.
//!
//! ## Core Principles
//!
//! - **Set semantics**: no duplicate nodes, no parallel edges
//! - **Explicit failures**: duplicate nodes, missing nodes or edges and
//!   unreachable targets are all reported as [`GraphError`]
//! - **Any identity**: nodes are any `Hash + Eq` type; lookups accept a
//!   borrowed form of the node
//!
//! ## Example
//!
//! ```rust
//! use incgraph::{Graph, GraphError};
//!
//! # fn main() -> incgraph::Result<()> {
//! let mut graph: Graph<&str> = ["main.c", "util.h", "types.h"].into_iter().collect();
//! graph.connect("main.c", "util.h")?;
//! graph.connect("util.h", "types.h")?;
//!
//! assert_eq!(graph.path_to("main.c", "types.h")?, vec!["main.c", "util.h", "types.h"]);
//!
//! // Who includes types.h?
//! let included_by = graph.reverse();
//! assert!(matches!(
//!     included_by.path_to("main.c", "types.h"),
//!     Err(GraphError::NotConnected { .. })
//! ));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{Graph, Neighbors};
