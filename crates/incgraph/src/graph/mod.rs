//! Core graph type and traversal.
//!
//! This module defines the fundamental building blocks:
//! - [`Graph`]: directed graph with set semantics for nodes and out-sets
//! - [`Neighbors`]: iterator over one node's out-set
//! - [`algorithms`]: the shared frontier expansion behind path search and reachability

mod digraph;
pub mod algorithms;

pub use digraph::{Graph, Neighbors};
