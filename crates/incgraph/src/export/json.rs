//! JSON export of the adjacency structure.
//!
//! The document is an object keyed by node name whose values are the sorted
//! names of that node's direct out-set. Keys are sorted too, so the output is
//! stable across runs.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::hash::Hash;

/// Map every node name to the sorted names of its direct out-set.
///
/// Nodes without outgoing edges map to an empty list.
pub fn adjacency_map<N>(graph: &Graph<N>) -> BTreeMap<String, Vec<String>>
where
    N: Hash + Eq + Display,
{
    graph
        .nodes()
        .map(|node| {
            let mut targets: Vec<String> = graph.edges_of(node).map(ToString::to_string).collect();
            targets.sort();
            (node.to_string(), targets)
        })
        .collect()
}

/// Export the adjacency map as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn export_json<N>(graph: &Graph<N>) -> Result<String>
where
    N: Hash + Eq + Display,
{
    serde_json::to_string_pretty(graph)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

impl<N> Serialize for Graph<N>
where
    N: Hash + Eq + Display,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let adjacency = adjacency_map(self);
        let mut map = serializer.serialize_map(Some(adjacency.len()))?;
        for (node, targets) in &adjacency {
            map.serialize_entry(node, targets)?;
        }
        map.end()
    }
}
