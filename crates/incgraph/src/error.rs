//! Error types for graph operations.
//!
//! All fallible operations return [`Result<T>`] with the offending node names
//! rendered into the error.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by [`Graph`](crate::Graph) mutation, search and export.
///
/// Nodes are reported through their `Display` form so the error stays
/// independent of the node type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node is already present in the graph
    #[error("Duplicate node: {node_id} already in graph")]
    DuplicateNode {
        /// Name of the node that was added twice
        node_id: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Name of the missing node
        node_id: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {source_id} -> {target_id}")]
    EdgeNotFound {
        /// Source of the missing edge
        source_id: String,
        /// Target of the missing edge
        target_id: String,
    },

    /// No directed path exists between two nodes
    #[error("{source_id} not connected to {target_id}")]
    NotConnected {
        /// Node the search started from
        source_id: String,
        /// Node the search was looking for
        target_id: String,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Whether this error reports a missing node or a missing edge.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. } | Self::EdgeNotFound { .. })
    }
}
