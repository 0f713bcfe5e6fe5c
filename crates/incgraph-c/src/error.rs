//! Error types for scanning source trees and resolving include queries.

use incgraph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan and query operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while building or querying an include graph.
///
/// Unreadable source files are not errors: they contribute no includes.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Error from the underlying graph (e.g. two files are not connected)
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Name was neither discovered on disk nor included by any file
    #[error("Unknown file: {name} is neither in the tree nor included by it")]
    UnknownFile {
        /// Name as given by the caller
        name: String,
    },

    /// Scan root is missing or not a directory
    #[error("Invalid scan root {}: not a directory", path.display())]
    InvalidRoot {
        /// Root that was requested
        path: PathBuf,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read a configuration file
    #[error("IO error reading config {}: {source}", path.display())]
    ConfigIo {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl ResolveError {
    /// Whether the error reports two files with no include chain between them.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::Graph(GraphError::NotConnected { .. }))
    }
}
