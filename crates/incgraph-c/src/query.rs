//! Queries over an include graph
//!
//! Every query takes a file name, either as it appears in the graph or as a
//! path whose base name does, and answers with sorted file names.

use crate::builder::build_graph;
use crate::config::ScanConfig;
use crate::error::{ResolveError, Result};
use crate::record::{base_name, FileRecord};
use incgraph::Graph;
use log::debug;
use std::cell::OnceCell;
use std::path::Path;

/// Every file reachable from `name` by one or more includes, sorted.
///
/// `name` itself is only listed when an include cycle leads back to it.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownFile`] if `name` isn't in the graph.
pub fn transitive_includes(graph: &Graph<FileRecord>, name: &str) -> Result<Vec<String>> {
    let root = find(graph, name)?;
    let reached = graph.reachable_from(root.name())?;
    Ok(sorted_names(reached.iter()))
}

/// Shortest include chain from `from` to `to`, both ends included.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownFile`] for a name not in the graph and a
/// wrapped [`GraphError::NotConnected`](incgraph::GraphError::NotConnected)
/// when no chain exists.
pub fn include_path(graph: &Graph<FileRecord>, from: &str, to: &str) -> Result<Vec<String>> {
    let source = find(graph, from)?;
    let target = find(graph, to)?;
    let path = graph.path_to(source.name(), target.name())?;
    Ok(path.iter().map(|record| record.name().to_string()).collect())
}

/// Files `name` includes directly, sorted.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownFile`] if `name` isn't in the graph.
pub fn direct_includes(graph: &Graph<FileRecord>, name: &str) -> Result<Vec<String>> {
    let record = find(graph, name)?;
    Ok(sorted_names(graph.edges_of(record.name())))
}

/// Look `name` up as given, then by its base name.
fn find<'g>(graph: &'g Graph<FileRecord>, name: &str) -> Result<&'g FileRecord> {
    if let Some(record) = graph.get(name) {
        return Ok(record);
    }

    let base = base_name(Path::new(name));
    match graph.get(base.as_str()) {
        Some(record) => {
            debug!("Resolved {name} by base name {base}");
            Ok(record)
        }
        None => Err(ResolveError::UnknownFile {
            name: name.to_string(),
        }),
    }
}

fn sorted_names<'a>(records: impl Iterator<Item = &'a FileRecord>) -> Vec<String> {
    let mut names: Vec<String> = records.map(|record| record.name().to_string()).collect();
    names.sort();
    names
}

/// Answers include queries over one scanned tree.
///
/// The tree is scanned once; the reversed ("included-by") graph is built the
/// first time a reverse query needs it.
///
/// # Example
///
/// ```
/// use incgraph_c::{FileRecord, Resolver};
/// use incgraph_c::builder::link_records;
///
/// # fn main() -> incgraph_c::Result<()> {
/// let graph = link_records([
///     FileRecord::from_source("a.c", None, "#include \"util.h\""),
///     FileRecord::from_source("b.c", None, "#include <util.h>"),
///     FileRecord::from_source("util.h", None, "#include <stdio.h>"),
/// ])?;
/// let resolver = Resolver::from_graph(graph);
///
/// assert_eq!(resolver.resolve_transitive("a.c", false)?, vec!["stdio.h", "util.h"]);
/// assert_eq!(resolver.resolve_transitive("util.h", true)?, vec!["a.c", "b.c"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Resolver {
    graph: Graph<FileRecord>,
    included_by: OnceCell<Graph<FileRecord>>,
}

impl Resolver {
    /// Scan `root` and keep its include graph.
    ///
    /// # Errors
    ///
    /// Same as [`build_graph`].
    pub fn scan(root: &Path, config: &ScanConfig) -> Result<Self> {
        Ok(Self::from_graph(build_graph(root, config, false)?))
    }

    /// Answer queries over an already built graph.
    pub fn from_graph(graph: Graph<FileRecord>) -> Self {
        Self {
            graph,
            included_by: OnceCell::new(),
        }
    }

    /// The include graph: `A -> B` when A includes B.
    pub fn graph(&self) -> &Graph<FileRecord> {
        &self.graph
    }

    /// The included-by graph: `A -> B` when B includes A.
    pub fn included_by(&self) -> &Graph<FileRecord> {
        self.included_by.get_or_init(|| self.graph.reverse())
    }

    /// The include graph, or the included-by graph when `reverse` is set.
    pub fn oriented(&self, reverse: bool) -> &Graph<FileRecord> {
        if reverse {
            self.included_by()
        } else {
            &self.graph
        }
    }

    /// Everything `name` transitively includes, or with `reverse` everything
    /// that transitively includes `name`.
    ///
    /// # Errors
    ///
    /// See [`transitive_includes`].
    pub fn resolve_transitive(&self, name: &str, reverse: bool) -> Result<Vec<String>> {
        transitive_includes(self.oriented(reverse), name)
    }

    /// Shortest include chain from `from` to `to`.
    ///
    /// # Errors
    ///
    /// See [`include_path`].
    pub fn resolve_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        include_path(&self.graph, from, to)
    }

    /// Files `name` includes directly.
    ///
    /// # Errors
    ///
    /// See [`direct_includes`].
    pub fn resolve_direct(&self, name: &str) -> Result<Vec<String>> {
        direct_includes(&self.graph, name)
    }
}
