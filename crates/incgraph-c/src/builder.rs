//! Dependency tree builder
//!
//! Walks a source tree, turns every matching file into a [`FileRecord`] and
//! links the records into an include graph.

use crate::config::ScanConfig;
use crate::error::{ResolveError, Result};
use crate::record::{base_name, FileRecord};
use incgraph::Graph;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

/// Scan `root` and build its include graph.
///
/// With `reverse` set, the returned graph is the "included-by" graph: an edge
/// `A -> B` then means B includes A.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidRoot`] if `root` is not a directory and
/// [`ResolveError::InvalidConfig`] if `config` fails validation. Problems with
/// individual files below the root are logged and skipped.
pub fn build_graph(root: &Path, config: &ScanConfig, reverse: bool) -> Result<Graph<FileRecord>> {
    let start = Instant::now();
    let records = collect_records(root, config)?;
    let graph = link_records(records)?;

    info!(
        "Built include graph for {}: {} files, {} includes in {:?}",
        root.display(),
        graph.node_count(),
        graph.edge_count(),
        start.elapsed()
    );

    Ok(if reverse { graph.reverse() } else { graph })
}

/// Read every scannable file under `root`, one record per distinct base name.
///
/// The walk is sorted by file name; when two files share a base name the
/// first one walked wins.
///
/// # Errors
///
/// Same as [`build_graph`].
pub fn collect_records(root: &Path, config: &ScanConfig) -> Result<Vec<FileRecord>> {
    config.validate()?;
    if !root.is_dir() {
        return Err(ResolveError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut records: Vec<FileRecord> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for entry in WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never prune the root itself
            if e.depth() > 0 && e.file_type().is_dir() {
                if let Some(name) = e.file_name().to_str() {
                    return !config.should_exclude_dir(name);
                }
            }
            true
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !config.should_scan_file(path) {
            continue;
        }

        let name = base_name(path);
        if let Some(&first) = seen.get(&name) {
            let kept = records[first].path().unwrap_or_default();
            debug!(
                "Ignoring {}: base name already taken by {}",
                path.display(),
                kept.display()
            );
            continue;
        }

        seen.insert(name, records.len());
        records.push(FileRecord::read(path, config.max_file_size));
    }

    debug!("Collected {} files under {}", records.len(), root.display());
    Ok(records)
}

/// Link records into a graph: one node per record, one bare node per include
/// target that isn't a record, one edge per include.
///
/// # Errors
///
/// Returns [`GraphError::DuplicateNode`](incgraph::GraphError::DuplicateNode)
/// if two records share a base name.
pub fn link_records<I>(records: I) -> Result<Graph<FileRecord>>
where
    I: IntoIterator<Item = FileRecord>,
{
    let mut graph = Graph::new();
    let mut edges: Vec<(String, String)> = Vec::new();

    for record in records {
        edges.extend(
            record
                .includes()
                .iter()
                .map(|target| (record.name().to_string(), target.clone())),
        );
        graph.add_node(record)?;
    }

    for (source, target) in &edges {
        if !graph.contains(target.as_str()) {
            debug!("{target} not found in tree, adding as bare node");
            graph.add_node(FileRecord::bare(target.as_str()))?;
        }
        graph.connect(source.as_str(), target.as_str())?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn record(name: &str, includes: &[&str]) -> FileRecord {
        FileRecord::new(
            name,
            Some(PathBuf::from("src")),
            includes.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        )
    }

    #[test]
    fn test_link_records_adds_bare_nodes() {
        let graph = link_records([
            record("main.c", &["util.h", "stdio.h"]),
            record("util.h", &["sys/types.h"]),
        ])
        .unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge("main.c", "util.h"));
        assert!(graph.has_edge("util.h", "sys/types.h"));

        let stdio = graph.get("stdio.h").unwrap();
        assert!(stdio.is_bare());
        assert!(!graph.get("util.h").unwrap().is_bare());
    }

    #[test]
    fn test_link_records_allows_self_include() {
        let graph = link_records([record("loop.h", &["loop.h"])]).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert!(graph.has_edge("loop.h", "loop.h"));
    }

    #[test]
    fn test_link_records_rejects_duplicate_names() {
        let err = link_records([record("a.h", &[]), record("a.h", &[])]).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Graph(incgraph::GraphError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn test_shared_target_becomes_one_bare_node() {
        let graph = link_records([
            record("a.c", &["stdio.h"]),
            record("b.c", &["stdio.h"]),
        ])
        .unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges_of("stdio.h").len(), 0);
    }

    #[test]
    fn test_invalid_root() {
        let err = collect_records(Path::new("/no/such/dir"), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidRoot { .. }));
    }

    #[test]
    fn test_invalid_config_rejected_before_walk() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig::default().with_max_file_size(0);
        assert!(matches!(
            collect_records(dir.path(), &config),
            Err(ResolveError::InvalidConfig(_))
        ));
    }
}
