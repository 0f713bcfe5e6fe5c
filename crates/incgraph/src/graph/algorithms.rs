//! Graph traversal algorithms.
//!
//! Path search and reachability both run on [`expand_frontier`], a layered
//! breadth-first expansion that records a predecessor for every node it
//! discovers and can stop early on a caller-supplied condition.

use super::Graph;
use crate::error::{GraphError, Result};
use log::trace;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// Outcome of one [`expand_frontier`] run.
#[derive(Debug)]
pub struct Expansion<'g, N> {
    /// Predecessor of every discovered node: `{node: previous}`.
    pub backtrace: HashMap<&'g N, &'g N>,
    /// Every node discovered so far. The start node only appears here when a
    /// cycle leads back to it.
    pub discovered: HashSet<&'g N>,
    /// The node that satisfied the stop condition, if expansion stopped early.
    pub stopped_at: Option<&'g N>,
    /// Number of layers expanded.
    pub depth: usize,
}

/// Breadth-first layered expansion from `start`.
///
/// Each round computes the next frontier: every not-yet-discovered node one
/// hop away from the current frontier. Expansion ends as soon as `stop`
/// returns `true` for a newly discovered node, or when a round discovers
/// nothing new.
///
/// Pass `|_| false` to collect everything reachable from `start`.
pub fn expand_frontier<'g, N, F>(graph: &'g Graph<N>, start: &'g N, mut stop: F) -> Expansion<'g, N>
where
    N: Hash + Eq,
    F: FnMut(&N) -> bool,
{
    let mut backtrace = HashMap::new();
    let mut discovered = HashSet::new();
    let mut frontier = vec![start];
    let mut depth = 0;

    while !frontier.is_empty() {
        depth += 1;
        let mut next_frontier = Vec::new();

        for &node in &frontier {
            for next in graph.edges_of(node) {
                if !discovered.insert(next) {
                    continue;
                }
                backtrace.insert(next, node);
                next_frontier.push(next);

                if stop(next) {
                    return Expansion {
                        backtrace,
                        discovered,
                        stopped_at: Some(next),
                        depth,
                    };
                }
            }
        }

        trace!("Frontier layer {depth}: {} new nodes", next_frontier.len());
        frontier = next_frontier;
    }

    Expansion {
        backtrace,
        discovered,
        stopped_at: None,
        depth,
    }
}

/// Shortest path from `source` to `target` following directed edges.
///
/// Among several shortest paths, which one is returned depends on set
/// iteration order; only its length is guaranteed.
///
/// `source` is only connected to itself when a cycle leads back to it, and
/// the path is then the single node `[source]`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either end is missing and
/// [`GraphError::NotConnected`] if expansion exhausts without reaching `target`.
pub fn path_to<'g, N, Q>(graph: &'g Graph<N>, source: &Q, target: &Q) -> Result<Vec<&'g N>>
where
    N: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + Display + ?Sized,
{
    let start = lookup(graph, source)?;
    let goal = lookup(graph, target)?;

    let expansion = expand_frontier(graph, start, |node| node == goal);
    match expansion.stopped_at {
        Some(found) => Ok(trace_back(start, found, &expansion.backtrace)),
        None => Err(GraphError::NotConnected {
            source_id: source.to_string(),
            target_id: target.to_string(),
        }),
    }
}

/// Every node reachable from `source` by one or more edges, in no particular order.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if `source` is missing.
pub fn reachable<'g, N, Q>(graph: &'g Graph<N>, source: &Q) -> Result<Vec<&'g N>>
where
    N: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + Display + ?Sized,
{
    let start = lookup(graph, source)?;
    let expansion = expand_frontier(graph, start, |_| false);
    Ok(expansion.discovered.into_iter().collect())
}

fn lookup<'g, N, Q>(graph: &'g Graph<N>, node: &Q) -> Result<&'g N>
where
    N: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + Display + ?Sized,
{
    graph.get(node).ok_or_else(|| GraphError::NodeNotFound {
        node_id: node.to_string(),
    })
}

/// Walk the breadcrumbs from `end` back to `start`.
fn trace_back<'g, N: Hash + Eq>(
    start: &'g N,
    end: &'g N,
    backtrace: &HashMap<&'g N, &'g N>,
) -> Vec<&'g N> {
    let mut path = vec![end];
    let mut node = end;
    while node != start {
        match backtrace.get(node) {
            Some(&previous) => {
                path.push(previous);
                node = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
