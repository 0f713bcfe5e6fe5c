//! Main [`Graph`] type: node set plus out-set adjacency.

use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::borrow::Borrow;
use std::collections::hash_set;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

/// A directed graph over hashable node identities.
///
/// Nodes live in a set and each node maps to the set of nodes it points at, so
/// there are no duplicate nodes and no parallel edges. A node without outgoing
/// edges has no entry in the adjacency map; the graph never stores an empty
/// out-set.
///
/// Every lookup accepts a borrowed form of the node (`N: Borrow<Q>`), the same
/// way [`HashMap`] does, so a graph of records keyed by name can be queried
/// with `&str`.
///
/// # Example
///
/// ```
/// use incgraph::Graph;
///
/// # fn main() -> incgraph::Result<()> {
/// let mut graph: Graph<u32> = (1..=5).collect();
/// graph.connect(&1, &2)?;
/// graph.connect(&2, &3)?;
/// graph.connect(&3, &4)?;
///
/// assert_eq!(graph.path_to(&1, &4)?, vec![1, 2, 3, 4]);
/// assert!(graph.path_to(&4, &1).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Graph<N> {
    nodes: HashSet<N>,
    edges: HashMap<N, HashSet<N>>,
}

impl<N> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashSet::new(),
            edges: HashMap::new(),
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }

    /// Same as [`node_count`](Self::node_count).
    pub fn len(&self) -> usize {
        self.node_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node. Order is not guaranteed.
    pub fn nodes(&self) -> hash_set::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Iterate over every edge as a `(source, target)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }
}

impl<N: Hash + Eq> Graph<N> {
    /// Whether `node` is in the graph.
    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains(node)
    }

    /// The stored node equal to `node`, if any.
    pub fn get<Q>(&self, node: &Q) -> Option<&N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get(node)
    }

    /// The out-set of `node`.
    ///
    /// A node without recorded edges yields nothing, and so does a node that
    /// is not in the graph at all. Use [`contains`](Self::contains) first when
    /// the difference matters.
    pub fn edges_of<Q>(&self, node: &Q) -> Neighbors<'_, N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Neighbors {
            inner: self.edges.get(node).map(HashSet::iter),
        }
    }

    /// Whether the edge `source -> target` exists.
    pub fn has_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }
}

impl<N: Hash + Eq + Clone + Display> Graph<N> {
    /// Add a node to the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if the node is already present.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.nodes.contains(&node) {
            return Err(GraphError::DuplicateNode {
                node_id: node.to_string(),
            });
        }
        debug!("Adding node: {node}");
        self.nodes.insert(node);
        Ok(())
    }

    /// Remove a node together with every edge it takes part in.
    ///
    /// Returns the removed node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn remove_node<Q>(&mut self, node: &Q) -> Result<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let removed = self
            .nodes
            .take(node)
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: node.to_string(),
            })?;
        debug!("Removing node: {removed}");

        self.edges.remove(node);
        self.edges.retain(|_, targets| {
            targets.remove(node);
            !targets.is_empty()
        });

        Ok(removed)
    }

    /// Add the directed edge `source -> target`.
    ///
    /// Adding an edge that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn connect<Q>(&mut self, source: &Q, target: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let source_node = self.require(source)?.clone();
        let target_node = self.require(target)?.clone();
        trace!("Connecting {source_node} -> {target_node}");

        self.edges.entry(source_node).or_default().insert(target_node);
        Ok(())
    }

    /// Remove the directed edge `source -> target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist,
    /// including when `source` has no edges at all.
    pub fn disconnect<Q>(&mut self, source: &Q, target: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let not_found = || GraphError::EdgeNotFound {
            source_id: source.to_string(),
            target_id: target.to_string(),
        };

        let targets = self.edges.get_mut(source).ok_or_else(not_found)?;
        if !targets.remove(target) {
            return Err(not_found());
        }
        if targets.is_empty() {
            self.edges.remove(source);
        }
        trace!("Disconnected {source} -> {target}");

        Ok(())
    }

    /// Shortest path from `source` to `target`, both ends included.
    ///
    /// A node is only connected to itself through a cycle, by the path `[node]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node is missing and
    /// [`GraphError::NotConnected`] if `target` can't be reached.
    pub fn path_to<Q>(&self, source: &Q, target: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        super::algorithms::path_to(self, source, target)
            .map(|path| path.into_iter().cloned().collect())
    }

    /// Every node reachable from `source` by one or more edges.
    ///
    /// `source` itself is only part of the result when a cycle leads back to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `source` is missing.
    pub fn reachable_from<Q>(&self, source: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        super::algorithms::reachable(self, source)
            .map(|nodes| nodes.into_iter().cloned().collect())
    }

    /// A new graph with the same nodes and every edge `a -> b` flipped to `b -> a`.
    pub fn reverse(&self) -> Self {
        let mut reversed: Self = self.nodes.iter().cloned().collect();
        for (source, target) in self.edges() {
            reversed
                .edges
                .entry(target.clone())
                .or_default()
                .insert(source.clone());
        }
        debug!(
            "Reversed graph: {} nodes, {} edges",
            reversed.node_count(),
            reversed.edge_count()
        );
        reversed
    }

    fn require<Q>(&self, node: &Q) -> Result<&N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.nodes.get(node).ok_or_else(|| GraphError::NodeNotFound {
            node_id: node.to_string(),
        })
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Hash + Eq> FromIterator<N> for Graph<N> {
    /// Build an edgeless graph. Repeated nodes collapse into one.
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
            edges: HashMap::new(),
        }
    }
}

impl<N: Hash + Eq> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: Hash + Eq> Eq for Graph<N> {}

impl<N> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

/// Iterator over the out-set of one node, returned by [`Graph::edges_of`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a, N> {
    inner: Option<hash_set::Iter<'a, N>>,
}

impl<'a, N> Iterator for Neighbors<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<N> ExactSizeIterator for Neighbors<'_, N> {}
