//! Tests for path search and reachability.

use incgraph::graph::algorithms::expand_frontier;
use incgraph::{Graph, GraphError};
use std::collections::{HashMap, HashSet, VecDeque};

// Helper to create a linear chain 1 -> 2 -> 3 -> 4 with an isolated 5
fn create_linear_chain() -> Graph<u32> {
    let mut graph: Graph<u32> = (1..=5).collect();
    graph.connect(&1, &2).unwrap();
    graph.connect(&2, &3).unwrap();
    graph.connect(&3, &4).unwrap();
    graph
}

// Helper to create a graph with shortcuts and cycles
fn create_tangled_graph() -> Graph<u32> {
    let mut graph: Graph<u32> = (0..10).collect();
    let edges = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (0, 6),
        (6, 4),
        (5, 0),
        (2, 7),
        (7, 8),
        (8, 5),
        (3, 3),
        (9, 0),
    ];
    for (a, b) in edges {
        graph.connect(&a, &b).unwrap();
    }
    graph
}

// Reference distances computed independently of the library traversal
fn distances_from(graph: &Graph<u32>, start: u32) -> HashMap<u32, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for &next in graph.edges_of(&node) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

// Whether some edge leads back into `node` from a node it reaches
fn on_cycle(graph: &Graph<u32>, node: u32) -> bool {
    let reached = distances_from(graph, node);
    graph
        .nodes()
        .any(|n| reached.contains_key(n) && graph.has_edge(n, &node))
}

fn assert_valid_shortest_path(graph: &Graph<u32>, from: u32, to: u32, path: &[u32]) {
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
    let expected = distances_from(graph, from)[&to];
    assert_eq!(path.len() - 1, expected, "path {path:?} is not minimal");
}

#[test]
fn test_path_on_linear_chain() {
    let graph = create_linear_chain();
    assert_eq!(graph.path_to(&1, &4).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_path_against_edge_direction_is_not_connected() {
    let graph = create_linear_chain();
    let err = graph.path_to(&4, &1).unwrap_err();
    assert!(matches!(err, GraphError::NotConnected { .. }));
    assert_eq!(err.to_string(), "4 not connected to 1");
}

#[test]
fn test_path_to_isolated_node() {
    let graph = create_linear_chain();
    assert!(matches!(
        graph.path_to(&1, &5),
        Err(GraphError::NotConnected { .. })
    ));
}

#[test]
fn test_path_to_unknown_node() {
    let graph = create_linear_chain();
    assert!(matches!(
        graph.path_to(&1, &77),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_paths_are_shortest_for_every_pair() {
    let graph = create_tangled_graph();
    for from in 0..10 {
        let reachable = distances_from(&graph, from);
        for to in 0..10 {
            let connected = if from == to {
                on_cycle(&graph, from)
            } else {
                reachable.contains_key(&to)
            };
            match graph.path_to(&from, &to) {
                Ok(path) => {
                    assert!(connected, "{from} does not reach {to}");
                    assert_valid_shortest_path(&graph, from, to, &path)
                }
                Err(GraphError::NotConnected { .. }) => {
                    assert!(!connected, "{from} reaches {to}")
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }
}

#[test]
fn test_shortcut_is_preferred() {
    let graph = create_tangled_graph();
    // 0 -> 6 -> 4 beats 0 -> 1 -> 2 -> 3 -> 4
    assert_eq!(graph.path_to(&0, &4).unwrap(), vec![0, 6, 4]);
}

#[test]
fn test_reachable_from_matches_reference() {
    let graph = create_tangled_graph();
    for start in 0..10 {
        let found: HashSet<u32> = graph.reachable_from(&start).unwrap().into_iter().collect();
        let mut expected: HashSet<u32> = distances_from(&graph, start).into_keys().collect();
        // The start node only counts when a cycle leads back to it
        if !on_cycle(&graph, start) {
            expected.remove(&start);
        }
        assert_eq!(found, expected, "reachable set from {start}");
    }
}

#[test]
fn test_self_path_needs_a_cycle() {
    let graph = create_linear_chain();
    for node in 1..=5 {
        assert!(matches!(
            graph.path_to(&node, &node),
            Err(GraphError::NotConnected { .. })
        ));
    }

    let graph = create_tangled_graph();
    // 3 -> 3 is a self-loop, 0 sits on 0 -> 6 -> 4 -> 5 -> 0
    assert_eq!(graph.path_to(&3, &3).unwrap(), vec![3]);
    assert_eq!(graph.path_to(&0, &0).unwrap(), vec![0]);
    // Nothing points back at 9
    assert!(graph.path_to(&9, &9).is_err());
}

#[test]
fn test_reverse_reachability_finds_dependents() {
    let graph = create_linear_chain();
    let mut dependents = graph.reverse().reachable_from(&4).unwrap();
    dependents.sort_unstable();
    assert_eq!(dependents, vec![1, 2, 3]);
}

#[test]
fn test_expand_frontier_depth_matches_layers() {
    let graph = create_linear_chain();
    let expansion = expand_frontier(&graph, &1, |node| *node == 4);
    assert_eq!(expansion.stopped_at, Some(&4));
    assert_eq!(expansion.depth, 3);
}
