//! Tests for core graph operations (add/remove nodes, connect/disconnect, reverse).

use incgraph::{Graph, GraphError};
use std::collections::HashSet;

fn out_set(graph: &Graph<u32>, node: u32) -> HashSet<u32> {
    graph.edges_of(&node).copied().collect()
}

fn edge_set(graph: &Graph<u32>) -> HashSet<(u32, u32)> {
    graph.edges().map(|(a, b)| (*a, *b)).collect()
}

// A small graph with a fan-out, a diamond and a cycle:
// 1 -> 2, 1 -> 3, 2 -> 4, 3 -> 4, 4 -> 5, 5 -> 2
fn sample_graph() -> Graph<u32> {
    let mut graph: Graph<u32> = (1..=6).collect();
    for (a, b) in [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (5, 2)] {
        graph.connect(&a, &b).unwrap();
    }
    graph
}

#[test]
fn test_add_node() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());

    graph.add_node("main.c".to_string()).unwrap();

    assert!(graph.contains("main.c"));
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get("main.c").map(String::as_str), Some("main.c"));
}

#[test]
fn test_add_duplicate_node_fails() {
    let mut graph = Graph::new();
    graph.add_node("main.c".to_string()).unwrap();

    let err = graph.add_node("main.c".to_string()).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { ref node_id } if node_id == "main.c"));
}

#[test]
fn test_remove_missing_node_fails() {
    let mut graph = sample_graph();
    assert!(matches!(
        graph.remove_node(&42),
        Err(GraphError::NodeNotFound { .. })
    ));
    assert_eq!(graph.node_count(), 6);
}

#[test]
fn test_remove_node_leaves_no_dangling_edges() {
    for victim in 1..=6 {
        let mut graph = sample_graph();
        graph.remove_node(&victim).unwrap();

        assert!(!graph.contains(&victim));
        for (a, b) in edge_set(&graph) {
            assert!(graph.contains(&a), "dangling source {a}");
            assert!(graph.contains(&b), "dangling target {b}");
            assert_ne!(a, victim);
            assert_ne!(b, victim);
        }
    }
}

#[test]
fn test_nodes_lists_every_node() {
    let graph = sample_graph();
    let nodes: HashSet<u32> = graph.nodes().copied().collect();
    assert_eq!(nodes, (1..=6).collect());
}

#[test]
fn test_node_without_edges_is_valid() {
    let graph = sample_graph();
    assert!(graph.contains(&6));
    assert_eq!(graph.edges_of(&6).len(), 0);
}

#[test]
fn test_connect_requires_both_nodes() {
    let mut graph = sample_graph();

    let err = graph.connect(&1, &99).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { ref node_id } if node_id == "99"));

    let err = graph.connect(&99, &1).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { ref node_id } if node_id == "99"));
}

#[test]
fn test_connect_then_disconnect_restores_out_set() {
    let pairs = [(1, 2), (1, 4), (6, 1), (6, 6), (3, 5)];
    for (a, b) in pairs {
        let mut graph = sample_graph();
        let before = out_set(&graph, a);
        let existed = graph.has_edge(&a, &b);

        graph.connect(&a, &b).unwrap();
        assert!(graph.has_edge(&a, &b));

        if !existed {
            graph.disconnect(&a, &b).unwrap();
            assert_eq!(out_set(&graph, a), before);
        }
    }
}

#[test]
fn test_disconnect_missing_edge_fails() {
    let mut graph = sample_graph();

    // Node has edges, but not this one
    assert!(matches!(
        graph.disconnect(&1, &5),
        Err(GraphError::EdgeNotFound { .. })
    ));
    // Node has no recorded edges at all
    assert!(matches!(
        graph.disconnect(&6, &1),
        Err(GraphError::EdgeNotFound { .. })
    ));
}

#[test]
fn test_reverse_flips_every_edge() {
    let graph = sample_graph();
    let reversed = graph.reverse();

    assert_eq!(reversed.node_count(), graph.node_count());
    assert_eq!(reversed.edge_count(), graph.edge_count());
    for (a, b) in edge_set(&graph) {
        assert!(reversed.has_edge(&b, &a));
    }
    assert_eq!(out_set(&reversed, 4), HashSet::from([2, 3]));
}

#[test]
fn test_reverse_is_an_involution() {
    let graph = sample_graph();
    let twice = graph.reverse().reverse();

    assert_eq!(twice, graph);
    assert_eq!(edge_set(&twice), edge_set(&graph));
}

#[test]
fn test_reverse_does_not_touch_original() {
    let graph = sample_graph();
    let before = edge_set(&graph);
    let _ = graph.reverse();
    assert_eq!(edge_set(&graph), before);
}
