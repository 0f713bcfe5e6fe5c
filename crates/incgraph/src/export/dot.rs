//! DOT format export for Graphviz visualization.

use crate::graph::Graph;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::hash::Hash;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name of the emitted `digraph`
    pub graph_name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Shape used for every node (box, ellipse, note, ...)
    pub node_shape: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "includes".to_string(),
            rankdir: "LR".to_string(),
            node_shape: "box".to_string(),
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<N>(graph: &Graph<N>) -> String
where
    N: Hash + Eq + Display,
{
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling.
///
/// Nodes and edges are emitted in sorted order so the output is diffable.
pub fn export_dot_styled<N>(graph: &Graph<N>, options: &DotOptions) -> String
where
    N: Hash + Eq + Display,
{
    let nodes: BTreeSet<String> = graph.nodes().map(ToString::to_string).collect();
    let edges: BTreeSet<(String, String)> = graph
        .edges()
        .map(|(source, target)| (source.to_string(), target.to_string()))
        .collect();

    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "digraph \"{}\" {{\n",
        escape_dot_label(&options.graph_name)
    ));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str(&format!("    node [shape={}];\n\n", options.node_shape));

    for node in &nodes {
        output.push_str(&format!("    \"{}\";\n", escape_dot_label(node)));
    }

    output.push('\n');

    for (source, target) in &edges {
        output.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape_dot_label(source),
            escape_dot_label(target)
        ));
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_label() {
        assert_eq!(escape_dot_label("hello"), "hello");
        assert_eq!(escape_dot_label("line\\nbreak"), "line\\\\nbreak");
        assert_eq!(escape_dot_label("quote\"here"), "quote\\\"here");
    }

    #[test]
    fn test_export_dot_lists_sorted_edges() {
        let mut graph: Graph<&str> = ["b.h", "a.c", "c.h"].into_iter().collect();
        graph.connect("a.c", "c.h").unwrap();
        graph.connect("a.c", "b.h").unwrap();

        let dot = export_dot(&graph);
        assert!(dot.starts_with("digraph \"includes\" {\n"));
        let first = dot.find("\"a.c\" -> \"b.h\"").unwrap();
        let second = dot.find("\"a.c\" -> \"c.h\"").unwrap();
        assert!(first < second);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_export_dot_styled_document() {
        let mut graph: Graph<&str> = ["main.c", "say \"hi\".h"].into_iter().collect();
        graph.connect("main.c", "say \"hi\".h").unwrap();

        let options = DotOptions {
            graph_name: "deps".to_string(),
            rankdir: "TB".to_string(),
            node_shape: "note".to_string(),
        };
        let expected = concat!(
            "digraph \"deps\" {\n",
            "    rankdir=TB;\n",
            "    node [shape=note];\n",
            "\n",
            "    \"main.c\";\n",
            "    \"say \\\"hi\\\".h\";\n",
            "\n",
            "    \"main.c\" -> \"say \\\"hi\\\".h\";\n",
            "}\n",
        );
        assert_eq!(export_dot_styled(&graph, &options), expected);
    }
}
