//! Shared `Debug` rendering for graph types.
//!
//! Output scales with graph size so a stray debug print of a large graph
//! stays readable: small graphs render their full adjacency, mid-sized
//! graphs render a node sample, and anything larger renders counts only.

use std::fmt;

use crate::graph::Graph;

/// Largest graph rendered with full per-node adjacency.
const DETAIL_NODES: usize = 16;

/// Largest graph rendered with a node sample; beyond this, counts only.
const PLACEHOLDER_NODES: usize = 256;

pub(crate) fn write_graph<G>(f: &mut fmt::Formatter<'_>, name: &str, graph: &G) -> fmt::Result
where
    G: Graph,
    G::Node: fmt::Debug,
    G::Value: fmt::Debug,
{
    let nodes = graph.node_count();
    let edges = graph.edge_count();
    write!(f, "{name} {{ {nodes} nodes, {edges} edges")?;

    if nodes == 0 {
        return write!(f, " }}");
    }

    if nodes <= DETAIL_NODES {
        write!(f, ", adjacency: {{")?;
        for (i, node) in graph.iter_nodes().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{separator}{node:?}: {{")?;
            for (j, (head, value)) in graph.neighbors(node).enumerate() {
                let inner = if j == 0 { "" } else { ", " };
                write!(f, "{inner}{head:?}: {value:?}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, " }} }}")
    } else if nodes <= PLACEHOLDER_NODES {
        write!(f, ", nodes: [")?;
        for (i, node) in graph.iter_nodes().take(DETAIL_NODES).enumerate() {
            let separator = if i == 0 { "" } else { ", " };
            write!(f, "{separator}{node:?}")?;
        }
        write!(f, ", .. {} more] }}", nodes - DETAIL_NODES)
    } else {
        write!(f, ", .. }}")
    }
}

#[cfg(test)]
mod tests {
    use super::{DETAIL_NODES, PLACEHOLDER_NODES};
    use crate::graph::Graph;
    use crate::storage::AdjacencyGraph;

    #[test]
    fn test_empty_graph_renders_counts_only() {
        let graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::new();
        assert_eq!(format!("{graph:?}"), "AdjacencyGraph { 0 nodes, 0 edges }");
    }

    #[test]
    fn test_small_graph_renders_full_adjacency() {
        let mut graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::from_nodes([1, 2]);
        graph.set_edge(1, 2, 7).unwrap();
        let rendered = format!("{graph:?}");
        assert!(rendered.starts_with("AdjacencyGraph { 2 nodes, 1 edges"));
        assert!(rendered.contains("adjacency:"));
        assert!(rendered.contains("2: 7"));
    }

    #[test]
    fn test_mid_graph_renders_node_sample() {
        let count = DETAIL_NODES + 10;
        let graph: AdjacencyGraph<usize, u32> = (0..count).collect();
        let rendered = format!("{graph:?}");
        assert!(rendered.contains("nodes: ["));
        assert!(rendered.contains(", .. 10 more]"));
        assert!(!rendered.contains("adjacency:"));
    }

    #[test]
    fn test_large_graph_renders_truncation_marker() {
        let graph: AdjacencyGraph<usize, u32> = (0..=PLACEHOLDER_NODES).collect();
        assert_eq!(
            format!("{graph:?}"),
            format!("AdjacencyGraph {{ {} nodes, 0 edges, .. }}", PLACEHOLDER_NODES + 1)
        );
    }
}
