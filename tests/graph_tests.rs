//! Contract tests run against every graph implementation.

use edgemap::{Adjacency, AdjacencyGraph, CompactGraph, Graph, GraphError, MapGraph};

fn check_nodes_form_a_set<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    assert!(graph.is_empty());

    graph.add_node("a").unwrap();
    graph.add_node("a").unwrap();
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains_node(&"a"));
    assert!(!graph.contains_node(&"b"));

    assert!(graph.discard_node(&"a"));
    assert!(!graph.discard_node(&"a"));
    assert_eq!(graph.remove_node(&"a"), Err(GraphError::MissingNode));
}

fn check_edges_require_endpoints<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_node("a").unwrap();

    assert_eq!(graph.set_edge("a", "b", 1), Err(GraphError::MissingNode));
    assert_eq!(graph.set_edge("b", "a", 1), Err(GraphError::MissingNode));
    assert_eq!(graph.edge_count(), 0);

    graph.add_node("b").unwrap();
    graph.set_edge("a", "b", 1).unwrap();
    assert!(graph.contains_edge(&"a", &"b"));
    assert!(!graph.contains_edge(&"b", &"a"));
}

fn check_edge_lookup_and_default<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b"]).unwrap();
    graph.set_edge("a", "b", 10).unwrap();

    assert_eq!(graph.get_edge(&"a", &"b"), Ok(&10));
    assert_eq!(graph.get_edge(&"b", &"a"), Err(GraphError::MissingEdge));
    assert_eq!(graph.get_edge(&"a", &"zz"), Err(GraphError::MissingEdge));

    assert_eq!(graph.edge_or(&"a", &"b", &-1), &10);
    assert_eq!(graph.edge_or(&"b", &"a", &-1), &-1);
}

fn check_overwrite_keeps_count<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();
    graph.set_edge("a", "b", 2).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge(&"a", &"b"), Ok(&2));
}

fn check_remove_node_cascades<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["hub", "x", "y"]).unwrap();
    graph.set_edge("hub", "x", 1).unwrap();
    graph.set_edge("y", "hub", 2).unwrap();
    graph.set_edge("hub", "hub", 3).unwrap();
    graph.set_edge("x", "y", 4).unwrap();
    assert_eq!(graph.edge_count(), 4);

    graph.remove_node(&"hub").unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge(&"x", &"y"), Ok(&4));
    assert!(!graph.contains_edge(&"y", &"hub"));
}

fn check_remove_edge_returns_value<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b"]).unwrap();
    graph.set_edge("a", "b", 9).unwrap();

    assert_eq!(graph.remove_edge(&"a", &"b"), Ok(9));
    assert_eq!(graph.remove_edge(&"a", &"b"), Err(GraphError::MissingEdge));
    assert!(graph.contains_node(&"a"));
    assert!(graph.contains_node(&"b"));

    assert_eq!(graph.discard_edge(&"a", &"b"), None);
    graph.set_edge("b", "a", 5).unwrap();
    assert_eq!(graph.discard_edge(&"b", &"a"), Some(5));
}

fn check_set_adjacency_variants<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();

    // A presence marker creates the node and nothing else.
    graph.set_adjacency("a", Adjacency::MarkPresent).unwrap();
    assert!(graph.contains_node(&"a"));
    assert_eq!(graph.edge_count(), 0);

    // An edges assignment replaces the outgoing adjacency wholesale and
    // lifts unknown heads into the node set.
    graph
        .set_adjacency("a", Adjacency::from_entries([("b", 1), ("c", 2)]))
        .unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.outdegree(&"a"), 2);

    graph
        .set_adjacency("a", Adjacency::from_entries([("c", 7)]))
        .unwrap();
    assert_eq!(graph.outdegree(&"a"), 1);
    assert_eq!(graph.get_edge(&"a", &"c"), Ok(&7));
    assert!(!graph.contains_edge(&"a", &"b"));
    // Replaced adjacency only touches outgoing edges; "b" stays a node.
    assert!(graph.contains_node(&"b"));

    // An invalid shape fails without side effects.
    let before = graph.node_count();
    assert_eq!(
        graph.set_adjacency("zz", Adjacency::Invalid),
        Err(GraphError::InvalidAdjacency)
    );
    assert_eq!(graph.node_count(), before);
    assert!(!graph.contains_node(&"zz"));
}

fn check_adjacency_view<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b", "c"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();
    graph.set_edge("a", "c", 2).unwrap();

    assert_eq!(
        graph.adjacency(&"zz").err(),
        Some(GraphError::MissingNode)
    );

    let adjacency = graph.adjacency(&"a").unwrap();
    assert_eq!(adjacency.len(), 2);
    assert!(adjacency.contains(&"b"));
    assert!(!adjacency.contains(&"a"));
    assert_eq!(adjacency.value(&"c"), Ok(&2));
    assert_eq!(adjacency.value(&"a"), Err(GraphError::MissingEdge));

    let mut heads: Vec<&str> = adjacency.iter().map(|(head, _)| *head).collect();
    heads.sort_unstable();
    assert_eq!(heads, vec!["b", "c"]);

    // A node with no outgoing edges has a valid, empty adjacency.
    let empty = graph.adjacency(&"c").unwrap();
    assert!(empty.is_empty());
}

fn check_collection_views<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b", "c"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();
    graph.set_edge("b", "c", 1).unwrap();

    assert_eq!(graph.nodes().len(), 3);
    assert!(graph.nodes().contains(&"c"));

    assert_eq!(graph.edges().len(), 2);
    assert!(graph.edges().contains(&"a", &"b"));
    assert!(!graph.edges().contains(&"b", &"a"));

    // Values keep duplicates, one per edge.
    let values: Vec<i32> = graph.values().iter().copied().collect();
    assert_eq!(values, vec![1, 1]);
    assert!(graph.values().contains(&1));
    assert!(!graph.values().contains(&2));

    assert!(graph.items().contains(&"a", &"b", &1));
    assert!(!graph.items().contains(&"a", &"b", &2));
    let mut items: Vec<(&str, &str, i32)> = graph
        .items()
        .iter()
        .map(|(t, h, v)| (*t, *h, *v))
        .collect();
    items.sort_unstable();
    assert_eq!(items, vec![("a", "b", 1), ("b", "c", 1)]);
}

fn check_views_are_live<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_node("a").unwrap();
    assert_eq!(graph.nodes().len(), 1);
    graph.add_node("b").unwrap();
    // A view taken after the mutation observes the new state.
    assert_eq!(graph.nodes().len(), 2);
}

fn check_clear<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

fn check_copy_is_independent<G>()
where
    G: Graph<Node = &'static str, Value = i32> + Default + Clone,
{
    let mut graph = G::default();
    graph.add_nodes(["a", "b", "c"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();

    let mut copy = graph.clone();
    copy.set_edge("a", "b", 9).unwrap();
    copy.remove_node(&"c").unwrap();

    // Mutating the copy never reaches the original.
    assert_eq!(graph.get_edge(&"a", &"b"), Ok(&1));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains_node(&"c"));

    // And the other way around.
    graph.set_edge("a", "b", 2).unwrap();
    graph.add_node("d").unwrap();
    assert_eq!(copy.get_edge(&"a", &"b"), Ok(&9));
    assert_eq!(copy.node_count(), 2);
    assert!(!copy.contains_node(&"d"));
}

fn check_merge_from<G: Graph<Node = &'static str, Value = i32> + Default>() {
    let mut graph = G::default();
    graph.add_nodes(["a", "b"]).unwrap();
    graph.set_edge("a", "b", 1).unwrap();

    let mut other = AdjacencyGraph::from_nodes(["b", "c"]);
    other.set_edge("b", "c", 2).unwrap();
    other.set_edge("a", "b", 99).unwrap_err();
    other.add_node("a").unwrap();
    other.set_edge("a", "b", 99).unwrap();

    graph.merge_from(&other).unwrap();
    assert_eq!(graph.node_count(), 3);
    // Shared edges take the source's value.
    assert_eq!(graph.get_edge(&"a", &"b"), Ok(&99));
    assert_eq!(graph.get_edge(&"b", &"c"), Ok(&2));
}

macro_rules! engine_suite {
    ($name:ident, $engine:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_nodes_form_a_set() {
                check_nodes_form_a_set::<$engine>();
            }

            #[test]
            fn test_edges_require_endpoints() {
                check_edges_require_endpoints::<$engine>();
            }

            #[test]
            fn test_edge_lookup_and_default() {
                check_edge_lookup_and_default::<$engine>();
            }

            #[test]
            fn test_overwrite_keeps_count() {
                check_overwrite_keeps_count::<$engine>();
            }

            #[test]
            fn test_remove_node_cascades() {
                check_remove_node_cascades::<$engine>();
            }

            #[test]
            fn test_remove_edge_returns_value() {
                check_remove_edge_returns_value::<$engine>();
            }

            #[test]
            fn test_set_adjacency_variants() {
                check_set_adjacency_variants::<$engine>();
            }

            #[test]
            fn test_adjacency_view() {
                check_adjacency_view::<$engine>();
            }

            #[test]
            fn test_collection_views() {
                check_collection_views::<$engine>();
            }

            #[test]
            fn test_views_are_live() {
                check_views_are_live::<$engine>();
            }

            #[test]
            fn test_clear() {
                check_clear::<$engine>();
            }

            #[test]
            fn test_copy_is_independent() {
                check_copy_is_independent::<$engine>();
            }

            #[test]
            fn test_merge_from() {
                check_merge_from::<$engine>();
            }
        }
    };
}

engine_suite!(adjacency_graph, AdjacencyGraph<&'static str, i32>);
engine_suite!(compact_graph, CompactGraph<&'static str, i32>);
engine_suite!(map_graph, MapGraph<&'static str, i32>);
