//! Randomized stress test for the arena engine's slot reuse.
//!
//! The arena keeps itself dense by moving the last slot into any vacated
//! one, which is the easiest place for a renumbering bug to hide. This
//! drives both engines through the same random operation stream and checks
//! they agree after every step, using the node-keyed engine as the model.

use rand::prelude::IndexedRandom;
use rand::Rng;

use edgemap::{AdjacencyGraph, CompactGraph, Graph};

const KEYS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
const STEPS: usize = 2_000;

fn snapshot<G: Graph<Node = &'static str, Value = u32>>(
    graph: &G,
) -> (Vec<&'static str>, Vec<(&'static str, &'static str, u32)>) {
    let mut nodes: Vec<&str> = graph.iter_nodes().copied().collect();
    nodes.sort_unstable();
    let mut items: Vec<(&str, &str, u32)> = graph
        .iter_items()
        .map(|(t, h, v)| (*t, *h, *v))
        .collect();
    items.sort_unstable();
    (nodes, items)
}

#[test]
fn test_arena_agrees_with_model_under_churn() {
    let mut rng = rand::rng();
    let mut arena: CompactGraph<&str, u32> = CompactGraph::new();
    let mut model: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();

    for step in 0..STEPS {
        let tail = *KEYS.choose(&mut rng).unwrap();
        let head = *KEYS.choose(&mut rng).unwrap();
        match rng.random_range(0..6) {
            0 | 1 => {
                arena.add_node(tail).unwrap();
                model.add_node(tail).unwrap();
            }
            2 | 3 => {
                let value = rng.random_range(0..100);
                let got = arena.set_edge(tail, head, value);
                let want = model.set_edge(tail, head, value);
                assert_eq!(got, want, "set_edge diverged at step {step}");
            }
            4 => {
                let got = arena.discard_edge(&tail, &head);
                let want = model.discard_edge(&tail, &head);
                assert_eq!(got, want, "discard_edge diverged at step {step}");
            }
            _ => {
                let got = arena.discard_node(&tail);
                let want = model.discard_node(&tail);
                assert_eq!(got, want, "discard_node diverged at step {step}");
            }
        }

        assert_eq!(arena.node_count(), model.node_count(), "step {step}");
        assert_eq!(arena.edge_count(), model.edge_count(), "step {step}");
        assert_eq!(snapshot(&arena), snapshot(&model), "step {step}");
    }
}

#[test]
fn test_arena_degrees_survive_relocation() {
    let mut rng = rand::rng();
    let mut arena: CompactGraph<u32, u32> = (0..32).collect();
    for _ in 0..200 {
        let tail = rng.random_range(0..32);
        let head = rng.random_range(0..32);
        let _ = arena.set_edge(tail, head, tail + head);
    }

    // Remove half the nodes, forcing repeated slot relocation.
    for node in 0..16 {
        arena.discard_node(&node);
    }

    for node in arena.iter_nodes().copied().collect::<Vec<_>>() {
        assert_eq!(arena.outdegree(&node), arena.neighbors(&node).count());
        for (head, value) in arena.neighbors(&node) {
            assert_eq!(arena.get_edge(&node, head), Ok(value));
            assert_eq!(*value, node + head);
        }
    }
}

#[test]
fn test_round_trip_between_engines() {
    let mut rng = rand::rng();
    let mut arena: CompactGraph<u32, u32> = (0..16).collect();
    for _ in 0..100 {
        let tail = rng.random_range(0..16);
        let head = rng.random_range(0..16);
        let _ = arena.set_edge(tail, head, rng.random_range(0..1000));
    }

    let sparse = AdjacencyGraph::from_graph(&arena);
    let back = CompactGraph::from_graph(&sparse);
    assert_eq!(snapshot_u32(&arena), snapshot_u32(&back));
}

fn snapshot_u32<G: Graph<Node = u32, Value = u32>>(graph: &G) -> Vec<(u32, u32, u32)> {
    let mut items: Vec<(u32, u32, u32)> = graph
        .iter_items()
        .map(|(t, h, v)| (*t, *h, *v))
        .collect();
    items.sort_unstable();
    items
}
