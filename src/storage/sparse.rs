//! Node-keyed storage engine.

use std::collections::{hash_map, hash_set, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::adjacency::Adjacency;
use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::render;

/// Node-keyed storage engine built on hashed adjacency sets.
///
/// Nodes are the keys of a pair of hash maps: `forward` maps each node to
/// its out-neighbor set, `reverse` maps each node to its in-neighbor set.
/// Edge values live in a single map keyed by [`Edge`]. The reverse index is
/// what makes node removal proportional to the node's degree instead of the
/// graph's size: the edges pointing at a dying node are listed, not
/// searched for.
///
/// This is the engine of choice for churn-heavy workloads (nodes added and
/// removed freely) and the only engine with a direct serde representation.
///
/// # Example
///
/// ```
/// use edgemap::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_nodes(["a", "b", "c"])?;
/// graph.set_edge("a", "b", 1.5)?;
/// graph.set_edge("b", "c", 0.5)?;
///
/// graph.remove_node(&"b")?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), edgemap::GraphError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de> + Clone + Eq + Hash, V: Deserialize<'de>"))]
pub struct AdjacencyGraph<N, V> {
    forward: HashMap<N, HashSet<N>>,
    reverse: HashMap<N, HashSet<N>>,
    values: HashMap<Edge<N>, V>,
}

impl<N: Clone + Eq + Hash, V: Clone> AdjacencyGraph<N, V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            values: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` nodes before the node
    /// maps reallocate.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(nodes),
            reverse: HashMap::with_capacity(nodes),
            values: HashMap::new(),
        }
    }

    /// Creates a graph holding the given nodes and no edges.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.ensure_node(node);
        }
        graph
    }

    /// Copies the nodes, edges and values of any graph into this engine.
    pub fn from_graph<G>(other: &G) -> Self
    where
        G: Graph<Node = N, Value = V>,
    {
        let mut graph = Self::with_capacity(other.node_count());
        for node in other.iter_nodes() {
            graph.ensure_node(node.clone());
        }
        for (tail, head, value) in other.iter_items() {
            graph.put_edge(tail.clone(), head.clone(), value.clone());
        }
        graph
    }

    /// Builds a graph from a nested node-to-adjacency map.
    ///
    /// Every key becomes a node, every inner entry an edge. Heads that
    /// appear only inside inner maps become nodes as well.
    pub fn from_adjacency(rows: HashMap<N, HashMap<N, V>>) -> Self {
        let mut graph = Self::with_capacity(rows.len());
        for node in rows.keys() {
            graph.ensure_node(node.clone());
        }
        for (tail, row) in rows {
            for (head, value) in row {
                graph.ensure_node(head.clone());
                graph.put_edge(tail.clone(), head, value);
            }
        }
        graph
    }

    fn ensure_node(&mut self, node: N) {
        if !self.forward.contains_key(&node) {
            self.forward.insert(node.clone(), HashSet::new());
            self.reverse.insert(node, HashSet::new());
        }
    }

    /// Both endpoints must already be present.
    fn put_edge(&mut self, tail: N, head: N, value: V) {
        self.forward
            .get_mut(&tail)
            .unwrap_or_else(|| unreachable!("endpoint presence checked by caller"))
            .insert(head.clone());
        self.reverse
            .get_mut(&head)
            .unwrap_or_else(|| unreachable!("endpoint presence checked by caller"))
            .insert(tail.clone());
        self.values.insert(Edge::new(tail, head), value);
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Graph for AdjacencyGraph<N, V> {
    type Node = N;
    type Value = V;
    type Nodes<'a>
        = hash_map::Keys<'a, N, HashSet<N>>
    where
        Self: 'a;
    type Items<'a>
        = Items<'a, N, V>
    where
        Self: 'a;
    type Neighbors<'a>
        = Neighbors<'a, N, V>
    where
        Self: 'a;

    fn contains_node(&self, node: &N) -> bool {
        self.forward.contains_key(node)
    }

    fn contains_edge(&self, tail: &N, head: &N) -> bool {
        self.forward
            .get(tail)
            .is_some_and(|heads| heads.contains(head))
    }

    fn get_edge(&self, tail: &N, head: &N) -> Result<&V, GraphError> {
        self.values
            .get(&Edge::new(tail.clone(), head.clone()))
            .ok_or(GraphError::MissingEdge)
    }

    fn add_node(&mut self, node: N) -> Result<(), GraphError> {
        self.ensure_node(node);
        Ok(())
    }

    fn set_edge(&mut self, tail: N, head: N, value: V) -> Result<(), GraphError> {
        if !self.forward.contains_key(&tail) || !self.forward.contains_key(&head) {
            return Err(GraphError::MissingNode);
        }
        self.put_edge(tail, head, value);
        Ok(())
    }

    fn remove_node(&mut self, node: &N) -> Result<(), GraphError> {
        let Some(heads) = self.forward.remove(node) else {
            return Err(GraphError::MissingNode);
        };
        let tails = self
            .reverse
            .remove(node)
            .unwrap_or_else(|| unreachable!("forward and reverse share a key set"));

        for head in &heads {
            self.values.remove(&Edge::new(node.clone(), head.clone()));
            if head != node {
                if let Some(sources) = self.reverse.get_mut(head) {
                    sources.remove(node);
                }
            }
        }
        for tail in &tails {
            if tail != node {
                self.values.remove(&Edge::new(tail.clone(), node.clone()));
                if let Some(targets) = self.forward.get_mut(tail) {
                    targets.remove(node);
                }
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "removed node with {} outgoing and {} incoming edges",
            heads.len(),
            tails.len()
        );
        Ok(())
    }

    fn remove_edge(&mut self, tail: &N, head: &N) -> Result<V, GraphError> {
        let value = self
            .values
            .remove(&Edge::new(tail.clone(), head.clone()))
            .ok_or(GraphError::MissingEdge)?;
        if let Some(heads) = self.forward.get_mut(tail) {
            heads.remove(head);
        }
        if let Some(tails) = self.reverse.get_mut(head) {
            tails.remove(tail);
        }
        Ok(value)
    }

    fn node_count(&self) -> usize {
        self.forward.len()
    }

    fn edge_count(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
        self.values.clear();
    }

    fn iter_nodes(&self) -> Self::Nodes<'_> {
        self.forward.keys()
    }

    fn iter_items(&self) -> Self::Items<'_> {
        Items {
            inner: self.values.iter(),
        }
    }

    fn neighbors(&self, node: &N) -> Self::Neighbors<'_> {
        match self.forward.get_key_value(node) {
            Some((tail, heads)) => Neighbors {
                tail: Some(tail),
                heads: Some(heads.iter()),
                values: &self.values,
            },
            None => Neighbors {
                tail: None,
                heads: None,
                values: &self.values,
            },
        }
    }

    fn outdegree(&self, node: &N) -> usize {
        self.forward.get(node).map_or(0, HashSet::len)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Default for AdjacencyGraph<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash, V: Clone + PartialEq> PartialEq for AdjacencyGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        // The reverse index is derived from forward, so it carries no
        // information of its own.
        self.forward == other.forward && self.values == other.values
    }
}

impl<N, V> fmt::Debug for AdjacencyGraph<N, V>
where
    N: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_graph(f, "AdjacencyGraph", self)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> FromIterator<N> for AdjacencyGraph<N, V> {
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> FromIterator<(N, N, V)> for AdjacencyGraph<N, V> {
    fn from_iter<I: IntoIterator<Item = (N, N, V)>>(triples: I) -> Self {
        let mut graph = Self::new();
        graph.extend(triples);
        graph
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Extend<N> for AdjacencyGraph<N, V> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.ensure_node(node);
        }
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Extend<(N, N, V)> for AdjacencyGraph<N, V> {
    fn extend<I: IntoIterator<Item = (N, N, V)>>(&mut self, triples: I) {
        for (tail, head, value) in triples {
            self.ensure_node(tail.clone());
            self.ensure_node(head.clone());
            self.put_edge(tail, head, value);
        }
    }
}

impl<N: Clone + Eq + Hash, V: Clone> From<HashMap<N, HashMap<N, V>>> for AdjacencyGraph<N, V> {
    fn from(rows: HashMap<N, HashMap<N, V>>) -> Self {
        Self::from_adjacency(rows)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Extend<(N, Adjacency<N, V>)> for AdjacencyGraph<N, V> {
    fn extend<I: IntoIterator<Item = (N, Adjacency<N, V>)>>(&mut self, assignments: I) {
        for (node, adjacency) in assignments {
            // Invalid shapes are skipped; Extend has no error channel.
            let _ = self.set_adjacency(node, adjacency);
        }
    }
}

/// Iterator over an [`AdjacencyGraph`]'s edge triples.
pub struct Items<'a, N, V> {
    inner: hash_map::Iter<'a, Edge<N>, V>,
}

impl<'a, N, V> Iterator for Items<'a, N, V> {
    type Item = (&'a N, &'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (edge, value) = self.inner.next()?;
        Some((&edge.tail, &edge.head, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over one node's outgoing `(head, value)` pairs in an
/// [`AdjacencyGraph`].
pub struct Neighbors<'a, N, V> {
    tail: Option<&'a N>,
    heads: Option<hash_set::Iter<'a, N>>,
    values: &'a HashMap<Edge<N>, V>,
}

impl<'a, N: Clone + Eq + Hash, V> Iterator for Neighbors<'a, N, V> {
    type Item = (&'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.heads.as_mut()?.next()?;
        let tail = self.tail?;
        let value = self
            .values
            .get(&Edge::new(tail.clone(), head.clone()))
            .unwrap_or_else(|| unreachable!("every adjacency entry has a value"));
        Some((head, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heads
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyGraph<&'static str, u32> {
        let mut graph = AdjacencyGraph::new();
        graph.add_nodes(["a", "b", "c"]).unwrap();
        graph.set_edge("a", "b", 1).unwrap();
        graph.set_edge("b", "c", 2).unwrap();
        graph.set_edge("c", "a", 3).unwrap();
        graph
    }

    #[test]
    fn test_reverse_index_tracks_edges() {
        let mut graph = sample();
        graph.remove_node(&"b").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&"c", &"a"));
        assert!(!graph.contains_edge(&"a", &"b"));
    }

    #[test]
    fn test_self_loop_removed_once() {
        let mut graph = AdjacencyGraph::from_nodes(["x"]);
        graph.set_edge("x", "x", 9).unwrap();
        assert_eq!(graph.edge_count(), 1);
        graph.remove_node(&"x").unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_of_absent_node_is_empty() {
        let graph = sample();
        assert_eq!(graph.neighbors(&"zz").count(), 0);
        assert_eq!(graph.outdegree(&"zz"), 0);
    }

    #[test]
    fn test_equality_ignores_reverse_layout() {
        let mut left = sample();
        let right = sample();
        assert_eq!(left, right);
        left.set_edge("a", "b", 7).unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn test_from_adjacency_lifts_inner_heads() {
        let mut rows = HashMap::new();
        rows.insert("a", HashMap::from([("b", 1)]));
        let graph: AdjacencyGraph<_, _> = rows.into();
        assert!(graph.contains_node(&"b"));
        assert_eq!(graph.get_edge(&"a", &"b").unwrap(), &1);
    }

    #[test]
    fn test_triple_collect() {
        let graph: AdjacencyGraph<_, _> =
            [("a", "b", 1), ("a", "c", 2)].into_iter().collect();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.outdegree(&"a"), 2);
    }
}
