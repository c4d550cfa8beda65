//! Node-capacity wrapper.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::adjacency::Adjacency;
use crate::error::GraphError;
use crate::graph::Graph;

/// Wrapper that caps the number of nodes.
///
/// Any operation that would push the node count past the configured
/// capacity fails as [`GraphError::AtCapacity`]. Adding a node that is
/// already present never counts against the cap, and edges are unlimited;
/// only node growth is policed.
///
/// Bulk operations pre-count the distinct nodes they would add and refuse
/// atomically: a refused [`set_adjacency`](Graph::set_adjacency),
/// [`merge_from`](Graph::merge_from) or [`add_nodes`](Graph::add_nodes)
/// leaves the graph exactly as it was. For that atomicity to hold when
/// composing wrappers, `Bounded` goes outermost.
///
/// # Example
///
/// ```
/// use edgemap::{AdjacencyGraph, Bounded, Graph, GraphError};
///
/// let mut graph = Bounded::new(AdjacencyGraph::<&str, u32>::new(), 2)?;
/// graph.add_node("a")?;
/// graph.add_node("b")?;
///
/// assert_eq!(graph.add_node("c"), Err(GraphError::AtCapacity(2)));
/// assert!(graph.add_node("a").is_ok());
///
/// graph.remove_node(&"a")?;
/// assert!(graph.add_node("c").is_ok());
/// # Ok::<(), edgemap::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounded<G> {
    inner: G,
    capacity: usize,
}

impl<G: Graph> Bounded<G> {
    /// Wraps `inner` with a node-count ceiling of `capacity`.
    ///
    /// Fails as [`GraphError::InvalidConfiguration`] if the graph already
    /// holds more than `capacity` nodes.
    pub fn new(inner: G, capacity: usize) -> Result<Self, GraphError> {
        if inner.node_count() > capacity {
            return Err(GraphError::InvalidConfiguration(format!(
                "capacity {capacity} is below the current node count {}",
                inner.node_count()
            )));
        }
        Ok(Self { inner, capacity })
    }

    /// The configured node-count ceiling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shared access to the wrapped graph.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Unwraps, returning the inner graph without its cap.
    pub fn into_inner(self) -> G {
        self.inner
    }

    fn check_room_for(&self, additional: usize) -> Result<(), GraphError> {
        if self.inner.node_count() + additional > self.capacity {
            return Err(GraphError::AtCapacity(self.capacity));
        }
        Ok(())
    }
}

impl<G: Graph> Graph for Bounded<G> {
    type Node = G::Node;
    type Value = G::Value;
    type Nodes<'a>
        = G::Nodes<'a>
    where
        Self: 'a;
    type Items<'a>
        = G::Items<'a>
    where
        Self: 'a;
    type Neighbors<'a>
        = G::Neighbors<'a>
    where
        Self: 'a;

    fn contains_node(&self, node: &Self::Node) -> bool {
        self.inner.contains_node(node)
    }

    fn contains_edge(&self, tail: &Self::Node, head: &Self::Node) -> bool {
        self.inner.contains_edge(tail, head)
    }

    fn get_edge(&self, tail: &Self::Node, head: &Self::Node) -> Result<&Self::Value, GraphError> {
        self.inner.get_edge(tail, head)
    }

    fn add_node(&mut self, node: Self::Node) -> Result<(), GraphError> {
        if !self.inner.contains_node(&node) {
            self.check_room_for(1)?;
        }
        self.inner.add_node(node)
    }

    fn set_edge(
        &mut self,
        tail: Self::Node,
        head: Self::Node,
        value: Self::Value,
    ) -> Result<(), GraphError> {
        // Both endpoints must already exist, so no node can be created.
        self.inner.set_edge(tail, head, value)
    }

    fn remove_node(&mut self, node: &Self::Node) -> Result<(), GraphError> {
        self.inner.remove_node(node)
    }

    fn remove_edge(
        &mut self,
        tail: &Self::Node,
        head: &Self::Node,
    ) -> Result<Self::Value, GraphError> {
        self.inner.remove_edge(tail, head)
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn iter_nodes(&self) -> Self::Nodes<'_> {
        self.inner.iter_nodes()
    }

    fn iter_items(&self) -> Self::Items<'_> {
        self.inner.iter_items()
    }

    fn neighbors(&self, node: &Self::Node) -> Self::Neighbors<'_> {
        self.inner.neighbors(node)
    }

    fn outdegree(&self, node: &Self::Node) -> usize {
        self.inner.outdegree(node)
    }

    fn set_adjacency(
        &mut self,
        node: Self::Node,
        adjacency: Adjacency<Self::Node, Self::Value>,
    ) -> Result<(), GraphError> {
        let additional = match &adjacency {
            Adjacency::Invalid => 0,
            Adjacency::MarkPresent => usize::from(!self.inner.contains_node(&node)),
            Adjacency::Edges(entries) => {
                usize::from(!self.inner.contains_node(&node))
                    + entries
                        .keys()
                        .filter(|head| **head != node && !self.inner.contains_node(head))
                        .count()
            }
        };
        self.check_room_for(additional)?;
        self.inner.set_adjacency(node, adjacency)
    }

    fn merge_from<G2>(&mut self, other: &G2) -> Result<(), GraphError>
    where
        G2: Graph<Node = Self::Node, Value = Self::Value>,
    {
        let fresh = other
            .iter_nodes()
            .filter(|node| !self.inner.contains_node(node))
            .count();
        self.check_room_for(fresh)?;
        self.inner.merge_from(other)
    }

    fn add_nodes<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Self::Node>,
    {
        let nodes: Vec<Self::Node> = nodes.into_iter().collect();
        let fresh: HashSet<&Self::Node> = nodes
            .iter()
            .filter(|node| !self.inner.contains_node(node))
            .collect();
        self.check_room_for(fresh.len())?;
        drop(fresh);
        self.inner.add_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AdjacencyGraph;

    #[test]
    fn test_rejects_undersized_capacity() {
        let inner: AdjacencyGraph<&str, ()> = AdjacencyGraph::from_nodes(["a", "b", "c"]);
        assert!(matches!(
            Bounded::new(inner, 2),
            Err(GraphError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_readding_present_node_at_capacity() {
        let inner: AdjacencyGraph<&str, ()> = AdjacencyGraph::from_nodes(["a", "b"]);
        let mut graph = Bounded::new(inner, 2).unwrap();
        assert!(graph.add_node("a").is_ok());
        assert_eq!(graph.add_node("c"), Err(GraphError::AtCapacity(2)));
    }

    #[test]
    fn test_bulk_refusal_is_atomic() {
        let inner: AdjacencyGraph<&str, u32> = AdjacencyGraph::from_nodes(["a"]);
        let mut graph = Bounded::new(inner, 2).unwrap();
        let result = graph.add_nodes(["b", "c", "d"]);
        assert_eq!(result, Err(GraphError::AtCapacity(2)));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicates_in_bulk_add_count_once() {
        let inner: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        let mut graph = Bounded::new(inner, 2).unwrap();
        graph.add_nodes(["a", "a", "b", "a"]).unwrap();
        assert_eq!(graph.node_count(), 2);
    }
}
