//! Symmetric-edge wrapper.

use crate::error::GraphError;
use crate::graph::Graph;

/// Wrapper that keeps every edge symmetric.
///
/// Setting the edge from `a` to `b` also sets the edge from `b` to `a`
/// with a clone of the value; removing one direction removes both. Loops
/// are their own mirror and are stored once. Reads are untouched, so both
/// orientations are visible and [`edge_count`](Graph::edge_count) reports
/// stored values: a symmetric pair counts as two, a loop as one.
///
/// # Example
///
/// ```
/// use edgemap::{AdjacencyGraph, Graph, Undirected};
///
/// let mut graph = Undirected::new(AdjacencyGraph::from_nodes(["a", "b"]))?;
/// graph.set_edge("a", "b", 7)?;
///
/// assert_eq!(graph.get_edge(&"b", &"a")?, &7);
/// assert_eq!(graph.edge_count(), 2);
///
/// graph.remove_edge(&"b", &"a")?;
/// assert!(!graph.contains_edge(&"a", &"b"));
/// # Ok::<(), edgemap::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Undirected<G> {
    inner: G,
}

impl<G: Graph> Undirected<G>
where
    G::Value: PartialEq,
{
    /// Wraps `inner`, first making its existing edges symmetric.
    ///
    /// Each one-directional edge gains its mirror with a clone of the
    /// value. Fails as [`GraphError::InvalidConfiguration`] if an edge and
    /// its mirror already exist with different values; the conflict check
    /// runs before any mirror is written.
    pub fn new(inner: G) -> Result<Self, GraphError> {
        let mut missing: Vec<(G::Node, G::Node, G::Value)> = Vec::new();
        for (tail, head, value) in inner.iter_items() {
            if tail == head {
                continue;
            }
            match inner.get_edge(head, tail) {
                Ok(mirror) if mirror == value => {}
                Ok(_) => {
                    return Err(GraphError::InvalidConfiguration(
                        "cannot enforce symmetry: edge and its mirror carry different values"
                            .into(),
                    ));
                }
                Err(_) => missing.push((head.clone(), tail.clone(), value.clone())),
            }
        }
        let mut inner = inner;
        for (tail, head, value) in missing {
            inner.set_edge(tail, head, value)?;
        }
        Ok(Self { inner })
    }
}

impl<G> Undirected<G> {
    /// Shared access to the wrapped graph.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Unwraps, returning the inner graph. Its edges stay symmetric until
    /// mutated directly.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Graph> Graph for Undirected<G> {
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
        self.inner.add_node(node)
    }

    fn set_edge(
        &mut self,
        tail: Self::Node,
        head: Self::Node,
        value: Self::Value,
    ) -> Result<(), GraphError> {
        if tail == head {
            return self.inner.set_edge(tail, head, value);
        }
        self.inner
            .set_edge(tail.clone(), head.clone(), value.clone())?;
        self.inner.set_edge(head, tail, value)
    }

    fn remove_node(&mut self, node: &Self::Node) -> Result<(), GraphError> {
        self.inner.remove_node(node)
    }

    fn remove_edge(
        &mut self,
        tail: &Self::Node,
        head: &Self::Node,
    ) -> Result<Self::Value, GraphError> {
        let value = self.inner.remove_edge(tail, head)?;
        if tail != head {
            self.inner.discard_edge(head, tail);
        }
        Ok(value)
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
}
