//! Live, borrowing views over a graph's collections.
//!
//! A view holds a shared borrow of its graph and computes nothing at
//! construction. Iteration and membership checks read the graph's state at
//! the moment they are called, so a view taken before a mutation (once the
//! borrow allows it) observes the graph as it is, not as it was.

use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;

/// Live view of a graph's node set.
///
/// Obtained from [`Graph::nodes`].
pub struct NodeView<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> NodeView<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns `true` if `node` is in the graph.
    pub fn contains(&self, node: &G::Node) -> bool {
        self.graph.contains_node(node)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterates the nodes in arbitrary order.
    pub fn iter(&self) -> G::Nodes<'g> {
        self.graph.iter_nodes()
    }
}

impl<'g, G: Graph> IntoIterator for &NodeView<'g, G> {
    type Item = &'g G::Node;
    type IntoIter = G::Nodes<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Live view of a graph's edges as `(tail, head)` pairs.
///
/// Obtained from [`Graph::edges`].
pub struct EdgeView<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> EdgeView<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns `true` if the edge from `tail` to `head` is in the graph.
    pub fn contains(&self, tail: &G::Node, head: &G::Node) -> bool {
        self.graph.contains_edge(tail, head)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Iterates the edges in arbitrary order.
    pub fn iter(&self) -> EdgeIter<'g, G> {
        EdgeIter {
            items: self.graph.iter_items(),
        }
    }
}

impl<'g, G: Graph> IntoIterator for &EdgeView<'g, G> {
    type Item = Edge<&'g G::Node>;
    type IntoIter = EdgeIter<'g, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a graph's edges as borrowed [`Edge`] pairs.
pub struct EdgeIter<'g, G: Graph + 'g> {
    items: G::Items<'g>,
}

impl<'g, G: Graph + 'g> Iterator for EdgeIter<'g, G> {
    type Item = Edge<&'g G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let (tail, head, _) = self.items.next()?;
        Some(Edge { tail, head })
    }
}

/// Live view of a graph's edge values, duplicates preserved.
///
/// Obtained from [`Graph::values`]. Equal values on distinct edges appear
/// once per edge.
pub struct ValueView<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> ValueView<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns `true` if some edge carries `value`. Linear scan.
    pub fn contains(&self, value: &G::Value) -> bool
    where
        G::Value: PartialEq,
    {
        self.graph.iter_items().any(|(_, _, v)| v == value)
    }

    /// Number of stored values, one per edge.
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Iterates the values in arbitrary order.
    pub fn iter(&self) -> ValueIter<'g, G> {
        ValueIter {
            items: self.graph.iter_items(),
        }
    }
}

impl<'g, G: Graph> IntoIterator for &ValueView<'g, G> {
    type Item = &'g G::Value;
    type IntoIter = ValueIter<'g, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a graph's edge values.
pub struct ValueIter<'g, G: Graph + 'g> {
    items: G::Items<'g>,
}

impl<'g, G: Graph + 'g> Iterator for ValueIter<'g, G> {
    type Item = &'g G::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, _, value) = self.items.next()?;
        Some(value)
    }
}

/// Live view of a graph's `(tail, head, value)` triples.
///
/// Obtained from [`Graph::items`].
pub struct ItemView<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> ItemView<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns `true` if the edge from `tail` to `head` carries `value`.
    pub fn contains(&self, tail: &G::Node, head: &G::Node, value: &G::Value) -> bool
    where
        G::Value: PartialEq,
    {
        self.graph.get_edge(tail, head) == Ok(value)
    }

    /// Number of triples, one per edge.
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Iterates the triples in arbitrary order.
    pub fn iter(&self) -> G::Items<'g> {
        self.graph.iter_items()
    }
}

impl<'g, G: Graph> IntoIterator for &ItemView<'g, G> {
    type Item = (&'g G::Node, &'g G::Node, &'g G::Value);
    type IntoIter = G::Items<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Live view of one node's outgoing adjacency.
///
/// Obtained from [`Graph::adjacency`], which verifies the node exists. The
/// shared borrow keeps the graph immutable for the view's lifetime, so the
/// anchor node cannot disappear underneath it.
pub struct AdjacencyView<'g, G: Graph> {
    graph: &'g G,
    node: G::Node,
}

impl<'g, G: Graph> AdjacencyView<'g, G> {
    pub(crate) fn new(graph: &'g G, node: G::Node) -> Self {
        Self { graph, node }
    }

    /// The node this view is anchored at.
    pub fn node(&self) -> &G::Node {
        &self.node
    }

    /// Returns the value on the edge from this node to `head`.
    ///
    /// Fails as [`GraphError::MissingEdge`] if there is no such edge.
    pub fn value(&self, head: &G::Node) -> Result<&'g G::Value, GraphError> {
        self.graph.get_edge(&self.node, head)
    }

    /// Returns `true` if this node has an edge to `head`.
    pub fn contains(&self, head: &G::Node) -> bool {
        self.graph.contains_edge(&self.node, head)
    }

    /// Number of outgoing edges at this node.
    pub fn len(&self) -> usize {
        self.graph.outdegree(&self.node)
    }

    /// Returns `true` if this node has no outgoing edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates this node's outgoing `(head, value)` pairs.
    pub fn iter(&self) -> G::Neighbors<'g> {
        self.graph.neighbors(&self.node)
    }
}

impl<'g, G: Graph> IntoIterator for &AdjacencyView<'g, G> {
    type Item = (&'g G::Node, &'g G::Value);
    type IntoIter = G::Neighbors<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
