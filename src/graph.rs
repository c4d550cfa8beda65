//! The capability-set contract shared by all graph implementations.

use std::hash::Hash;

use crate::adjacency::Adjacency;
use crate::error::GraphError;
use crate::view::{AdjacencyView, EdgeView, ItemView, NodeView, ValueView};

/// The operation set a type must expose to be treated as a graph.
///
/// A graph is a dual-keyed container: a bare node key addresses a node
/// record, a `(tail, head)` pair addresses a directed edge and its value.
/// Nodes behave like members of a set, edges like entries of a map. Any type
/// implementing this trait (the built-in storage engines, the wrappers in
/// [`wrap`](crate::wrap), or an adapted external container) is usable
/// interchangeably by generic code and by the view layer.
///
/// Implementors provide the primitive operations; the derived operation set
/// (views, discards, defaults, bulk merges) is supplied as provided methods
/// routed through the primitives, so a wrapper that intercepts the
/// primitives automatically governs the bulk operations as well.
///
/// # Invariants
///
/// Every implementation guarantees:
///
/// 1. Both endpoints of every edge exist as nodes.
/// 2. An edge value exists exactly as long as its edge exists.
/// 3. Removing a node removes every edge where it is tail or head, and their
///    values, as one indivisible step.
/// 4. The node collection is a true set.
///
/// # Example
///
/// ```
/// use edgemap::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::from_nodes(["NY", "LA"]);
/// graph.set_edge("NY", "LA", 5)?;
///
/// assert_eq!(graph.get_edge(&"NY", &"LA")?, &5);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
///
/// graph.remove_node(&"NY")?;
/// assert!(graph.contains_node(&"LA"));
/// assert!(!graph.contains_edge(&"NY", &"LA"));
/// # Ok::<(), edgemap::GraphError>(())
/// ```
pub trait Graph {
    /// Node key type. Identity is the value's own equality.
    type Node: Clone + Eq + Hash;
    /// Edge value type.
    type Value: Clone;
    /// Iterator over the graph's nodes.
    type Nodes<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;
    /// Iterator over the graph's `(tail, head, value)` triples.
    type Items<'a>: Iterator<Item = (&'a Self::Node, &'a Self::Node, &'a Self::Value)>
    where
        Self: 'a;
    /// Iterator over one node's outgoing `(head, value)` pairs.
    type Neighbors<'a>: Iterator<Item = (&'a Self::Node, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns `true` if `node` is in the graph. Never fails.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Returns `true` if the edge from `tail` to `head` is in the graph.
    /// Never fails.
    fn contains_edge(&self, tail: &Self::Node, head: &Self::Node) -> bool;

    /// Returns the value stored on the edge from `tail` to `head`.
    ///
    /// Fails as [`GraphError::MissingEdge`] if the edge does not exist.
    fn get_edge(&self, tail: &Self::Node, head: &Self::Node) -> Result<&Self::Value, GraphError>;

    /// Adds `node` to the graph. Idempotent: adding a present node succeeds
    /// and changes nothing.
    ///
    /// The `Result` exists for decorated graphs: core storage never fails,
    /// but a capacity wrapper may refuse with [`GraphError::AtCapacity`].
    fn add_node(&mut self, node: Self::Node) -> Result<(), GraphError>;

    /// Sets or overwrites the value of the edge from `tail` to `head`,
    /// adding `head` to `tail`'s adjacency.
    ///
    /// Fails as [`GraphError::MissingNode`] if either endpoint is absent.
    fn set_edge(
        &mut self,
        tail: Self::Node,
        head: Self::Node,
        value: Self::Value,
    ) -> Result<(), GraphError>;

    /// Removes `node` together with every edge where it is tail or head,
    /// and their values, as one indivisible step.
    ///
    /// Fails as [`GraphError::MissingNode`] if the node is absent, in which
    /// case nothing changes.
    fn remove_node(&mut self, node: &Self::Node) -> Result<(), GraphError>;

    /// Removes the edge from `tail` to `head` and returns its value.
    ///
    /// Fails as [`GraphError::MissingEdge`] if the edge is absent.
    fn remove_edge(
        &mut self,
        tail: &Self::Node,
        head: &Self::Node,
    ) -> Result<Self::Value, GraphError>;

    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Number of stored edge values.
    fn edge_count(&self) -> usize;

    /// Removes all nodes, edges and values.
    fn clear(&mut self);

    /// Iterates the graph's nodes in arbitrary order.
    fn iter_nodes(&self) -> Self::Nodes<'_>;

    /// Iterates the graph's `(tail, head, value)` triples in arbitrary
    /// order.
    fn iter_items(&self) -> Self::Items<'_>;

    /// Iterates `node`'s outgoing `(head, value)` pairs. Empty if `node` is
    /// not in the graph.
    fn neighbors(&self, node: &Self::Node) -> Self::Neighbors<'_>;

    /// Returns `true` if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Number of outgoing edges at `node`; zero if the node is absent.
    ///
    /// Implementations override this with a constant-time lookup.
    fn outdegree(&self, node: &Self::Node) -> usize {
        self.neighbors(node).count()
    }

    /// Looks up `node` and returns a live view of its adjacency.
    ///
    /// Fails as [`GraphError::MissingNode`] if the node is absent.
    fn adjacency(&self, node: &Self::Node) -> Result<AdjacencyView<'_, Self>, GraphError>
    where
        Self: Sized,
    {
        if self.contains_node(node) {
            Ok(AdjacencyView::new(self, node.clone()))
        } else {
            Err(GraphError::MissingNode)
        }
    }

    /// Assigns an [`Adjacency`] value to `node`.
    ///
    /// [`Adjacency::MarkPresent`] ensures the node exists and leaves its
    /// edges untouched. [`Adjacency::Edges`] ensures the node exists, then
    /// replaces its outgoing adjacency: existing outgoing edges are removed,
    /// each head is added to the graph as needed, and each entry becomes an
    /// edge. [`Adjacency::Invalid`] fails as
    /// [`GraphError::InvalidAdjacency`] before any state is touched.
    fn set_adjacency(
        &mut self,
        node: Self::Node,
        adjacency: Adjacency<Self::Node, Self::Value>,
    ) -> Result<(), GraphError>
    where
        Self: Sized,
    {
        match adjacency {
            Adjacency::Invalid => Err(GraphError::InvalidAdjacency),
            Adjacency::MarkPresent => self.add_node(node),
            Adjacency::Edges(entries) => {
                self.add_node(node.clone())?;
                let stale: Vec<Self::Node> = self
                    .neighbors(&node)
                    .map(|(head, _)| head.clone())
                    .collect();
                for head in stale {
                    self.remove_edge(&node, &head)?;
                }
                for (head, value) in entries {
                    self.add_node(head.clone())?;
                    self.set_edge(node.clone(), head, value)?;
                }
                Ok(())
            }
        }
    }

    /// Removes `node` if it is a member; absence is success.
    ///
    /// Returns `true` if the node was present and has been removed.
    fn discard_node(&mut self, node: &Self::Node) -> bool {
        self.remove_node(node).is_ok()
    }

    /// Removes the edge from `tail` to `head` if it is a member; absence is
    /// success. Returns the removed value, if any.
    fn discard_edge(&mut self, tail: &Self::Node, head: &Self::Node) -> Option<Self::Value> {
        self.remove_edge(tail, head).ok()
    }

    /// Returns the value of the edge from `tail` to `head`, or `default` if
    /// the edge is absent. Never fails.
    fn edge_or<'a>(
        &'a self,
        tail: &Self::Node,
        head: &Self::Node,
        default: &'a Self::Value,
    ) -> &'a Self::Value {
        self.get_edge(tail, head).unwrap_or(default)
    }

    /// Merges the nodes, edges and values of `other` into this graph.
    ///
    /// Entries unique to this graph are never removed; edges present in both
    /// take `other`'s value. Routed through [`add_node`](Graph::add_node)
    /// and [`set_edge`](Graph::set_edge), so wrapper invariants apply.
    fn merge_from<G>(&mut self, other: &G) -> Result<(), GraphError>
    where
        G: Graph<Node = Self::Node, Value = Self::Value>,
        Self: Sized,
    {
        for node in other.iter_nodes() {
            self.add_node(node.clone())?;
        }
        for (tail, head, value) in other.iter_items() {
            self.set_edge(tail.clone(), head.clone(), value.clone())?;
        }
        Ok(())
    }

    /// Adds every node from an iterable; existing nodes are untouched.
    fn add_nodes<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Self::Node>,
        Self: Sized,
    {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Returns a live view of the graph's nodes.
    fn nodes(&self) -> NodeView<'_, Self>
    where
        Self: Sized,
    {
        NodeView::new(self)
    }

    /// Returns a live view of the graph's edges as `(tail, head)` pairs.
    fn edges(&self) -> EdgeView<'_, Self>
    where
        Self: Sized,
    {
        EdgeView::new(self)
    }

    /// Returns a live view of the graph's edge values, duplicates
    /// preserved.
    fn values(&self) -> ValueView<'_, Self>
    where
        Self: Sized,
    {
        ValueView::new(self)
    }

    /// Returns a live view of the graph's `(tail, head, value)` triples.
    fn items(&self) -> ItemView<'_, Self>
    where
        Self: Sized,
    {
        ItemView::new(self)
    }
}
