//! Graphs whose edge values come from a distance function.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::render;

/// A complete graph over a node set, with edge values computed by a
/// distance function.
///
/// Callers manage only the node set; every ordered pair of distinct nodes
/// is an edge, and its value is `distance(tail, head)`, computed once when
/// the pair first coexists and stored for lookup. A symmetric function
/// yields mirrored values; an asymmetric one yields directed ones.
///
/// Edges are derived, so [`set_edge`](Graph::set_edge) and
/// [`remove_edge`](Graph::remove_edge) fail as
/// [`GraphError::ReadOnlyEdges`] and the edge set changes only through
/// node mutation. With `n` nodes the graph holds `n * (n - 1)` edges;
/// adding a node computes a distance to and from every existing node.
///
/// # Example
///
/// ```
/// use edgemap::{DistanceGraph, Graph};
///
/// let mut grid = DistanceGraph::new(|a: &i64, b: &i64| (a - b).unsigned_abs());
/// grid.add_nodes([2, 5, 9])?;
///
/// assert_eq!(grid.get_edge(&2, &9)?, &7);
/// assert_eq!(grid.edge_count(), 6);
///
/// grid.remove_node(&5)?;
/// assert_eq!(grid.edge_count(), 2);
/// # Ok::<(), edgemap::GraphError>(())
/// ```
#[derive(Clone)]
pub struct DistanceGraph<N, V, F> {
    distance: F,
    rows: HashMap<N, HashMap<N, V>>,
    edges: usize,
}

impl<N, V, F> DistanceGraph<N, V, F>
where
    N: Clone + Eq + Hash,
    V: Clone,
    F: Fn(&N, &N) -> V,
{
    /// Creates an empty graph around `distance`.
    pub fn new(distance: F) -> Self {
        Self {
            distance,
            rows: HashMap::new(),
            edges: 0,
        }
    }

    /// Creates a graph holding the given nodes, with all pairwise values
    /// computed up front.
    pub fn with_nodes<I>(distance: F, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new(distance);
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    /// The distance function the edge values come from.
    pub fn distance_fn(&self) -> &F {
        &self.distance
    }

    fn insert_node(&mut self, node: N) {
        if self.rows.contains_key(&node) {
            return;
        }
        let others: Vec<N> = self.rows.keys().cloned().collect();
        let mut row = HashMap::with_capacity(others.len());
        for other in others {
            row.insert(other.clone(), (self.distance)(&node, &other));
            let back = (self.distance)(&other, &node);
            if let Some(other_row) = self.rows.get_mut(&other) {
                other_row.insert(node.clone(), back);
            }
            self.edges += 2;
        }
        self.rows.insert(node, row);
    }
}

impl<N, V, F> Graph for DistanceGraph<N, V, F>
where
    N: Clone + Eq + Hash,
    V: Clone,
    F: Fn(&N, &N) -> V,
{
    type Node = N;
    type Value = V;
    type Nodes<'a>
        = hash_map::Keys<'a, N, HashMap<N, V>>
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
        self.rows.contains_key(node)
    }

    fn contains_edge(&self, tail: &N, head: &N) -> bool {
        self.rows.get(tail).is_some_and(|row| row.contains_key(head))
    }

    fn get_edge(&self, tail: &N, head: &N) -> Result<&V, GraphError> {
        self.rows
            .get(tail)
            .and_then(|row| row.get(head))
            .ok_or(GraphError::MissingEdge)
    }

    fn add_node(&mut self, node: N) -> Result<(), GraphError> {
        self.insert_node(node);
        Ok(())
    }

    fn set_edge(&mut self, _tail: N, _head: N, _value: V) -> Result<(), GraphError> {
        Err(GraphError::ReadOnlyEdges)
    }

    fn remove_node(&mut self, node: &N) -> Result<(), GraphError> {
        let Some(row) = self.rows.remove(node) else {
            return Err(GraphError::MissingNode);
        };
        self.edges -= row.len();
        for other in self.rows.values_mut() {
            if other.remove(node).is_some() {
                self.edges -= 1;
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, _tail: &N, _head: &N) -> Result<V, GraphError> {
        Err(GraphError::ReadOnlyEdges)
    }

    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.edges = 0;
    }

    fn iter_nodes(&self) -> Self::Nodes<'_> {
        self.rows.keys()
    }

    fn iter_items(&self) -> Self::Items<'_> {
        Items {
            rows: self.rows.iter(),
            current: None,
        }
    }

    fn neighbors(&self, node: &N) -> Self::Neighbors<'_> {
        Neighbors {
            inner: self.rows.get(node).map(HashMap::iter),
        }
    }

    fn outdegree(&self, node: &N) -> usize {
        self.rows.get(node).map_or(0, HashMap::len)
    }
}

impl<N, V, F> fmt::Debug for DistanceGraph<N, V, F>
where
    N: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
    F: Fn(&N, &N) -> V,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_graph(f, "DistanceGraph", self)
    }
}

impl<N, V, F> Extend<N> for DistanceGraph<N, V, F>
where
    N: Clone + Eq + Hash,
    V: Clone,
    F: Fn(&N, &N) -> V,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.insert_node(node);
        }
    }
}

/// Iterator over a [`DistanceGraph`]'s edge triples.
pub struct Items<'a, N, V> {
    rows: hash_map::Iter<'a, N, HashMap<N, V>>,
    current: Option<(&'a N, hash_map::Iter<'a, N, V>)>,
}

impl<'a, N, V> Iterator for Items<'a, N, V> {
    type Item = (&'a N, &'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((tail, row)) = &mut self.current {
                if let Some((head, value)) = row.next() {
                    return Some((tail, head, value));
                }
            }
            let (tail, row) = self.rows.next()?;
            self.current = Some((tail, row.iter()));
        }
    }
}

/// Iterator over one node's outgoing `(head, value)` pairs in a
/// [`DistanceGraph`].
pub struct Neighbors<'a, N, V> {
    inner: Option<hash_map::Iter<'a, N, V>>,
}

impl<'a, N, V> Iterator for Neighbors<'a, N, V> {
    type Item = (&'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}
