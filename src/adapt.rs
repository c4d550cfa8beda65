//! Adapter giving plain nested maps the graph interface.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::render;

/// A nested `node -> (head -> value)` map behaving as a graph.
///
/// `MapGraph` takes ownership of an ordinary nested [`HashMap`] and makes
/// it usable wherever a [`Graph`] is expected, including under the
/// wrappers in [`wrap`](crate::wrap). Adoption normalizes the map: heads
/// that appear only inside inner maps gain an empty row of their own, so
/// the edge-endpoint invariant holds from the first operation.
///
/// The row layout carries no incoming-edge index, so
/// [`remove_node`](Graph::remove_node) scans every row. This is the
/// adapter's trade-off; for removal-heavy workloads convert into a storage
/// engine with
/// [`AdjacencyGraph::from_graph`](crate::AdjacencyGraph::from_graph).
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use edgemap::{Graph, MapGraph};
///
/// let mut rows = HashMap::new();
/// rows.insert("a", HashMap::from([("b", 1)]));
///
/// let graph = MapGraph::adapt(rows);
/// assert!(graph.contains_node(&"b"));
/// assert_eq!(graph.get_edge(&"a", &"b")?, &1);
/// # Ok::<(), edgemap::GraphError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de> + Clone + Eq + Hash, V: Deserialize<'de>"))]
pub struct MapGraph<N, V> {
    rows: HashMap<N, HashMap<N, V>>,
    edges: usize,
}

impl<N: Clone + Eq + Hash, V: Clone> MapGraph<N, V> {
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            edges: 0,
        }
    }

    /// Adopts a nested map, normalizing it into a well-formed graph.
    pub fn adapt(rows: HashMap<N, HashMap<N, V>>) -> Self {
        let mut graph = Self {
            rows,
            edges: 0,
        };
        let heads: Vec<N> = graph
            .rows
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect();
        for head in heads {
            graph.rows.entry(head).or_default();
        }
        graph.edges = graph.rows.values().map(HashMap::len).sum();
        graph
    }

    /// Unwraps, returning the underlying nested map.
    pub fn into_inner(self) -> HashMap<N, HashMap<N, V>> {
        self.rows
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Graph for MapGraph<N, V> {
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
        self.rows.entry(node).or_default();
        Ok(())
    }

    fn set_edge(&mut self, tail: N, head: N, value: V) -> Result<(), GraphError> {
        if !self.rows.contains_key(&tail) || !self.rows.contains_key(&head) {
            return Err(GraphError::MissingNode);
        }
        let row = self
            .rows
            .get_mut(&tail)
            .unwrap_or_else(|| unreachable!("presence checked above"));
        if row.insert(head, value).is_none() {
            self.edges += 1;
        }
        Ok(())
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

    fn remove_edge(&mut self, tail: &N, head: &N) -> Result<V, GraphError> {
        let value = self
            .rows
            .get_mut(tail)
            .and_then(|row| row.remove(head))
            .ok_or(GraphError::MissingEdge)?;
        self.edges -= 1;
        Ok(value)
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

impl<N: Clone + Eq + Hash, V: Clone + PartialEq> PartialEq for MapGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Default for MapGraph<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V> fmt::Debug for MapGraph<N, V>
where
    N: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_graph(f, "MapGraph", self)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> From<HashMap<N, HashMap<N, V>>> for MapGraph<N, V> {
    fn from(rows: HashMap<N, HashMap<N, V>>) -> Self {
        Self::adapt(rows)
    }
}

/// Iterator over a [`MapGraph`]'s edge triples.
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
/// [`MapGraph`].
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
