//! Arena-backed storage engine.

use std::collections::{hash_map, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter::Enumerate;
use std::mem;
use std::slice;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::render;

/// Arena-backed storage engine with interned nodes.
///
/// Each node is interned once into a dense arena and addressed by slot
/// index everywhere else: adjacency rows are `slot -> value` maps and the
/// incoming index is a set of slots. Edge operations hash the node value
/// once to find its slot, then work on integers, so large node values are
/// stored once rather than once per edge.
///
/// Node removal keeps the arena dense by moving the last slot into the
/// vacated one and renumbering the moved node's cross references. This
/// makes removal cost proportional to the degrees of the removed and moved
/// nodes, and it means slot numbers are internal and unstable; the public
/// interface speaks node values only.
///
/// This is the general-purpose default engine (see
/// [`DefaultGraph`](crate::DefaultGraph)). For direct serde support or
/// heavy node churn, prefer [`AdjacencyGraph`](crate::AdjacencyGraph);
/// conversion in both directions goes through
/// [`from_graph`](CompactGraph::from_graph).
#[derive(Clone)]
pub struct CompactGraph<N, V> {
    index: HashMap<N, usize>,
    nodes: Vec<N>,
    out: Vec<HashMap<usize, V>>,
    incoming: Vec<HashSet<usize>>,
    edges: usize,
}

impl<N: Clone + Eq + Hash, V: Clone> CompactGraph<N, V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            out: Vec::new(),
            incoming: Vec::new(),
            edges: 0,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes before the arena
    /// reallocates.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            out: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(nodes),
            edges: 0,
        }
    }

    /// Creates a graph holding the given nodes and no edges.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.intern(node);
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
            graph.intern(node.clone());
        }
        for (tail, head, value) in other.iter_items() {
            let ti = graph.index[tail];
            let hi = graph.index[head];
            graph.put_edge(ti, hi, value.clone());
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
            graph.intern(node.clone());
        }
        for (tail, row) in rows {
            let ti = graph.index[&tail];
            for (head, value) in row {
                let hi = graph.intern(head);
                graph.put_edge(ti, hi, value);
            }
        }
        graph
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&slot) = self.index.get(&node) {
            return slot;
        }
        let slot = self.nodes.len();
        self.index.insert(node.clone(), slot);
        self.nodes.push(node);
        self.out.push(HashMap::new());
        self.incoming.push(HashSet::new());
        slot
    }

    fn put_edge(&mut self, tail: usize, head: usize, value: V) {
        if self.out[tail].insert(head, value).is_none() {
            self.edges += 1;
        }
        self.incoming[head].insert(tail);
    }

    /// Moves the last slot's rows into the vacated slot `hole`, rewriting
    /// every cross reference to the old slot number.
    fn relocate_last(&mut self, hole: usize) {
        let last = self.nodes.len() - 1;
        let moved_out = mem::take(&mut self.out[last]);
        let moved_in = mem::take(&mut self.incoming[last]);

        for &head in moved_out.keys() {
            if head != last {
                self.incoming[head].remove(&last);
                self.incoming[head].insert(hole);
            }
        }
        for &tail in &moved_in {
            if tail != last {
                if let Some(value) = self.out[tail].remove(&last) {
                    self.out[tail].insert(hole, value);
                }
            }
        }

        // Self-loops referenced the moved slot from inside its own rows.
        self.out[hole] = moved_out
            .into_iter()
            .map(|(head, value)| (if head == last { hole } else { head }, value))
            .collect();
        self.incoming[hole] = moved_in
            .into_iter()
            .map(|tail| if tail == last { hole } else { tail })
            .collect();
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Graph for CompactGraph<N, V> {
    type Node = N;
    type Value = V;
    type Nodes<'a>
        = slice::Iter<'a, N>
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
        self.index.contains_key(node)
    }

    fn contains_edge(&self, tail: &N, head: &N) -> bool {
        match (self.index.get(tail), self.index.get(head)) {
            (Some(&ti), Some(&hi)) => self.out[ti].contains_key(&hi),
            _ => false,
        }
    }

    fn get_edge(&self, tail: &N, head: &N) -> Result<&V, GraphError> {
        let ti = self.index.get(tail).ok_or(GraphError::MissingEdge)?;
        let hi = self.index.get(head).ok_or(GraphError::MissingEdge)?;
        self.out[*ti].get(hi).ok_or(GraphError::MissingEdge)
    }

    fn add_node(&mut self, node: N) -> Result<(), GraphError> {
        self.intern(node);
        Ok(())
    }

    fn set_edge(&mut self, tail: N, head: N, value: V) -> Result<(), GraphError> {
        let ti = *self.index.get(&tail).ok_or(GraphError::MissingNode)?;
        let hi = *self.index.get(&head).ok_or(GraphError::MissingNode)?;
        self.put_edge(ti, hi, value);
        Ok(())
    }

    fn remove_node(&mut self, node: &N) -> Result<(), GraphError> {
        let Some(slot) = self.index.remove(node) else {
            return Err(GraphError::MissingNode);
        };
        let out_row = mem::take(&mut self.out[slot]);
        let in_row = mem::take(&mut self.incoming[slot]);

        self.edges -= out_row.len();
        for &head in out_row.keys() {
            if head != slot {
                self.incoming[head].remove(&slot);
            }
        }
        for &tail in &in_row {
            // The self-loop was already counted with the outgoing row.
            if tail != slot && self.out[tail].remove(&slot).is_some() {
                self.edges -= 1;
            }
        }

        let last = self.nodes.len() - 1;
        if slot != last {
            self.relocate_last(slot);
        }
        self.nodes.swap_remove(slot);
        self.out.pop();
        self.incoming.pop();
        if slot != last {
            self.index.insert(self.nodes[slot].clone(), slot);
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "removed node with {} outgoing and {} incoming edges",
            out_row.len(),
            in_row.len()
        );
        Ok(())
    }

    fn remove_edge(&mut self, tail: &N, head: &N) -> Result<V, GraphError> {
        let ti = *self.index.get(tail).ok_or(GraphError::MissingEdge)?;
        let hi = *self.index.get(head).ok_or(GraphError::MissingEdge)?;
        let value = self.out[ti].remove(&hi).ok_or(GraphError::MissingEdge)?;
        self.incoming[hi].remove(&ti);
        self.edges -= 1;
        Ok(value)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.out.clear();
        self.incoming.clear();
        self.edges = 0;
    }

    fn iter_nodes(&self) -> Self::Nodes<'_> {
        self.nodes.iter()
    }

    fn iter_items(&self) -> Self::Items<'_> {
        Items {
            nodes: &self.nodes,
            rows: self.out.iter().enumerate(),
            current: None,
        }
    }

    fn neighbors(&self, node: &N) -> Self::Neighbors<'_> {
        Neighbors {
            nodes: &self.nodes,
            inner: self.index.get(node).map(|&slot| self.out[slot].iter()),
        }
    }

    fn outdegree(&self, node: &N) -> usize {
        self.index.get(node).map_or(0, |&slot| self.out[slot].len())
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Default for CompactGraph<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V> fmt::Debug for CompactGraph<N, V>
where
    N: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_graph(f, "CompactGraph", self)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> FromIterator<N> for CompactGraph<N, V> {
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<N: Clone + Eq + Hash, V: Clone> FromIterator<(N, N, V)> for CompactGraph<N, V> {
    fn from_iter<I: IntoIterator<Item = (N, N, V)>>(triples: I) -> Self {
        let mut graph = Self::new();
        graph.extend(triples);
        graph
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Extend<N> for CompactGraph<N, V> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.intern(node);
        }
    }
}

impl<N: Clone + Eq + Hash, V: Clone> Extend<(N, N, V)> for CompactGraph<N, V> {
    fn extend<I: IntoIterator<Item = (N, N, V)>>(&mut self, triples: I) {
        for (tail, head, value) in triples {
            let ti = self.intern(tail);
            let hi = self.intern(head);
            self.put_edge(ti, hi, value);
        }
    }
}

impl<N: Clone + Eq + Hash, V: Clone> From<HashMap<N, HashMap<N, V>>> for CompactGraph<N, V> {
    fn from(rows: HashMap<N, HashMap<N, V>>) -> Self {
        Self::from_adjacency(rows)
    }
}

/// Iterator over a [`CompactGraph`]'s edge triples.
pub struct Items<'a, N, V> {
    nodes: &'a [N],
    rows: Enumerate<slice::Iter<'a, HashMap<usize, V>>>,
    current: Option<(usize, hash_map::Iter<'a, usize, V>)>,
}

impl<'a, N, V> Iterator for Items<'a, N, V> {
    type Item = (&'a N, &'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((tail, row)) = &mut self.current {
                if let Some((&head, value)) = row.next() {
                    return Some((&self.nodes[*tail], &self.nodes[head], value));
                }
            }
            let (tail, row) = self.rows.next()?;
            self.current = Some((tail, row.iter()));
        }
    }
}

/// Iterator over one node's outgoing `(head, value)` pairs in a
/// [`CompactGraph`].
pub struct Neighbors<'a, N, V> {
    nodes: &'a [N],
    inner: Option<hash_map::Iter<'a, usize, V>>,
}

impl<'a, N, V> Iterator for Neighbors<'a, N, V> {
    type Item = (&'a N, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (&head, value) = self.inner.as_mut()?.next()?;
        Some((&self.nodes[head], value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}
