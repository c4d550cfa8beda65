//! Tagged node-assignment values.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// The value shapes accepted when assigning to a node key.
///
/// Assigning to a node key means one of two things: mark the node present
/// without touching its edges, or replace the node's outgoing adjacency
/// wholesale. The distinction is an explicit variant chosen by the caller,
/// never inferred from the value itself, so an edge value that happens to
/// equal a presence sentinel can never be misinterpreted.
///
/// [`Adjacency::Invalid`] represents an assignment shape that survived from
/// untyped input (for example a decoded document) and was not recognized as
/// either of the two meaningful forms. Passing it to
/// [`Graph::set_adjacency`](crate::Graph::set_adjacency) fails as
/// [`GraphError::InvalidAdjacency`](crate::GraphError::InvalidAdjacency)
/// without side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"))]
pub enum Adjacency<N: Eq + Hash, V> {
    /// Ensure the node exists; leave its edges untouched.
    MarkPresent,
    /// Replace the node's outgoing adjacency with these head-to-value
    /// entries. Heads are added to the graph as needed.
    Edges(HashMap<N, V>),
    /// An unrecognized assignment shape.
    Invalid,
}

impl<N: Eq + Hash, V> Adjacency<N, V> {
    /// Builds an [`Adjacency::Edges`] variant from `(head, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same head.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
    {
        Adjacency::Edges(entries.into_iter().collect())
    }
}

impl<N: Eq + Hash, V> From<HashMap<N, V>> for Adjacency<N, V> {
    fn from(entries: HashMap<N, V>) -> Self {
        Adjacency::Edges(entries)
    }
}
