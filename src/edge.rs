//! Edge keys: ordered node pairs addressing directed edges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed edge key as an ordered pair of nodes.
///
/// `Edge` is the composite key of the dual-keyed container: where a bare node
/// addresses a node record, an `Edge` addresses the value stored on the
/// directed connection from `tail` to `head`. Because the pair is its own
/// type, a node whose value happens to resemble a pair can never be misread
/// as an edge key.
///
/// `(tail, head)` and `(head, tail)` denote distinct edges unless the graph
/// is wrapped in [`Undirected`](crate::Undirected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Node the edge originates from.
    pub tail: N,
    /// Node the edge points to.
    pub head: N,
}

impl<N> Edge<N> {
    /// Creates an edge key from `tail` to `head`.
    pub fn new(tail: N, head: N) -> Self {
        Self { tail, head }
    }

    /// Returns the edge with tail and head exchanged.
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    pub fn is_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.tail == self.head
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((tail, head): (N, N)) -> Self {
        Self { tail, head }
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tail, self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_detection() {
        assert!(Edge::new("a", "a").is_loop());
        assert!(!Edge::new("a", "b").is_loop());
    }

    #[test]
    fn test_reversed() {
        let edge = Edge::new(1, 2);
        assert_eq!(edge.reversed(), Edge::new(2, 1));
        assert_eq!(edge.reversed().reversed(), edge);
    }

    #[test]
    fn test_from_pair() {
        let edge: Edge<&str> = ("x", "y").into();
        assert_eq!(edge.tail, "x");
        assert_eq!(edge.head, "y");
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new("NY", "LA").to_string(), "NY -> LA");
    }
}
