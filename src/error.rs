//! Error types for graph operations.

use std::fmt;

/// Errors raised by graph operations.
///
/// Every error is raised synchronously at the offending call. Operations
/// either fully apply or fully abort: a failed call never leaves partial
/// state observable through the public interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation required a node that is not in the graph.
    MissingNode,
    /// An operation required an edge that is not in the graph.
    MissingEdge,
    /// A node assignment was neither a presence marker nor an adjacency
    /// mapping.
    InvalidAdjacency,
    /// An edge write targeted a graph whose edge values are derived.
    ReadOnlyEdges,
    /// A construction or wrapper option was unusable; the message names it.
    InvalidConfiguration(String),
    /// Adding a node would push the node count past a configured ceiling.
    AtCapacity(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::MissingNode => write!(f, "node not found in graph"),
            GraphError::MissingEdge => write!(f, "edge not found in graph"),
            GraphError::InvalidAdjacency => {
                write!(
                    f,
                    "node assignment must be a presence marker or a mapping from head to value"
                )
            }
            GraphError::ReadOnlyEdges => {
                write!(f, "edge values are derived by the graph and cannot be written")
            }
            GraphError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {message}")
            }
            GraphError::AtCapacity(limit) => {
                write!(f, "graph is at its capacity of {limit} nodes")
            }
        }
    }
}

impl std::error::Error for GraphError {}
