//! edgemap: a dual-keyed in-memory graph container.
//!
//! A graph here is a container addressed two ways at once: a bare node key
//! addresses a node record, and a `(tail, head)` pair addresses the value
//! stored on the directed edge between two nodes. Nodes behave like members
//! of a set, edges like entries of a map, and the container maintains the
//! structural invariants between them: every edge's endpoints exist as
//! nodes, every edge carries exactly one value, and removing a node takes
//! all of its edges and their values with it in one step.
//!
//! # Quick Start
//!
//! ```
//! use edgemap::{DefaultGraph, Graph};
//!
//! let mut flights: DefaultGraph<&str, u32> = DefaultGraph::new();
//! flights.add_nodes(["SFO", "JFK", "LHR"])?;
//! flights.set_edge("SFO", "JFK", 330)?;
//! flights.set_edge("JFK", "LHR", 415)?;
//!
//! assert_eq!(flights.get_edge(&"SFO", &"JFK")?, &330);
//! assert!(flights.nodes().contains(&"LHR"));
//!
//! for (head, minutes) in &flights.adjacency(&"JFK")? {
//!     println!("JFK -> {head}: {minutes} min");
//! }
//!
//! // Removing a node removes its edges and their values with it.
//! flights.remove_node(&"JFK")?;
//! assert_eq!(flights.edge_count(), 0);
//! # Ok::<(), edgemap::GraphError>(())
//! ```
//!
//! # Layout
//!
//! - [`Graph`]: the operation contract every graph type implements.
//! - [`AdjacencyGraph`] and [`CompactGraph`]: the interchangeable storage
//!   engines, with [`DefaultGraph`] naming the general-purpose choice.
//! - [`Undirected`] and [`Bounded`]: composable wrappers that change edge
//!   symmetry and cap node growth.
//! - [`MapGraph`]: an adapter giving plain nested maps the graph
//!   interface.
//! - [`DistanceGraph`]: a complete graph whose edge values come from a
//!   caller-supplied distance function.
//! - View types in [`view`]: live, borrowing windows onto a graph's
//!   nodes, edges, values, items and per-node adjacency.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::implicit_hasher
)]

pub mod adapt;
pub mod adjacency;
pub mod distance;
pub mod edge;
pub mod error;
pub mod graph;
pub mod storage;
pub mod view;
pub mod wrap;

mod render;

pub use adapt::MapGraph;
pub use adjacency::Adjacency;
pub use distance::DistanceGraph;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::Graph;
pub use storage::{AdjacencyGraph, CompactGraph, DefaultGraph};
pub use view::{AdjacencyView, EdgeView, ItemView, NodeView, ValueView};
pub use wrap::{Bounded, Undirected};
