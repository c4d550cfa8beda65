//! Built-in storage engines.
//!
//! Both engines implement the full [`Graph`](crate::Graph) contract and are
//! interchangeable; they differ only in layout. [`AdjacencyGraph`] keys
//! everything by node value and suits churn-heavy workloads and serde.
//! [`CompactGraph`] interns nodes into a dense arena and suits read-heavy
//! workloads on stable node sets.

pub mod arena;
pub mod sparse;

pub use arena::CompactGraph;
pub use sparse::AdjacencyGraph;

/// The storage engine chosen as the general-purpose default.
///
/// Selection happens at build time through this alias rather than at run
/// time; callers with specific layout needs name an engine directly.
pub type DefaultGraph<N, V> = CompactGraph<N, V>;
