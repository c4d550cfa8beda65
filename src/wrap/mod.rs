//! Behavior-changing graph wrappers.
//!
//! A wrapper owns an inner graph, implements [`Graph`](crate::Graph)
//! itself, and intercepts the primitive operations it cares about. Because
//! the trait's bulk operations are routed through the primitives, the
//! wrapped behavior governs bulk operations too. Wrappers compose: a
//! [`Bounded`]`<`[`Undirected`]`<G>>` enforces both policies.

mod bounded;
mod undirected;

pub use bounded::Bounded;
pub use undirected::Undirected;
