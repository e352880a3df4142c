use std::hash::Hash;

/// Trait for values that can be nodes of a [`DirectedGraph`](super::DirectedGraph)
///
/// Node identity is value-based: two nodes are the same node when they
/// compare equal. Implemented for every `Eq + Hash + Clone` type, so domain
/// types only need the usual derives.
pub trait GraphNode: Eq + Hash + Clone {}

impl<T> GraphNode for T where T: Eq + Hash + Clone {}
