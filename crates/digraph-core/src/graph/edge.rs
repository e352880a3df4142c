use serde::Serialize;
use std::fmt;

/// A directed edge between two nodes
///
/// This is an owned snapshot handed out by graph queries; mutating it has no
/// effect on the graph it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<N> {
    /// Node the edge leaves
    pub source: N,
    /// Node the edge enters
    pub target: N,
}

impl<N> Edge<N> {
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N: PartialEq> Edge<N> {
    /// Check if this edge involves a given node (source or target)
    pub fn involves(&self, node: &N) -> bool {
        &self.source == node || &self.target == node
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}->{}]", self.source, self.target)
    }
}
