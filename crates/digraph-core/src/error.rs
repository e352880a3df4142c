use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a graph operation can be rejected.
///
/// Each variant carries the node(s) that caused the failure, so callers can
/// react to the offending value instead of parsing a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N> {
    #[error("node {0} already in the graph")]
    NodeAlreadyExists(N),

    #[error("node {0} does not exist in the graph")]
    NodeDoesNotExist(N),

    #[error("cannot add edge on non-existing node {0}")]
    EdgeAdditionForMissingNode(N),

    #[error("edge [{from}->{to}] already exists in the graph")]
    EdgeAlreadyExists { from: N, to: N },

    #[error("edge [{from}->{to}] does not exist in the graph")]
    EdgeDoesNotExist { from: N, to: N },

    #[error("edge input #{index} should have exactly two nodes, got {}", .nodes.len())]
    MalformedEdgeInput { index: usize, nodes: Vec<N> },
}

/// Fieldless mirror of [`GraphError`] for branching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphErrorKind {
    NodeAlreadyExists,
    NodeDoesNotExist,
    EdgeAdditionForMissingNode,
    EdgeAlreadyExists,
    EdgeDoesNotExist,
    MalformedEdgeInput,
}

impl<N> GraphError<N> {
    pub fn kind(&self) -> GraphErrorKind {
        match self {
            GraphError::NodeAlreadyExists(_) => GraphErrorKind::NodeAlreadyExists,
            GraphError::NodeDoesNotExist(_) => GraphErrorKind::NodeDoesNotExist,
            GraphError::EdgeAdditionForMissingNode(_) => {
                GraphErrorKind::EdgeAdditionForMissingNode
            }
            GraphError::EdgeAlreadyExists { .. } => GraphErrorKind::EdgeAlreadyExists,
            GraphError::EdgeDoesNotExist { .. } => GraphErrorKind::EdgeDoesNotExist,
            GraphError::MalformedEdgeInput { .. } => GraphErrorKind::MalformedEdgeInput,
        }
    }
}
