pub mod config;
pub mod error;
pub mod graph;
pub mod result;

pub use config::{AppConfig, OutputFormat};
pub use error::{GraphError, GraphErrorKind};
pub use graph::{DirectedGraph, Edge, GraphNode};
pub use result::GraphResult;
