use std::io;

use thiserror::Error;

use crate::graph::VertexId;

/// Errors that can occur while reading a graph description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The underlying reader failed, or produced bytes that are not UTF-8.
    #[error("failed to read graph description: {0}")]
    Io(#[from] io::Error),
}

/// Errors reported by [`Graph`](crate::Graph) validation methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id does not name a vertex of this graph.
    #[error("vertex id {id:?} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertexId { id: VertexId, vertex_count: usize },
}
