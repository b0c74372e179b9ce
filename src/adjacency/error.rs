use std::fmt::Display;

use thiserror::Error;

/// Which end of an edge an operation was referring to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Target,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Errors raised by the mutating operations of an
/// [`AdjacencyGraph`](super::AdjacencyGraph).
///
/// The graph is left untouched whenever one of these is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("vertex {0:?} is already present")]
    DuplicateVertex(V),
    #[error("{endpoint} vertex {vertex:?} is not present")]
    VertexNotFound { vertex: V, endpoint: Endpoint },
}

impl<V> GraphError<V> {
    /// The vertex the failing operation was called with.
    pub fn vertex(&self) -> &V {
        match self {
            GraphError::DuplicateVertex(v) => v,
            GraphError::VertexNotFound { vertex, .. } => vertex,
        }
    }
}
