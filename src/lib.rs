//! Bidirectional Dijkstra - point-to-point shortest paths
//!
//! This library finds the minimum-weight path between two vertices of a directed
//! graph with non-negative edge weights. Two Dijkstra frontiers grow towards each
//! other, one from the source over outgoing edges and one from the target over
//! incoming edges, each ordered by a Fibonacci heap with amortized O(1)
//! decrease-key. Every auxiliary map and set is an [`IndexedTable`] keyed by
//! vertex id.
//!
//! [`IndexedTable`]: data_structures::IndexedTable

pub mod algorithm;
pub mod config;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod status;

pub use algorithm::{
    bidirectional::{find_shortest_path, BidirectionalDijkstra},
    dijkstra::Dijkstra,
    PointToPointAlgorithm, SearchStats, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::SearchConfig;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use status::MissingEndpoints;

/// Identifier of a graph vertex
pub type VertexId = usize;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No graph was supplied")]
    NoGraph,

    #[error("Endpoints not in graph: {0}")]
    MissingEndpoints(MissingEndpoints),

    #[error("No path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("Out of memory while allocating search state")]
    NoMemory,

    #[error("Vertex {0} is already queued")]
    DuplicateVertex(VertexId),

    #[error("Search deadline exceeded")]
    DeadlineExceeded,

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

impl Error {
    /// Integer status code of this error, as reported over the C ABI
    pub fn status_code(&self) -> u32 {
        match self {
            Error::NoGraph => status::NO_GRAPH,
            Error::MissingEndpoints(missing) => missing.bits(),
            Error::NoPath { .. } => status::NO_PATH,
            Error::NoMemory => status::NO_MEMORY,
            Error::DuplicateVertex(_) => status::DUPLICATE_VERTEX,
            Error::DeadlineExceeded => status::DEADLINE_EXCEEDED,
            Error::SourceNotFound => status::NO_SOURCE_VERTEX,
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::NoMemory
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
