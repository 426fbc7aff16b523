use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::VertexId;

/// Trait representing a weighted directed graph
///
/// This is the capability surface the search algorithms consume. Vertex ids
/// are opaque and need not be contiguous.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertex ids, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over `(head, weight)` for the edges leaving a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns an iterator over `(tail, weight)` for the edges entering a vertex
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, tail: VertexId, head: VertexId) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, tail: VertexId, head: VertexId) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex with a fresh id and returns it
    fn add_vertex(&mut self) -> VertexId;

    /// Adds a vertex with the given id; returns false if it already existed
    fn insert_vertex(&mut self, vertex: VertexId) -> bool;

    /// Removes a vertex and its connected edges from the graph
    fn remove_vertex(&mut self, vertex: VertexId) -> bool;

    /// Adds a directed edge, creating missing endpoints
    ///
    /// An existing edge gets the new weight. Negative, infinite or NaN weights are
    /// rejected and leave the graph unchanged.
    fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, tail: VertexId, head: VertexId) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, tail: VertexId, head: VertexId, weight: W) -> bool;
}

/// Sums the edge weights along `path`
///
/// Returns `None` if two consecutive vertices are not joined by an edge. An
/// empty or single-vertex path weighs zero.
pub fn path_weight<W, G>(graph: &G, path: &[VertexId]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .get_edge_weight(pair[0], pair[1])
            .map(|weight| total + weight)
    })
}
