use crate::graph::traits::{Graph, MutableGraph};
use crate::VertexId;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertex ids are arbitrary `usize` values; every vertex keeps both its
/// outgoing and its incoming edges so the graph can be walked in either
/// direction.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(head_vertex, weight)]
    outgoing_edges: HashMap<VertexId, Vec<(VertexId, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(tail_vertex, weight)]
    incoming_edges: HashMap<VertexId, Vec<(VertexId, W)>>,

    /// Smallest id above every id ever used, handed out by `add_vertex`
    next_id: VertexId,

    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
            next_id: 0,
            edge_count: 0,
        }
    }

    /// Creates a directed graph with vertices `0..vertices` and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
            incoming_edges: HashMap::with_capacity(vertices),
            next_id: 0,
            edge_count: 0,
        };

        for v in 0..vertices {
            graph.insert_vertex(v);
        }

        graph
    }

    /// Builds a graph from `(tail, head, weight)` triples
    ///
    /// Triples with a negative weight are skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (tail, head, weight) in edges {
            graph.add_edge(tail, head, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero() && weight.is_finite())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.outgoing_edges.keys().copied())
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(edges) = self.incoming_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.outgoing_edges.contains_key(&vertex)
    }

    fn has_edge(&self, tail: VertexId, head: VertexId) -> bool {
        self.get_edge_weight(tail, head).is_some()
    }

    fn get_edge_weight(&self, tail: VertexId, head: VertexId) -> Option<W> {
        self.outgoing_edges
            .get(&tail)?
            .iter()
            .find(|(target, _)| *target == head)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> VertexId {
        let id = self.next_id;
        self.insert_vertex(id);
        id
    }

    fn insert_vertex(&mut self, vertex: VertexId) -> bool {
        if self.has_vertex(vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        self.incoming_edges.insert(vertex, Vec::new());
        self.next_id = self.next_id.max(vertex.saturating_add(1));
        true
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        if !self.has_vertex(vertex) {
            return false;
        }

        // Remove all edges connected to this vertex
        if let Some(outgoing) = self.outgoing_edges.remove(&vertex) {
            self.edge_count -= outgoing.len();
            for (head, _) in outgoing {
                if let Some(incoming) = self.incoming_edges.get_mut(&head) {
                    incoming.retain(|(tail, _)| *tail != vertex);
                }
            }
        }

        if let Some(incoming) = self.incoming_edges.remove(&vertex) {
            for (tail, _) in incoming {
                // A self-loop went away with the outgoing list above.
                if tail == vertex {
                    continue;
                }
                if let Some(outgoing) = self.outgoing_edges.get_mut(&tail) {
                    outgoing.retain(|(head, _)| *head != vertex);
                    self.edge_count -= 1;
                }
            }
        }

        true
    }

    fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: W) -> bool {
        if !(weight >= W::zero()) || !weight.is_finite() {
            return false;
        }

        if self.update_edge_weight(tail, head, weight) {
            return true;
        }

        self.insert_vertex(tail);
        self.insert_vertex(head);

        if let Some(outgoing) = self.outgoing_edges.get_mut(&tail) {
            outgoing.push((head, weight));
        }
        if let Some(incoming) = self.incoming_edges.get_mut(&head) {
            incoming.push((tail, weight));
        }
        self.edge_count += 1;

        true
    }

    fn remove_edge(&mut self, tail: VertexId, head: VertexId) -> bool {
        let mut removed = false;

        // Remove from outgoing edges
        if let Some(outgoing) = self.outgoing_edges.get_mut(&tail) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| *target != head);
            removed = len_before > outgoing.len();
        }

        // Remove from incoming edges
        if let Some(incoming) = self.incoming_edges.get_mut(&head) {
            incoming.retain(|(source, _)| *source != tail);
        }

        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    fn update_edge_weight(&mut self, tail: VertexId, head: VertexId, weight: W) -> bool {
        if !(weight >= W::zero()) || !weight.is_finite() {
            return false;
        }

        let mut updated = false;

        if let Some(edge) = self
            .outgoing_edges
            .get_mut(&tail)
            .and_then(|edges| edges.iter_mut().find(|(target, _)| *target == head))
        {
            edge.1 = weight;
            updated = true;
        }

        if let Some(edge) = self
            .incoming_edges
            .get_mut(&head)
            .and_then(|edges| edges.iter_mut().find(|(source, _)| *source == tail))
        {
            edge.1 = weight;
        }

        updated
    }
}
