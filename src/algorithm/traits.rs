use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Result, VertexId};

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each reached vertex
    pub distances: HashMap<VertexId, W>,

    /// Predecessor of each reached vertex other than the source
    pub predecessors: HashMap<VertexId, VertexId>,

    /// Source vertex ID
    pub source: VertexId,
}

/// Counters collected while a point-to-point search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices settled by the forward search
    pub forward_expansions: usize,
    /// Vertices settled by the backward search
    pub backward_expansions: usize,
    /// Edges scanned in either direction
    pub relaxed_edges: usize,
}

/// A minimum-weight path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertices from source to target, both included
    pub vertices: Vec<VertexId>,

    /// Total weight of the path
    pub length: W,

    /// Vertex where the two searches met (the source for single-direction searches)
    pub meeting_vertex: VertexId,

    pub stats: SearchStats,
}

impl<W> ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: VertexId) -> Option<Vec<VertexId>> {
        if !result.distances.contains_key(&target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != result.source {
            current = *result.predecessors.get(&current)?;
            path.push(current);

            // A predecessor cycle would otherwise never end
            if path.len() > result.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for algorithms answering a single source-to-target query
pub trait PointToPointAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Find a minimum-weight path from `source` to `target`
    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
