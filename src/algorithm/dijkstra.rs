use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{
    PointToPointAlgorithm, SearchStats, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
use crate::data_structures::BinaryHeapWrapper;
use crate::status::MissingEndpoints;
use crate::{Error, Result, VertexId};

/// Classic Dijkstra's algorithm implementation
///
/// Single direction, binary heap with lazy deletion. Used as the reference
/// that [`BidirectionalDijkstra`](crate::BidirectionalDijkstra) is checked
/// against.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut distances: HashMap<VertexId, W> = HashMap::new();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

        // Distance to source is 0
        distances.insert(source, W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if distances.get(&u).map_or(false, |&current| current < dist_u) {
                continue;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;

                let should_update = match distances.get(&v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> PointToPointAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>> {
        let mut missing = MissingEndpoints::NONE;
        if !graph.has_vertex(source) {
            missing.insert(MissingEndpoints::SOURCE);
        }
        if !graph.has_vertex(target) {
            missing.insert(MissingEndpoints::TARGET);
        }
        if !missing.is_empty() {
            return Err(Error::MissingEndpoints(missing));
        }

        let result = ShortestPathAlgorithm::<W, G>::compute_shortest_paths(self, graph, source)?;
        let no_path = Error::NoPath {
            from: source,
            to: target,
        };
        let length = *result.distances.get(&target).ok_or_else(|| no_path.clone())?;
        let vertices = ShortestPathAlgorithm::<W, G>::get_path(self, &result, target).ok_or(no_path)?;

        Ok(ShortestPath {
            vertices,
            length,
            meeting_vertex: source,
            stats: SearchStats {
                forward_expansions: result.distances.len(),
                ..SearchStats::default()
            },
        })
    }
}
