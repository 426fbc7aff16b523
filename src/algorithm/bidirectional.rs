use std::fmt::Debug;
use std::time::Instant;
use num_traits::{Float, Zero};
use log::{debug, trace};

use crate::algorithm::frontier::{Direction, Frontier};
use crate::algorithm::{PointToPointAlgorithm, SearchStats, ShortestPath};
use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::status::MissingEndpoints;
use crate::{Error, Result, VertexId};

/// Best source-to-target connection seen so far
#[derive(Debug, Clone, Copy)]
struct Meeting<W> {
    length: W,
    vertex: VertexId,
}

/// Bidirectional Dijkstra search over Fibonacci heaps
///
/// A forward search from the source follows outgoing edges while a backward
/// search from the target follows incoming edges. Each step grows whichever
/// search has touched fewer vertices. Whenever an edge scan reaches a vertex the
/// other search has already closed, the two half-paths through it form a
/// candidate; the search stops once the best candidate is no longer than the
/// sum of the two frontiers' smallest open distances, since no later meeting
/// point can beat it.
///
/// # Example
///
/// ```rust
/// use bidir_dijkstra::{BidirectionalDijkstra, DirectedGraph};
/// use bidir_dijkstra::graph::MutableGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(1, 2, 1.0);
/// graph.add_edge(2, 3, 2.0);
/// graph.add_edge(3, 1, 3.0);
///
/// let path = BidirectionalDijkstra::new().find_path(&graph, 1, 3).unwrap();
/// assert_eq!(path.vertices, vec![1, 2, 3]);
/// assert_eq!(path.length, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BidirectionalDijkstra {
    config: SearchConfig,
}

impl BidirectionalDijkstra {
    /// Create a new search with default settings
    pub fn new() -> Self {
        BidirectionalDijkstra {
            config: SearchConfig::default(),
        }
    }

    /// Create a new search with the given settings
    pub fn with_config(config: SearchConfig) -> Self {
        BidirectionalDijkstra { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a minimum-weight path from `source` to `target`
    ///
    /// Fails with [`Error::MissingEndpoints`] if either endpoint is not a vertex
    /// of `graph` (both flags are reported together), [`Error::NoPath`] if the
    /// target is unreachable, [`Error::NoMemory`] if the search state cannot be
    /// allocated, and [`Error::DeadlineExceeded`] if a configured deadline
    /// passes first. All search state is released before returning.
    pub fn find_path<W, G>(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W> + ?Sized,
    {
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

        if source == target {
            return Ok(ShortestPath {
                vertices: vec![source],
                length: W::zero(),
                meeting_vertex: source,
                stats: SearchStats::default(),
            });
        }

        let started = Instant::now();
        let mut forward = Frontier::new(Direction::Forward, source, &self.config)?;
        let mut backward = Frontier::new(Direction::Backward, target, &self.config)?;
        let mut best: Option<Meeting<W>> = None;
        let mut relaxed_edges = 0;

        debug!("bidirectional search {} -> {}", source, target);

        while !forward.open.is_empty() && !backward.open.is_empty() {
            if let Some(deadline) = self.config.deadline {
                if started.elapsed() >= deadline {
                    debug!("search {} -> {} hit its deadline", source, target);
                    return Err(Error::DeadlineExceeded);
                }
            }

            if let Some(meeting) = best {
                if let (Some(top_forward), Some(top_backward)) =
                    (forward.open.min_priority(), backward.open.min_priority())
                {
                    if meeting.length <= top_forward + top_backward {
                        break;
                    }
                }
            }

            let (expanding, opposite) = if forward.size() <= backward.size() {
                (&mut forward, &backward)
            } else {
                (&mut backward, &forward)
            };
            relaxed_edges += expand(graph, expanding, opposite, &mut best)?;
        }

        let meeting = match best {
            Some(meeting) => meeting,
            None => {
                debug!(
                    "no path {} -> {} after {} forward and {} backward expansions",
                    source, target, forward.expansions, backward.expansions
                );
                return Err(Error::NoPath {
                    from: source,
                    to: target,
                });
            }
        };

        let stats = SearchStats {
            forward_expansions: forward.expansions,
            backward_expansions: backward.expansions,
            relaxed_edges,
        };
        let path = reconstruct(&forward, &backward, meeting.vertex, stats);
        debug!(
            "path {} -> {} of length {:?} through {} ({} hops, {:?})",
            source,
            target,
            path.length,
            meeting.vertex,
            path.hops(),
            stats
        );
        Ok(path)
    }
}

/// Settles the next vertex of `expanding` and scans its edges
///
/// Returns the number of edges scanned.
fn expand<W, G>(
    graph: &G,
    expanding: &mut Frontier<W>,
    opposite: &Frontier<W>,
    best: &mut Option<Meeting<W>>,
) -> Result<usize>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    let vertex = match expanding.settle_next()? {
        Some(vertex) => vertex,
        None => return Ok(0),
    };
    let distance = expanding.distance[vertex];
    trace!("{:?} settles {} at {:?}", expanding.direction, vertex, distance);

    let mut scanned = 0;
    for (neighbor, weight) in expanding.direction.edges(graph, vertex) {
        scanned += 1;
        if expanding.closed.contains(neighbor) {
            continue;
        }

        expanding.relax(neighbor, vertex, distance + weight)?;

        if opposite.closed.contains(neighbor) {
            let candidate = expanding.distance[neighbor] + opposite.distance[neighbor];
            let improves = match best {
                Some(meeting) => candidate < meeting.length,
                None => true,
            };
            if improves {
                trace!("meeting at {} with length {:?}", neighbor, candidate);
                *best = Some(Meeting {
                    length: candidate,
                    vertex: neighbor,
                });
            }
        }
    }

    Ok(scanned)
}

/// Joins the forward half-path to the meeting vertex with the backward half-path from it
fn reconstruct<W>(
    forward: &Frontier<W>,
    backward: &Frontier<W>,
    meeting: VertexId,
    stats: SearchStats,
) -> ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    let mut vertices = forward.trace_to_root(meeting);
    vertices.reverse();
    vertices.extend(backward.trace_to_root(meeting).into_iter().skip(1));

    ShortestPath {
        vertices,
        length: forward.distance[meeting] + backward.distance[meeting],
        meeting_vertex: meeting,
        stats,
    }
}

impl<W, G> PointToPointAlgorithm<W, G> for BidirectionalDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bidirectional Dijkstra"
    }

    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>> {
        BidirectionalDijkstra::find_path(self, graph, source, target)
    }
}

/// Finds a minimum-weight path from `source` to `target` with default settings
///
/// `None` for the graph fails with [`Error::NoGraph`]; otherwise this behaves
/// like [`BidirectionalDijkstra::find_path`].
pub fn find_shortest_path<W, G>(graph: Option<&G>, source: VertexId, target: VertexId) -> Result<ShortestPath<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    let graph = graph.ok_or(Error::NoGraph)?;
    BidirectionalDijkstra::new().find_path(graph, source, target)
}
