use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::config::SearchConfig;
use crate::data_structures::{FibonacciHeap, IndexedSet, IndexedTable, KeyUpdate};
use crate::graph::Graph;
use crate::{Result, VertexId};

/// Which way a frontier walks the edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the source, along outgoing edges
    Forward,
    /// From the target, along incoming edges
    Backward,
}

impl Direction {
    /// Edges leaving `vertex` in this direction of travel
    pub fn edges<'g, W, G>(
        self,
        graph: &'g G,
        vertex: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, W)> + 'g>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W> + ?Sized,
    {
        match self {
            Direction::Forward => graph.outgoing_edges(vertex),
            Direction::Backward => graph.incoming_edges(vertex),
        }
    }
}

/// One direction's search state
///
/// A vertex is open while it sits in `open`, and closed once extracted; it is
/// never both. The distance of a closed vertex is final.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub direction: Direction,
    pub root: VertexId,
    pub open: FibonacciHeap<W>,
    pub closed: IndexedSet,
    pub distance: IndexedTable<W>,
    pub parent: IndexedTable<VertexId>,
    pub expansions: usize,
}

impl<W> Frontier<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Allocates the four containers and seeds them with `root` at distance zero
    pub fn new(direction: Direction, root: VertexId, config: &SearchConfig) -> Result<Self> {
        let capacity = config.initial_capacity;
        let load_factor = config.load_factor;

        let mut frontier = Frontier {
            direction,
            root,
            open: FibonacciHeap::with_capacity(capacity, load_factor)?,
            closed: IndexedSet::with_capacity(capacity, load_factor)?,
            distance: IndexedTable::with_capacity(capacity, load_factor)?,
            parent: IndexedTable::with_capacity(capacity, load_factor)?,
            expansions: 0,
        };

        frontier.distance.put(root, W::zero())?;
        frontier.parent.put(root, root)?;
        frontier.open.insert(root, W::zero())?;

        Ok(frontier)
    }

    /// Open plus closed vertices; the search grows the smaller frontier
    pub fn size(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    /// Extracts the closest open vertex and closes it
    pub fn settle_next(&mut self) -> Result<Option<VertexId>> {
        let vertex = match self.open.extract_min() {
            Some((vertex, _)) => vertex,
            None => return Ok(None),
        };
        self.closed.insert(vertex)?;
        self.expansions += 1;
        Ok(Some(vertex))
    }

    /// Offers `vertex` at `tentative` through `via`
    ///
    /// Unknown vertices are recorded and queued; known ones are updated only if
    /// `tentative` is strictly shorter. Returns whether anything changed.
    pub fn relax(&mut self, vertex: VertexId, via: VertexId, tentative: W) -> Result<bool> {
        match self.distance.get(vertex).copied() {
            None => {
                self.distance.put(vertex, tentative)?;
                self.parent.put(vertex, via)?;
                self.open.insert(vertex, tentative)?;
                Ok(true)
            }
            Some(current) if tentative < current => {
                self.distance.put(vertex, tentative)?;
                self.parent.put(vertex, via)?;
                let update = self.open.decrease_key(vertex, tentative);
                debug_assert_eq!(update, KeyUpdate::Changed, "vertex {} is not open", vertex);
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    /// Walks parent links from `vertex` back to this frontier's root
    ///
    /// The returned sequence starts at `vertex` and ends at the root.
    pub fn trace_to_root(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.root {
            current = self.parent[current];
            path.push(current);
        }
        path
    }
}
