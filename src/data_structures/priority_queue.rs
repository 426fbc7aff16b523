use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::VertexId;

/// Min-queue of vertices on top of `BinaryHeap`, without decrease-key
///
/// Improved distances are pushed again and stale entries are skipped by the
/// caller when popped. The reference [`Dijkstra`](crate::Dijkstra) runs on this
/// queue so that it shares no code with the Fibonacci heap it is checked against.
#[derive(Debug)]
pub struct BinaryHeapWrapper<P>
where
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, VertexId)>>,
}

impl<P> BinaryHeapWrapper<P>
where
    P: Copy + Debug + Ord,
{
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, vertex: VertexId, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(VertexId, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    pub fn peek(&self) -> Option<(VertexId, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}

impl<P> Default for BinaryHeapWrapper<P>
where
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
