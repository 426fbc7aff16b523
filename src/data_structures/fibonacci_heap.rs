//! Fibonacci heap over vertex ids
//!
//! A Fibonacci heap is a priority queue with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min
//!
//! The structure consists of a collection of heap-ordered trees whose roots are
//! linked in a circular doubly linked list; the heap remembers which root holds
//! the minimum. Nodes live in an arena and refer to each other by slot index.
//! Slots released by `extract_min` go onto a free-list and are reused by later
//! inserts. Vertex ids are mapped to their slots through an [`IndexedTable`], so
//! `contains` and `decrease_key` take a vertex id rather than a handle.

use std::fmt::Debug;

use log::trace;
use num_traits::{Float, Zero};

use crate::data_structures::IndexedTable;
use crate::{Error, Result, VertexId};

/// `ln(phi)` rounded down, so `ln(n) / LOG_PHI` bounds the largest root degree
const LOG_PHI: f64 = 0.438;

type NodeId = usize;

/// Outcome of [`FibonacciHeap::decrease_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUpdate {
    /// The priority was lowered
    Changed,
    /// The new priority was not lower than the current one
    Unchanged,
    /// The vertex is not in the heap
    NotFound,
}

#[derive(Debug, Clone)]
struct Node<W> {
    vertex: VertexId,
    priority: W,
    parent: Option<NodeId>,
    child: Option<NodeId>,
    left: NodeId,
    right: NodeId,
    degree: usize,
    marked: bool,
}

/// Fibonacci heap keyed by vertex id
///
/// # Example
///
/// ```rust
/// use bidir_dijkstra::data_structures::{FibonacciHeap, KeyUpdate};
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(7, 5.0).unwrap();
/// heap.insert(3, 2.0).unwrap();
/// assert_eq!(heap.decrease_key(7, 1.0), KeyUpdate::Changed);
/// assert_eq!(heap.extract_min(), Some((7, 1.0)));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<Node<W>>,
    free: Vec<NodeId>,
    index: IndexedTable<NodeId>,
    min: Option<NodeId>,
    /// Scratch space for `consolidate`, reserved ahead of time
    roots: Vec<NodeId>,
    degree_table: Vec<Option<NodeId>>,
}

impl<W> FibonacciHeap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty heap whose vertex index uses the table defaults
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            free: Vec::new(),
            index: IndexedTable::new(),
            min: None,
            roots: Vec::new(),
            degree_table: Vec::new(),
        }
    }

    /// Creates an empty heap; the arguments size the internal vertex index
    pub fn with_capacity(initial_capacity: usize, load_factor: f32) -> Result<Self> {
        Ok(FibonacciHeap {
            nodes: Vec::new(),
            free: Vec::new(),
            index: IndexedTable::with_capacity(initial_capacity, load_factor)?,
            min: None,
            roots: Vec::new(),
            degree_table: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.index.contains(vertex)
    }

    /// Current priority of `vertex`, if queued
    pub fn priority(&self, vertex: VertexId) -> Option<W> {
        self.index.get(vertex).map(|&id| self.nodes[id].priority)
    }

    /// Returns the minimum vertex and its priority without removing it
    pub fn peek(&self) -> Option<(VertexId, W)> {
        self.min.map(|id| (self.nodes[id].vertex, self.nodes[id].priority))
    }

    /// Returns the minimum vertex without removing it
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn min(&self) -> VertexId {
        match self.peek() {
            Some((vertex, _)) => vertex,
            None => panic!("min() called on an empty Fibonacci heap"),
        }
    }

    pub fn min_priority(&self) -> Option<W> {
        self.peek().map(|(_, priority)| priority)
    }

    /// Queues `vertex` with `priority`
    ///
    /// Fails with [`Error::DuplicateVertex`] if the vertex is already queued (its
    /// priority is left alone; use [`decrease_key`](Self::decrease_key)), or with
    /// [`Error::NoMemory`] if the node cannot be allocated. On failure the heap
    /// is unchanged.
    pub fn insert(&mut self, vertex: VertexId, priority: W) -> Result<()> {
        if self.index.contains(vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }

        let id = self.allocate(vertex, priority)?;
        if let Err(err) = self.index.put(vertex, id) {
            self.free.push(id);
            return Err(err);
        }

        self.add_root(id);
        trace!("heap insert {} at {:?}", vertex, priority);
        Ok(())
    }

    fn allocate(&mut self, vertex: VertexId, priority: W) -> Result<NodeId> {
        let node = Node {
            vertex,
            priority,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            marked: false,
        };

        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                let wanted = self.nodes.len() + 1;
                self.nodes.try_reserve(1)?;
                // Every node may end up on the free-list or in the root list at
                // once; reserve now so extract_min never allocates.
                self.free.try_reserve(wanted - self.free.len())?;
                self.roots.try_reserve(wanted - self.roots.len())?;
                let table_size = degree_table_size(wanted);
                if table_size > self.degree_table.len() {
                    self.degree_table
                        .try_reserve(table_size - self.degree_table.len())?;
                }
                self.nodes.push(node);
                wanted - 1
            }
        };

        self.nodes[id].left = id;
        self.nodes[id].right = id;
        Ok(id)
    }

    /// Links `x` into the list right of `anchor`
    fn splice_after(&mut self, anchor: NodeId, x: NodeId) {
        let right = self.nodes[anchor].right;
        self.nodes[x].left = anchor;
        self.nodes[x].right = right;
        self.nodes[anchor].right = x;
        self.nodes[right].left = x;
    }

    /// Detaches `x` from its sibling list, leaving it a singleton ring
    fn unlink(&mut self, x: NodeId) {
        let left = self.nodes[x].left;
        let right = self.nodes[x].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// Adds a singleton `x` to the root list and updates the minimum
    fn add_root(&mut self, x: NodeId) {
        match self.min {
            None => self.min = Some(x),
            Some(min) => {
                self.splice_after(min, x);
                if self.nodes[x].priority < self.nodes[min].priority {
                    self.min = Some(x);
                }
            }
        }
    }

    /// Lowers the priority of `vertex` to `new_priority`
    ///
    /// Priorities only ever decrease: a value that is not strictly lower than
    /// the current one leaves the heap untouched and reports
    /// [`KeyUpdate::Unchanged`].
    pub fn decrease_key(&mut self, vertex: VertexId, new_priority: W) -> KeyUpdate {
        let x = match self.index.get(vertex) {
            Some(&id) => id,
            None => return KeyUpdate::NotFound,
        };

        if !(new_priority < self.nodes[x].priority) {
            return KeyUpdate::Unchanged;
        }

        self.nodes[x].priority = new_priority;
        if let Some(parent) = self.nodes[x].parent {
            if new_priority < self.nodes[parent].priority {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if new_priority < self.nodes[min].priority {
                self.min = Some(x);
            }
        }

        trace!("heap decrease {} to {:?}", vertex, new_priority);
        KeyUpdate::Changed
    }

    /// Moves `x` from the child list of `parent` to the root list
    fn cut(&mut self, x: NodeId, parent: NodeId) {
        if self.nodes[parent].child == Some(x) {
            let sibling = self.nodes[x].right;
            self.nodes[parent].child = if sibling == x { None } else { Some(sibling) };
        }
        self.unlink(x);
        self.nodes[parent].degree -= 1;

        self.nodes[x].parent = None;
        self.nodes[x].marked = false;
        self.add_root(x);
    }

    fn cascading_cut(&mut self, mut y: NodeId) {
        while let Some(parent) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return;
            }
            self.cut(y, parent);
            y = parent;
        }
    }

    /// Removes and returns the minimum vertex with its priority
    pub fn extract_min(&mut self) -> Option<(VertexId, W)> {
        let z = self.min?;

        // Promote every child of z to the root list.
        if let Some(first_child) = self.nodes[z].child.take() {
            let mut child = first_child;
            loop {
                let next = self.nodes[child].right;
                self.nodes[child].parent = None;
                self.unlink(child);
                self.splice_after(z, child);
                if next == first_child || next == child {
                    break;
                }
                child = next;
            }
            self.nodes[z].degree = 0;
        }

        let vertex = self.nodes[z].vertex;
        let priority = self.nodes[z].priority;

        if self.nodes[z].right == z {
            self.min = None;
        } else {
            let right = self.nodes[z].right;
            self.unlink(z);
            self.min = Some(right);
            self.consolidate();
        }

        self.index.remove(vertex);
        self.free.push(z);
        trace!("heap extract {} at {:?}", vertex, priority);
        Some((vertex, priority))
    }

    /// Merges roots of equal degree until every root degree is distinct
    fn consolidate(&mut self) {
        let start = match self.min {
            Some(start) => start,
            None => return,
        };

        self.roots.clear();
        let mut cursor = start;
        loop {
            self.roots.push(cursor);
            cursor = self.nodes[cursor].right;
            if cursor == start {
                break;
            }
        }

        let table_size = degree_table_size(self.index.len());
        self.degree_table.clear();
        self.degree_table.resize(table_size, None);

        for i in 0..self.roots.len() {
            let mut x = self.roots[i];
            let mut degree = self.nodes[x].degree;
            loop {
                if degree >= self.degree_table.len() {
                    self.degree_table.resize(degree + 1, None);
                }
                let mut y = match self.degree_table[degree].take() {
                    Some(y) => y,
                    None => break,
                };
                if self.nodes[y].priority < self.nodes[x].priority {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            self.degree_table[degree] = Some(x);
        }

        self.min = None;
        for i in 0..self.degree_table.len() {
            if let Some(root) = self.degree_table[i].take() {
                self.unlink(root);
                self.add_root(root);
            }
        }
    }

    /// Makes root `y` a child of root `x`
    fn link(&mut self, y: NodeId, x: NodeId) {
        self.unlink(y);
        self.nodes[y].parent = Some(x);
        match self.nodes[x].child {
            Some(child) => self.splice_after(child, y),
            None => self.nodes[x].child = Some(y),
        }
        self.nodes[x].degree += 1;
        self.nodes[y].marked = false;
    }

    /// Removes every vertex
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.index.clear();
        self.roots.clear();
        self.degree_table.clear();
        self.min = None;
    }

    /// Checks the structural invariants of the heap
    ///
    /// Every child has a priority no lower than its parent and points back to
    /// it, every degree matches its child count, the trees hold exactly the
    /// indexed vertices, and the tracked minimum is the smallest root.
    pub fn is_healthy(&self) -> bool {
        let min = match self.min {
            Some(min) => min,
            None => return self.index.is_empty(),
        };

        let mut count = 0;
        let mut stack = Vec::new();

        let mut root = min;
        loop {
            let node = &self.nodes[root];
            if node.parent.is_some() || node.priority < self.nodes[min].priority {
                return false;
            }
            if self.nodes[node.right].left != root {
                return false;
            }
            stack.push(root);
            root = node.right;
            if root == min {
                break;
            }
        }

        while let Some(id) = stack.pop() {
            count += 1;
            if count > self.nodes.len() {
                return false;
            }
            let node = &self.nodes[id];
            if self.index.get(node.vertex) != Some(&id) {
                return false;
            }

            let first = match node.child {
                Some(first) => first,
                None => {
                    if node.degree != 0 {
                        return false;
                    }
                    continue;
                }
            };

            let mut children = 0;
            let mut child = first;
            loop {
                let child_node = &self.nodes[child];
                if child_node.parent != Some(id) || child_node.priority < node.priority {
                    return false;
                }
                if self.nodes[child_node.right].left != child {
                    return false;
                }
                children += 1;
                if children > self.nodes.len() {
                    return false;
                }
                stack.push(child);
                child = child_node.right;
                if child == first {
                    break;
                }
            }
            if children != node.degree {
                return false;
            }
        }

        count == self.index.len()
    }
}

impl<W> Default for FibonacciHeap<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

fn degree_table_size(len: usize) -> usize {
    if len < 2 {
        return 2;
    }
    ((len as f64).ln() / LOG_PHI).floor() as usize + 1
}
