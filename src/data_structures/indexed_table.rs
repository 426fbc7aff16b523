use std::fmt::{self, Debug};
use std::ops::Index;

use log::warn;

use crate::{Error, Result, VertexId};

const MINIMUM_LOAD_FACTOR: f32 = 0.2;
const MINIMUM_INITIAL_CAPACITY: usize = 16;
const DEFAULT_LOAD_FACTOR: f32 = 0.75;

type Slot = usize;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: VertexId,
    value: V,
    /// Next entry in the same bucket
    chain_next: Option<Slot>,
    /// Neighbours in insertion order
    prev: Option<Slot>,
    next: Option<Slot>,
}

/// Hash table keyed by vertex id with insertion-ordered traversal
///
/// Keys hash to themselves and collide into per-bucket chains. Independently
/// of the buckets, every entry is threaded onto a doubly linked list in the
/// order it was first inserted; iteration follows that list, so growing the
/// table never reorders anything.
///
/// Entries live in a slot vector and removed slots are recycled through a
/// free-list, so removal is O(1) once the entry has been found in its chain.
///
/// Indexing with `table[key]` panics if `key` is absent. Callers use it only for
/// keys they wrote earlier, where a miss is a broken invariant.
pub struct IndexedTable<V> {
    buckets: Vec<Option<Slot>>,
    entries: Vec<Option<Entry<V>>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    len: usize,
    mask: usize,
    max_allowed_size: usize,
    load_factor: f32,
}

/// Rounds the capacity up to a power of two no smaller than the minimum
fn fix_initial_capacity(initial_capacity: usize) -> Option<usize> {
    initial_capacity
        .max(MINIMUM_INITIAL_CAPACITY)
        .checked_next_power_of_two()
}

fn fix_load_factor(load_factor: f32) -> f32 {
    if load_factor.is_nan() {
        return DEFAULT_LOAD_FACTOR;
    }
    load_factor.max(MINIMUM_LOAD_FACTOR)
}

fn max_allowed_size(capacity: usize, load_factor: f32) -> usize {
    (capacity as f64 * load_factor as f64) as usize
}

impl<V> IndexedTable<V> {
    /// Creates an empty table with 16 buckets and a load factor of 0.75
    pub fn new() -> Self {
        let capacity = MINIMUM_INITIAL_CAPACITY;
        IndexedTable {
            buckets: vec![None; capacity],
            entries: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            mask: capacity - 1,
            max_allowed_size: max_allowed_size(capacity, DEFAULT_LOAD_FACTOR),
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates an empty table
    ///
    /// `initial_capacity` is rounded up to a power of two (at least 16) and
    /// `load_factor` is raised to at least 0.2. Fails with [`Error::NoMemory`]
    /// if the bucket array cannot be allocated.
    pub fn with_capacity(initial_capacity: usize, load_factor: f32) -> Result<Self> {
        let capacity = fix_initial_capacity(initial_capacity).ok_or(Error::NoMemory)?;
        let load_factor = fix_load_factor(load_factor);

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(capacity)?;
        buckets.resize(capacity, None);

        Ok(IndexedTable {
            buckets,
            entries: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            mask: capacity - 1,
            max_allowed_size: max_allowed_size(capacity, load_factor),
            load_factor,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    fn entry(&self, slot: Slot) -> &Entry<V> {
        match &self.entries[slot] {
            Some(entry) => entry,
            None => unreachable!("slot {} is linked but free", slot),
        }
    }

    fn entry_mut(&mut self, slot: Slot) -> &mut Entry<V> {
        match &mut self.entries[slot] {
            Some(entry) => entry,
            None => unreachable!("slot {} is linked but free", slot),
        }
    }

    fn find(&self, key: VertexId) -> Option<Slot> {
        let mut cursor = self.buckets[key & self.mask];
        while let Some(slot) = cursor {
            let entry = self.entry(slot);
            if entry.key == key {
                return Some(slot);
            }
            cursor = entry.chain_next;
        }
        None
    }

    pub fn contains(&self, key: VertexId) -> bool {
        self.find(key).is_some()
    }

    pub fn get(&self, key: VertexId) -> Option<&V> {
        self.find(key).map(|slot| &self.entry(slot).value)
    }

    pub fn get_mut(&mut self, key: VertexId) -> Option<&mut V> {
        let slot = self.find(key)?;
        Some(&mut self.entry_mut(slot).value)
    }

    /// Associates `value` with `key`
    ///
    /// Returns `Ok(true)` if the key was inserted and `Ok(false)` if an existing
    /// value was overwritten in place (its position in the iteration order does
    /// not change). Fails with [`Error::NoMemory`] if entry storage cannot
    /// grow; the table is then left as it was.
    pub fn put(&mut self, key: VertexId, value: V) -> Result<bool> {
        if let Some(slot) = self.find(key) {
            self.entry_mut(slot).value = value;
            return Ok(false);
        }

        self.ensure_capacity();
        let bucket = key & self.mask;
        let entry = Entry {
            key,
            value,
            chain_next: self.buckets[bucket],
            prev: self.tail,
            next: None,
        };
        let slot = self.allocate(entry)?;

        self.buckets[bucket] = Some(slot);
        match self.tail {
            Some(tail) => self.entry_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;

        Ok(true)
    }

    fn allocate(&mut self, entry: Entry<V>) -> Result<Slot> {
        if let Some(slot) = self.free.pop() {
            self.entries[slot] = Some(entry);
            return Ok(slot);
        }

        self.entries.try_reserve(1)?;
        // Removal pushes onto the free-list and must not allocate.
        let free_needed = self.entries.len() + 1 - self.free.len();
        self.free.try_reserve(free_needed)?;

        self.entries.push(Some(entry));
        Ok(self.entries.len() - 1)
    }

    /// Doubles the bucket array once the size reaches the load-factor threshold
    fn ensure_capacity(&mut self) {
        if self.len < self.max_allowed_size {
            return;
        }

        let new_capacity = match self.buckets.len().checked_mul(2) {
            Some(capacity) => capacity,
            None => return,
        };
        let mut new_buckets: Vec<Option<Slot>> = Vec::new();
        if new_buckets.try_reserve_exact(new_capacity).is_err() {
            warn!(
                "could not grow table from {} to {} buckets, keeping longer chains",
                self.buckets.len(),
                new_capacity
            );
            return;
        }
        new_buckets.resize(new_capacity, None);
        let new_mask = new_capacity - 1;

        // Rehash along the insertion-order list; that list itself is untouched.
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let entry = self.entry_mut(slot);
            let index = entry.key & new_mask;
            entry.chain_next = new_buckets[index];
            new_buckets[index] = Some(slot);
            cursor = entry.next;
        }

        self.buckets = new_buckets;
        self.mask = new_mask;
        self.max_allowed_size = max_allowed_size(new_capacity, self.load_factor);
    }

    /// Removes `key`, returning its value, or `None` if there was nothing to remove
    pub fn remove(&mut self, key: VertexId) -> Option<V> {
        let bucket = key & self.mask;
        let mut previous_in_chain = None;
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let entry = self.entry(slot);
            if entry.key == key {
                break;
            }
            previous_in_chain = Some(slot);
            cursor = entry.chain_next;
        }

        let slot = cursor?;
        let entry = self.entries[slot].take()?;

        match previous_in_chain {
            Some(previous) => self.entry_mut(previous).chain_next = entry.chain_next,
            None => self.buckets[bucket] = entry.chain_next,
        }
        match entry.prev {
            Some(prev) => self.entry_mut(prev).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entry_mut(next).prev = entry.prev,
            None => self.tail = entry.prev,
        }

        self.free.push(slot);
        self.len -= 1;
        Some(entry.value)
    }

    /// Drops every entry, keeping the current bucket count
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|bucket| *bucket = None);
        self.entries.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates over `(key, &value)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            table: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<V> Default for IndexedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<VertexId> for IndexedTable<V> {
    type Output = V;

    fn index(&self, key: VertexId) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("vertex {} has no entry in this table", key),
        }
    }
}

impl<V: Debug> Debug for IndexedTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Insertion-order iterator over an [`IndexedTable`]
pub struct Iter<'a, V> {
    table: &'a IndexedTable<V>,
    cursor: Option<Slot>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (VertexId, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let entry = self.table.entry(slot);
        self.cursor = entry.next;
        self.remaining -= 1;
        Some((entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a IndexedTable<V> {
    type Item = (VertexId, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Presence-only [`IndexedTable`]
#[derive(Default)]
pub struct IndexedSet {
    table: IndexedTable<()>,
}

impl IndexedSet {
    pub fn new() -> Self {
        IndexedSet {
            table: IndexedTable::new(),
        }
    }

    /// See [`IndexedTable::with_capacity`]
    pub fn with_capacity(initial_capacity: usize, load_factor: f32) -> Result<Self> {
        Ok(IndexedSet {
            table: IndexedTable::with_capacity(initial_capacity, load_factor)?,
        })
    }

    /// Adds `vertex`; returns `Ok(false)` if it was already present
    pub fn insert(&mut self, vertex: VertexId) -> Result<bool> {
        self.table.put(vertex, ())
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.table.contains(vertex)
    }

    /// Returns `false` if there was nothing to remove
    pub fn remove(&mut self, vertex: VertexId) -> bool {
        self.table.remove(vertex).is_some()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates over members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.table.keys()
    }
}

impl Debug for IndexedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
