pub mod fibonacci_heap;
pub mod indexed_table;
pub mod priority_queue;

pub use fibonacci_heap::{FibonacciHeap, KeyUpdate};
pub use indexed_table::{IndexedSet, IndexedTable};
pub use priority_queue::BinaryHeapWrapper;
