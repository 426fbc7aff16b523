//! Integer status codes and the endpoint flag set
//!
//! The library reports failures through [`crate::Error`]; these codes are the
//! flat representation used where an integer is needed (the C ABI, process exit
//! codes). `NO_SOURCE_VERTEX` and `NO_TARGET_VERTEX` are bit flags and may be
//! combined.

use std::fmt;
use std::ops::BitOr;

pub const OK: u32 = 0;
pub const NO_GRAPH: u32 = 1;
pub const NO_SOURCE_VERTEX: u32 = 1 << 1;
pub const NO_TARGET_VERTEX: u32 = 1 << 2;
pub const NO_MEMORY: u32 = 1 << 3;
pub const NO_PATH: u32 = 1 << 4;
pub const DEADLINE_EXCEEDED: u32 = 1 << 5;
pub const DUPLICATE_VERTEX: u32 = 1 << 6;

/// Set of search endpoints that are not vertices of the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MissingEndpoints {
    bits: u32,
}

impl MissingEndpoints {
    /// Empty set
    pub const NONE: Self = MissingEndpoints { bits: 0 };
    /// The source vertex is missing
    pub const SOURCE: Self = MissingEndpoints { bits: NO_SOURCE_VERTEX };
    /// The target vertex is missing
    pub const TARGET: Self = MissingEndpoints { bits: NO_TARGET_VERTEX };

    pub fn bits(self) -> u32 {
        self.bits
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    pub fn source(self) -> bool {
        self.contains(Self::SOURCE)
    }

    pub fn target(self) -> bool {
        self.contains(Self::TARGET)
    }
}

impl BitOr for MissingEndpoints {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        MissingEndpoints {
            bits: self.bits | rhs.bits,
        }
    }
}

impl fmt::Display for MissingEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.source(), self.target()) {
            (true, true) => write!(f, "source and target"),
            (true, false) => write!(f, "source"),
            (false, true) => write!(f, "target"),
            (false, false) => write!(f, "none"),
        }
    }
}
