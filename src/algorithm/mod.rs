pub mod bidirectional;
pub mod dijkstra;
pub mod frontier;
pub mod traits;

pub use traits::{
    PointToPointAlgorithm, SearchStats, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
