use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for a bidirectional search session
///
/// Every table and heap index of a session is created with the same initial
/// capacity and load factor. Values are normalised by the tables themselves
/// (capacity rounded up to a power of two, at least 16; load factor at least 0.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Initial bucket count of every table in the session
    pub initial_capacity: usize,
    /// Maximum entries per bucket before a table doubles
    pub load_factor: f32,
    /// Give up once the search has run this long
    pub deadline: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            initial_capacity: 1024,
            load_factor: 1.3,
            deadline: None,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity of every table
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the load factor of every table
    pub fn with_load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Abort searches that run longer than `deadline`
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
