//! Cache Statistics Module
//!
//! Tracks how often reads were served locally versus fetched remotely.

use serde::Serialize;

// == Cache Stats ==
/// Tracks parameter cache activity for the lifetime of a warm instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Requested names served from the cache
    pub hits: u64,
    /// Requested names not in the cache
    pub misses: u64,
    /// Remote fetches issued
    pub fetches: u64,
    /// Remote fetches that failed
    pub failed_fetches: u64,
    /// Number of times the cache was cleared
    pub clears: u64,
    /// Current number of cached parameters
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hits(&mut self, count: usize) {
        self.hits += count as u64;
    }

    pub fn record_misses(&mut self, count: usize) {
        self.misses += count as u64;
    }

    pub fn record_fetch(&mut self, succeeded: bool) {
        self.fetches += 1;
        if !succeeded {
            self.failed_fetches += 1;
        }
    }

    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
