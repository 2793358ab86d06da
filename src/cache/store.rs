//! Parameter Cache Module
//!
//! Name → value map with read-through on miss and whole-cache clear.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, FetchFailurePolicy};
use crate::error::Result;
use crate::models::{ParameterName, Parameters};
use crate::source::ParameterSource;

// == Parameter Cache ==
/// In-memory parameter cache.
///
/// Entries never expire on their own; they live until `expire` is called or
/// the instance holding the cache goes away.
#[derive(Debug, Default)]
pub struct ParameterCache {
    /// Cached values keyed by parameter name
    entries: HashMap<ParameterName, String>,
    /// Behaviour when a remote fetch fails
    policy: FetchFailurePolicy,
    /// Activity counters
    stats: CacheStats,
}

impl ParameterCache {
    // == Constructor ==
    /// Creates an empty cache that omits names whose fetch failed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache with the given fetch failure policy.
    pub fn with_policy(policy: FetchFailurePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    // == Read ==
    /// Reads `names`, fetching those not cached in a single remote call.
    ///
    /// Fetched values are cached before returning. With `Omit`, names the
    /// source failed to deliver are absent from the result and the read
    /// succeeds; with `Abort`, the source error is returned instead.
    pub async fn read(
        &mut self,
        source: &dyn ParameterSource,
        names: &[ParameterName],
    ) -> Result<Parameters> {
        info!("Reading Parameters: {:?}", names);

        let mut parameters = Parameters::new();
        let mut missing = BTreeSet::new();
        for name in names {
            match self.entries.get(name) {
                Some(value) => {
                    parameters.insert(name.clone(), value.clone());
                }
                None => {
                    missing.insert(name.clone());
                }
            }
        }
        self.stats.record_hits(parameters.len());
        self.stats.record_misses(missing.len());

        if missing.is_empty() {
            return Ok(parameters);
        }

        info!("Found {} parameter names not in cache", missing.len());
        match source.get(&missing).await {
            Ok(records) => {
                self.stats.record_fetch(true);
                for record in records {
                    self.entries.insert(record.name.clone(), record.value.clone());
                    parameters.insert(record.name, record.value);
                }
                self.stats.set_total_entries(self.entries.len());
            }
            Err(err) => {
                self.stats.record_fetch(false);
                match self.policy {
                    FetchFailurePolicy::Omit => {
                        warn!(
                            error = %err,
                            missing = ?missing,
                            invalid = ?err.invalid_names(),
                            "Omitting parameters that could not be fetched"
                        );
                    }
                    FetchFailurePolicy::Abort => return Err(err),
                }
            }
        }

        Ok(parameters)
    }

    // == Expire ==
    /// Removes every entry. A no-op on an empty cache.
    pub fn expire(&mut self) {
        info!("Clearing cache");
        self.entries.clear();
        self.stats.record_clear();
        self.stats.set_total_entries(0);
    }

    // == Insert ==
    /// Stores a value directly, replacing any previous one.
    pub fn insert(&mut self, name: ParameterName, value: impl Into<String>) {
        debug!("Caching parameter {}", name);
        self.entries.insert(name, value.into());
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the cached value without touching the remote source.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    // == Contains ==
    /// Returns true if `name` is cached.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of cached parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
