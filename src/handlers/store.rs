//! Store Function Handler
//!
//! Serves a batch of parameter names through the warm-instance cache.

use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::ParameterCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{ParameterName, Parameters};
use crate::source::ParameterSource;

/// State built once per cold start and shared by every invocation.
///
/// The cache sits behind a lock held for the whole read-through, so
/// overlapping invocations on one instance are served one at a time.
#[derive(Clone)]
pub struct StoreState {
    /// Instance-scoped parameter cache
    pub cache: Arc<RwLock<ParameterCache>>,
    /// Remote parameter service
    source: Arc<dyn ParameterSource>,
    /// Clear the cache before every invocation
    always_expire: bool,
}

impl StoreState {
    pub fn new(cache: ParameterCache, source: Arc<dyn ParameterSource>, always_expire: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            source,
            always_expire,
        }
    }

    /// Creates a StoreState with an empty cache configured from `config`.
    pub fn from_config(config: &Config, source: Arc<dyn ParameterSource>) -> Self {
        let cache = ParameterCache::with_policy(config.fetch_failure_policy());
        Self::new(cache, source, config.always_expire)
    }
}

/// Resolves `names`, returning every name that was cached or fetched.
pub async fn serve(state: &StoreState, names: &[ParameterName]) -> Result<Parameters> {
    let mut cache = state.cache.write().await;
    if state.always_expire {
        cache.expire();
    }

    let parameters = cache.read(state.source.as_ref(), names).await?;
    info!("Parameters: {}", serde_json::to_string_pretty(&parameters)?);
    let stats = cache.stats();
    debug!(hit_rate = stats.hit_rate(), stats = ?stats, "Cache stats");

    Ok(parameters)
}

/// Lambda entry point. The payload is a JSON array of names.
pub async fn store_handler(
    state: &StoreState,
    event: LambdaEvent<Vec<ParameterName>>,
) -> std::result::Result<Parameters, lambda_runtime::Error> {
    let (names, _context) = event.into_parts();
    Ok(serve(state, &names).await?)
}
