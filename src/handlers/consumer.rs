//! Consumer Function Handler
//!
//! Asks the store function for a fixed list of names and logs the answer.

use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{error, info};

use crate::config::{Config, STORE_FN_ARN};
use crate::error::{ParamError, Result};
use crate::invoker::StoreInvoker;
use crate::models::{ParameterName, Parameters, DEFAULT_PARAMETER_NAMES};

/// State built once per cold start.
#[derive(Clone)]
pub struct ConsumerState {
    invoker: Arc<dyn StoreInvoker>,
    /// Store function to invoke; absent when misconfigured
    store_fn_arn: Option<String>,
    /// Names requested on every invocation
    names: Vec<ParameterName>,
}

impl ConsumerState {
    pub fn new(invoker: Arc<dyn StoreInvoker>, store_fn_arn: Option<String>) -> Self {
        Self {
            invoker,
            store_fn_arn,
            names: default_names(),
        }
    }

    /// Creates a ConsumerState, logging when the store function is not configured.
    ///
    /// A missing identifier is not fatal here; each invocation fails instead.
    pub fn from_config(config: &Config, invoker: Arc<dyn StoreInvoker>) -> Self {
        if let Err(err) = config.require_store_fn_arn() {
            error!(error = %err, "Store function ARN is required");
        }
        Self::new(invoker, config.store_fn_arn.clone())
    }

    pub fn names(&self) -> &[ParameterName] {
        &self.names
    }
}

fn default_names() -> Vec<ParameterName> {
    DEFAULT_PARAMETER_NAMES
        .iter()
        .filter_map(|name| ParameterName::new(*name).ok())
        .collect()
}

/// Invokes the store function and logs the mapping it returned.
pub async fn fetch_parameters(state: &ConsumerState) -> Result<Parameters> {
    let function = state
        .store_fn_arn
        .as_deref()
        .ok_or(ParamError::MissingConfiguration(STORE_FN_ARN))?;

    let parameters = state.invoker.invoke(function, &state.names).await?;
    info!("Parameters: {}", serde_json::to_string(&parameters)?);

    Ok(parameters)
}

/// Lambda entry point. The payload is ignored and nothing is returned.
pub async fn consumer_handler(
    state: &ConsumerState,
    _event: LambdaEvent<Value>,
) -> std::result::Result<(), lambda_runtime::Error> {
    fetch_parameters(state).await?;
    Ok(())
}
