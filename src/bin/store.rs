//! Store function entry point.
//!
//! # Startup Sequence
//! 1. Load configuration from environment variables
//! 2. Initialize tracing
//! 3. Build the SSM client and the instance-scoped cache
//! 4. Hand every invocation a reference to that state

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;

use param_store_cache::handlers::{store_handler, StoreState};
use param_store_cache::models::ParameterName;
use param_store_cache::source::SsmParameterStore;
use param_store_cache::{logging, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    logging::init(&config);
    info!(
        "Configuration loaded: decrypt={}, always_expire={}, fail_on_fetch_error={}",
        config.decrypt, config.always_expire, config.fail_on_fetch_error
    );

    let sdk_config = aws_config::load_from_env().await;
    let source = Arc::new(SsmParameterStore::from_conf(&sdk_config, config.decrypt));
    let state = StoreState::from_config(&config, source);
    info!("Parameter cache initialized");

    let state = &state;
    run(service_fn(move |event: LambdaEvent<Vec<ParameterName>>| async move {
        store_handler(state, event).await
    }))
    .await
}
