//! Consumer function entry point.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use param_store_cache::handlers::{consumer_handler, ConsumerState};
use param_store_cache::invoker::LambdaStoreInvoker;
use param_store_cache::{logging, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    logging::init(&config);
    info!(
        "Configuration loaded: store_fn_arn={:?}, debug={}",
        config.store_fn_arn, config.debug
    );

    let sdk_config = aws_config::load_from_env().await;
    let invoker = Arc::new(LambdaStoreInvoker::from_conf(&sdk_config));
    // A missing STORE_FN_ARN is logged here and fails each invocation later.
    let state = ConsumerState::from_config(&config, invoker);
    info!("Consumer will request {:?}", state.names());

    let state = &state;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        consumer_handler(state, event).await
    }))
    .await
}
