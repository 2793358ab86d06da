//! Logging setup shared by both function binaries.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "param_store_cache=debug,store=debug,consumer=debug"
    } else {
        "param_store_cache=info,store=info,consumer=info"
    }
}

/// Installs the global tracing subscriber.
///
/// Timestamps and targets are left out; CloudWatch stamps each line itself.
pub fn init(config: &Config) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(config.debug).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time(),
        )
        .init();

    info!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
