//! Parameter Store Cache - Lambda functions reading SSM parameters through a cache
//!
//! The `store` function resolves parameter names from an instance-scoped cache,
//! falling back to AWS SSM Parameter Store on a miss. The `consumer` function
//! invokes `store` and logs what it got back.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod invoker;
pub mod logging;
pub mod models;
pub mod source;

#[cfg(test)]
mod testing;

pub use cache::{FetchFailurePolicy, ParameterCache};
pub use config::Config;
pub use error::{ParamError, Result};
pub use handlers::{ConsumerState, StoreState};
pub use models::{ParameterName, Parameters};
