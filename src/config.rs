//! Configuration Module
//!
//! Loads function configuration from environment variables once per cold start.

use std::env;

use crate::cache::FetchFailurePolicy;
use crate::error::{ParamError, Result};

// == Environment Variable Names ==
pub const STORE_FN_ARN: &str = "STORE_FN_ARN";
pub const DECRYPT_PARAMS: &str = "DECRYPT_PARAMS";
pub const EXPIRE_CACHE: &str = "EXPIRE_CACHE";
pub const FAIL_ON_FETCH_ERROR: &str = "FAIL_ON_FETCH_ERROR";
pub const DEBUG: &str = "DEBUG";

/// Function configuration.
///
/// Flags are switched on by the variable being present, whatever its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Name or ARN of the store function, needed by the consumer
    pub store_fn_arn: Option<String>,
    /// Ask the parameter service to decrypt SecureString values
    pub decrypt: bool,
    /// Clear the cache at the start of every store invocation
    pub always_expire: bool,
    /// Fail the whole read when the remote fetch fails
    pub fail_on_fetch_error: bool,
    /// Raise the default log level to debug
    pub debug: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_FN_ARN` - Store function identifier (no default)
    /// - `DECRYPT_PARAMS` - Decrypt secure values (flag)
    /// - `EXPIRE_CACHE` - Disable caching across invocations (flag)
    /// - `FAIL_ON_FETCH_ERROR` - Abort reads on fetch failure (flag)
    /// - `DEBUG` - Debug logging (flag)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            store_fn_arn: lookup(STORE_FN_ARN).filter(|arn| !arn.is_empty()),
            decrypt: lookup(DECRYPT_PARAMS).is_some(),
            always_expire: lookup(EXPIRE_CACHE).is_some(),
            fail_on_fetch_error: lookup(FAIL_ON_FETCH_ERROR).is_some(),
            debug: lookup(DEBUG).is_some(),
        }
    }

    /// Returns the store function identifier or a `MissingConfiguration` error.
    pub fn require_store_fn_arn(&self) -> Result<&str> {
        self.store_fn_arn
            .as_deref()
            .ok_or(ParamError::MissingConfiguration(STORE_FN_ARN))
    }

    /// Fetch failure policy selected by `FAIL_ON_FETCH_ERROR`.
    pub fn fetch_failure_policy(&self) -> FetchFailurePolicy {
        if self.fail_on_fetch_error {
            FetchFailurePolicy::Abort
        } else {
            FetchFailurePolicy::Omit
        }
    }
}
