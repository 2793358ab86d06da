//! Remote Parameter Source Module
//!
//! Abstraction over the remote key-value parameter service plus the
//! AWS SSM Parameter Store implementation.

mod ssm;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ParameterName, ParameterRecord};

pub use ssm::SsmParameterStore;

// == Parameter Source ==
/// Fetches current values for a batch of parameter names.
#[async_trait]
pub trait ParameterSource: Send + Sync {
    /// Issues one batched request for `names`.
    ///
    /// Fails as a whole when any name is invalid; valid names from the same
    /// call are not returned.
    async fn get(&self, names: &BTreeSet<ParameterName>) -> Result<Vec<ParameterRecord>>;
}
