//! In-memory `ParameterSource` for unit tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ParamError, Result};
use crate::models::{ParameterName, ParameterRecord};
use crate::source::ParameterSource;

/// Serves fixed values and records every batch it was asked for.
///
/// Names without a value are reported invalid, as SSM does.
#[derive(Debug, Default)]
pub struct FakeSource {
    values: HashMap<String, String>,
    internal_error: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeSource {
    pub fn with_values(values: &[(&str, &str)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// A source whose every call fails with `ServiceInternal`.
    pub fn failing() -> Self {
        Self {
            internal_error: true,
            ..Self::default()
        }
    }

    /// Batches requested so far, each sorted by name.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParameterSource for FakeSource {
    async fn get(&self, names: &BTreeSet<ParameterName>) -> Result<Vec<ParameterRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push(names.iter().map(|n| n.to_string()).collect());

        if self.internal_error {
            return Err(ParamError::ServiceInternal("fake outage".to_string()));
        }

        let invalid: Vec<String> = names
            .iter()
            .filter(|n| !self.values.contains_key(n.as_str()))
            .map(|n| n.to_string())
            .collect();
        if !invalid.is_empty() {
            return Err(ParamError::InvalidParameters(invalid));
        }

        Ok(names
            .iter()
            .map(|n| ParameterRecord::new(n.clone(), self.values[n.as_str()].clone()))
            .collect())
    }
}

/// Parses names for test inputs.
pub fn names(raw: &[&str]) -> Vec<ParameterName> {
    raw.iter()
        .map(|n| ParameterName::new(*n).unwrap())
        .collect()
}
