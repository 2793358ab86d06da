//! Fetched parameter records and the name → value mapping handed to callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ParameterName;

/// Name → value mapping returned by cache reads and the store function.
pub type Parameters = BTreeMap<ParameterName, String>;

/// A single parameter as returned by the remote service.
///
/// Only `name` and `value` are cached; the rest is logged for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterRecord {
    pub name: ParameterName,
    pub value: String,
    /// Service-side type, e.g. `String`, `StringList` or `SecureString`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub version: i64,
    /// Last modification time in milliseconds since the Unix epoch
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_ms: Option<i64>,
}

impl ParameterRecord {
    /// Creates a record with only a name and value.
    pub fn new(name: ParameterName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            r#type: None,
            version: 0,
            last_modified_ms: None,
        }
    }

    /// Last modification time as a UTC timestamp.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified_ms
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
