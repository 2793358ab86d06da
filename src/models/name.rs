//! Parameter name type
//!
//! Cache keys and remote lookups both go through `ParameterName`, so a name is
//! normalized to a non-empty string exactly once, at the edge.

use std::borrow::Borrow;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};

/// A validated, non-empty parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ParamError::InvalidName(
                "Parameter name cannot be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    /// Creates a name from any displayable value, e.g. a numeric id.
    ///
    /// `from_display(5)` and `new("5")` address the same cache slot.
    pub fn from_display<T: fmt::Display>(value: T) -> Result<Self> {
        Self::new(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParameterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParameterName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Payloads may carry integer names; they are stringified on the way in.
struct ParameterNameVisitor;

impl<'de> Visitor<'de> for ParameterNameVisitor {
    type Value = ParameterName;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-empty string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        ParameterName::new(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
        ParameterName::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        ParameterName::from_display(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        ParameterName::from_display(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ParameterName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ParameterNameVisitor)
    }
}
