//! Error types for the parameter store functions
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Param Error Enum ==
/// Unified error type for fetching, caching and invoking.
#[derive(Error, Debug)]
pub enum ParamError {
    /// Parameter name failed validation before any remote call
    #[error("Invalid parameter name: {0}")]
    InvalidName(String),

    /// The parameter service reported these names as missing or inaccessible
    #[error("Invalid parameters: {0:?}")]
    InvalidParameters(Vec<String>),

    /// The KMS key used for decryption is not valid
    #[error("The query key ID isn't valid: {0}")]
    AccessKeyInvalid(String),

    /// The parameter service failed on its side
    #[error("An error occurred on the server side: {0}")]
    ServiceInternal(String),

    /// The response was missing fields the client relies on
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// Any other SDK failure (dispatch, throttling, validation)
    #[error("Service error: {0}")]
    Service(String),

    /// A required environment variable is absent
    #[error("Missing configuration: {0}")]
    MissingConfiguration(&'static str),

    /// The store function could not be invoked or reported a failure
    #[error("Invocation failed: {0}")]
    Invoke(String),

    /// JSON encoding or decoding failed
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ParamError {
    /// Names reported invalid by the service, empty for every other kind.
    pub fn invalid_names(&self) -> &[String] {
        match self {
            ParamError::InvalidParameters(names) => names,
            _ => &[],
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, ParamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_message_names_them() {
        let err = ParamError::InvalidParameters(vec!["DB_HOST".to_string()]);
        assert!(err.to_string().contains("DB_HOST"));
        assert_eq!(err.invalid_names(), ["DB_HOST".to_string()]);
    }

    #[test]
    fn test_invalid_names_empty_for_other_kinds() {
        let err = ParamError::ServiceInternal("boom".to_string());
        assert!(err.invalid_names().is_empty());
    }

    #[test]
    fn test_payload_from_serde() {
        let err: ParamError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, ParamError::Payload(_)));
    }
}
