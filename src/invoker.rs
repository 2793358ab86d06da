//! Store Function Invoker
//!
//! Synchronous (request/response) invocation of the store function.

use async_trait::async_trait;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_lambda::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ParamError, Result};
use crate::models::{ParameterName, Parameters};

// == Store Invoker ==
/// Invokes a deployed store function and decodes its answer.
#[async_trait]
pub trait StoreInvoker: Send + Sync {
    async fn invoke(&self, function: &str, names: &[ParameterName]) -> Result<Parameters>;
}

// == Lambda Store Invoker ==
/// `StoreInvoker` backed by `lambda:Invoke`.
#[derive(Debug, Clone)]
pub struct LambdaStoreInvoker {
    client: Client,
}

impl LambdaStoreInvoker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl StoreInvoker for LambdaStoreInvoker {
    async fn invoke(&self, function: &str, names: &[ParameterName]) -> Result<Parameters> {
        let payload = serde_json::to_vec(names)?;
        debug!("Invoking {} for {:?}", function, names);

        let output = self
            .client
            .invoke()
            .function_name(function)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|err| {
                error!(function = %function, "Invoke failed: {}", DisplayErrorContext(&err));
                ParamError::Invoke(DisplayErrorContext(&err).to_string())
            })?;

        payload_from_output(function, output)
    }
}

// == Response Mapping ==
/// Turns an `Invoke` response into the store's mapping.
///
/// A reported function error or an empty payload is an `Invoke` failure.
fn payload_from_output(function: &str, output: InvokeOutput) -> Result<Parameters> {
    let body = output.payload().map(|blob| blob.as_ref()).unwrap_or_default();

    if let Some(function_error) = output.function_error() {
        error!(function = %function, function_error = %function_error, "Store function failed");
        return Err(ParamError::Invoke(format!(
            "{} reported {}: {}",
            function,
            function_error,
            String::from_utf8_lossy(body)
        )));
    }
    if body.is_empty() {
        return Err(ParamError::Invoke(format!("{} returned no payload", function)));
    }

    decode_store_payload(body)
}

// == Payload Decoding ==
/// Decodes a store response.
///
/// Accepts a JSON object, or a JSON string that itself holds the object.
pub fn decode_store_payload(raw: &[u8]) -> Result<Parameters> {
    match serde_json::from_slice::<Value>(raw)? {
        Value::String(inner) => Ok(serde_json::from_str(&inner)?),
        other => Ok(serde_json::from_value(other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_object_payload() {
        let params = decode_store_payload(br#"{"DB_HOST":"10.0.0.5","DB_PORT":"5432"}"#).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params[&ParameterName::new("DB_PORT").unwrap()],
            "5432"
        );
    }

    #[test]
    fn test_decode_string_wrapped_payload() {
        let params = decode_store_payload(br#""{\"DB_HOST\": \"10.0.0.5\"}""#).unwrap();
        assert_eq!(
            params[&ParameterName::new("DB_HOST").unwrap()],
            "10.0.0.5"
        );
    }

    #[test]
    fn test_decode_empty_object() {
        assert!(decode_store_payload(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_mapping() {
        assert!(matches!(
            decode_store_payload(b"[1, 2]"),
            Err(ParamError::Payload(_))
        ));
        assert!(matches!(
            decode_store_payload(b"not json"),
            Err(ParamError::Payload(_))
        ));
    }

    #[test]
    fn test_output_with_payload() {
        let output = InvokeOutput::builder()
            .status_code(200)
            .payload(Blob::new(br#"{"DB_HOST":"10.0.0.5"}"#.to_vec()))
            .build();

        let params = payload_from_output("store", output).unwrap();
        assert_eq!(params[&ParameterName::new("DB_HOST").unwrap()], "10.0.0.5");
    }

    #[test]
    fn test_function_error_becomes_invoke() {
        let output = InvokeOutput::builder()
            .status_code(200)
            .function_error("Unhandled")
            .payload(Blob::new(br#"{"errorMessage":"boom"}"#.to_vec()))
            .build();

        match payload_from_output("store", output) {
            Err(ParamError::Invoke(message)) => {
                assert!(message.contains("Unhandled"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected Invoke, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payload_becomes_invoke() {
        let output = InvokeOutput::builder().status_code(200).build();

        assert!(matches!(
            payload_from_output("store", output),
            Err(ParamError::Invoke(_))
        ));
    }
}
