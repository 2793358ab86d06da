//! AWS SSM Parameter Store source.

use std::collections::BTreeSet;

use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameters::{GetParametersError, GetParametersOutput};
use aws_sdk_ssm::types::Parameter;
use aws_sdk_ssm::Client;
use tracing::{debug, error, info};

use super::ParameterSource;
use crate::error::{ParamError, Result};
use crate::models::{ParameterName, ParameterRecord};

// == SSM Parameter Store ==
/// `ParameterSource` backed by `ssm:GetParameters`.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
    /// Sent as `WithDecryption` on every request
    decrypt: bool,
}

impl SsmParameterStore {
    pub fn new(client: Client, decrypt: bool) -> Self {
        Self { client, decrypt }
    }

    /// Builds the SSM client from shared SDK configuration.
    pub fn from_conf(sdk_config: &aws_config::SdkConfig, decrypt: bool) -> Self {
        Self::new(Client::new(sdk_config), decrypt)
    }
}

#[async_trait]
impl ParameterSource for SsmParameterStore {
    async fn get(&self, names: &BTreeSet<ParameterName>) -> Result<Vec<ParameterRecord>> {
        info!("Getting Parameters: {:?}", names);

        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.iter().map(|n| n.to_string()).collect()))
            .with_decryption(self.decrypt)
            .send()
            .await
            .map_err(|err| classify_error(err.into_service_error()))
            .and_then(records_from_output);

        match output {
            Ok(records) => {
                for record in &records {
                    debug!(
                        name = %record.name,
                        version = record.version,
                        last_modified = ?record.last_modified().map(|ts| ts.to_rfc3339()),
                        "Fetched parameter"
                    );
                }
                if let Ok(json) = serde_json::to_string_pretty(&records) {
                    debug!("Get Parameters Response: {}", json);
                }
                Ok(records)
            }
            Err(err) => {
                error!(error = %err, "Get Parameters failed");
                Err(err)
            }
        }
    }
}

// == Response Mapping ==
/// Converts a `GetParameters` response into records.
///
/// Any reported invalid name fails the whole call.
fn records_from_output(output: GetParametersOutput) -> Result<Vec<ParameterRecord>> {
    let invalid = output.invalid_parameters();
    if !invalid.is_empty() {
        return Err(ParamError::InvalidParameters(invalid.to_vec()));
    }

    output.parameters().iter().map(record_from_parameter).collect()
}

fn record_from_parameter(parameter: &Parameter) -> Result<ParameterRecord> {
    let name = parameter
        .name()
        .ok_or_else(|| ParamError::UnexpectedResponse("parameter without Name".to_string()))?;
    let value = parameter.value().ok_or_else(|| {
        ParamError::UnexpectedResponse(format!("parameter {} without Value", name))
    })?;

    let last_modified_ms = match parameter.last_modified_date() {
        Some(date) => Some(date.to_millis().map_err(|err| {
            ParamError::UnexpectedResponse(format!(
                "parameter {} has unrepresentable LastModifiedDate: {}",
                name, err
            ))
        })?),
        None => None,
    };

    Ok(ParameterRecord {
        name: ParameterName::new(name)?,
        value: value.to_string(),
        r#type: parameter.r#type().map(|t| t.as_str().to_string()),
        version: parameter.version(),
        last_modified_ms,
    })
}

// == Error Mapping ==
fn classify_error(err: GetParametersError) -> ParamError {
    match err {
        GetParametersError::InvalidKeyId(e) => {
            ParamError::AccessKeyInvalid(DisplayErrorContext(&e).to_string())
        }
        GetParametersError::InternalServerError(e) => {
            ParamError::ServiceInternal(DisplayErrorContext(&e).to_string())
        }
        other => ParamError::Service(DisplayErrorContext(&other).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::primitives::DateTime;
    use aws_sdk_ssm::types::error::{InternalServerError, InvalidKeyId};
    use aws_sdk_ssm::types::ParameterType;

    fn parameter(name: &str, value: &str) -> Parameter {
        Parameter::builder().name(name).value(value).build()
    }

    #[test]
    fn test_records_from_output() {
        let output = GetParametersOutput::builder()
            .parameters(
                Parameter::builder()
                    .name("DB_HOST")
                    .value("10.0.0.5")
                    .r#type(ParameterType::String)
                    .version(2)
                    .last_modified_date(DateTime::from_millis(1_700_000_000_500))
                    .build(),
            )
            .parameters(parameter("DB_PORT", "5432"))
            .build();

        let records = records_from_output(output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_str(), "DB_HOST");
        assert_eq!(records[0].value, "10.0.0.5");
        assert_eq!(records[0].r#type.as_deref(), Some("String"));
        assert_eq!(records[0].version, 2);
        assert_eq!(records[0].last_modified_ms, Some(1_700_000_000_500));
        assert_eq!(records[1].last_modified_ms, None);
    }

    #[test]
    fn test_invalid_parameters_fail_whole_call() {
        let output = GetParametersOutput::builder()
            .parameters(parameter("DB_PORT", "5432"))
            .invalid_parameters("DB_HOST")
            .build();

        match records_from_output(output) {
            Err(ParamError::InvalidParameters(names)) => assert_eq!(names, vec!["DB_HOST"]),
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_value_is_unexpected_shape() {
        let output = GetParametersOutput::builder()
            .parameters(Parameter::builder().name("DB_HOST").build())
            .build();

        assert!(matches!(
            records_from_output(output),
            Err(ParamError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_missing_name_is_unexpected_shape() {
        let output = GetParametersOutput::builder()
            .parameters(Parameter::builder().value("orphan").build())
            .build();

        assert!(matches!(
            records_from_output(output),
            Err(ParamError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_empty_response() {
        let output = GetParametersOutput::builder().build();
        assert!(records_from_output(output).unwrap().is_empty());
    }

    #[test]
    fn test_classify_invalid_key_id() {
        let err = GetParametersError::InvalidKeyId(
            InvalidKeyId::builder().message("bad key").build(),
        );
        assert!(matches!(classify_error(err), ParamError::AccessKeyInvalid(_)));
    }

    #[test]
    fn test_classify_internal_server_error() {
        let err = GetParametersError::InternalServerError(
            InternalServerError::builder().message("oops").build(),
        );
        assert!(matches!(classify_error(err), ParamError::ServiceInternal(_)));
    }

    #[test]
    fn test_classify_other_errors_as_service() {
        let err = GetParametersError::unhandled("Rate exceeded");
        assert!(matches!(classify_error(err), ParamError::Service(_)));
    }
}
