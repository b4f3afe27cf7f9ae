//! Runtime validation gate for requests and responses.
//!
//! Upstream payloads are not trustworthy just because a struct declares a
//! shape, so every endpoint call passes through two explicit gates: the
//! request is checked before any network call, and the response is parsed
//! into its typed form after transport. Both failure modes surface as
//! [`TrendsError::SchemaValidation`] with one `path: message` issue per
//! violation.

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde_json::Value;

use crate::error::TrendsError;

/// Placeholder path used for violations that cannot name a field.
pub const ROOT_PATH: &str = "(root)";

/// Structural checks a request type performs on itself.
///
/// Field types already rule out most bad inputs; implementations only report
/// what the type system cannot express (non-empty lists, minimum lengths,
/// cross-field constraints).
pub trait ValidateRequest {
    /// Returns one `path: message` entry per violation. Empty means valid.
    fn issues(&self) -> Vec<String>;
}

/// Gates a request before it reaches the wire.
///
/// `endpoint` is the bare endpoint label; the `.request` suffix is appended
/// here so call sites stay uniform.
pub fn validate_request<R: ValidateRequest>(endpoint: &str, request: &R) -> Result<(), TrendsError> {
    let issues = request.issues();
    if issues.is_empty() {
        return Ok(());
    }

    Err(TrendsError::SchemaValidation {
        endpoint: format!("{endpoint}.request"),
        issues,
    })
}

/// Parses an untyped response value into its typed shape.
///
/// Deserialization runs through `serde_path_to_error` so a violation deep in
/// the payload reports the offending path (`default.timelineData.3.value`)
/// instead of a bare serde message. The `.response` suffix is appended to
/// `endpoint` for diagnostics.
pub fn parse_response<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, TrendsError> {
    let deserializer = value.into_deserializer();
    match serde_path_to_error::deserialize(deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let path = if path.is_empty() || path == "." {
                ROOT_PATH.to_string()
            } else {
                path
            };
            Err(TrendsError::SchemaValidation {
                endpoint: format!("{endpoint}.response"),
                issues: vec![format!("{path}: {}", err.inner())],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Inner {
        timeline_data: Vec<u32>,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        default: Inner,
    }

    struct AlwaysValid;

    impl ValidateRequest for AlwaysValid {
        fn issues(&self) -> Vec<String> {
            Vec::new()
        }
    }

    struct AlwaysBroken;

    impl ValidateRequest for AlwaysBroken {
        fn issues(&self) -> Vec<String> {
            vec!["keywords: expected at least one keyword".to_string()]
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request("explore", &AlwaysValid).is_ok());
    }

    #[test]
    fn test_invalid_request_reports_endpoint_suffix() {
        let err = validate_request("explore", &AlwaysBroken).unwrap_err();
        match err {
            TrendsError::SchemaValidation { endpoint, issues } => {
                assert_eq!(endpoint, "explore.request");
                assert_eq!(issues.len(), 1);
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_reports_path() {
        let value = serde_json::json!({
            "default": { "timelineData": [1, "two", 3] }
        });
        let err = parse_response::<Outer>("interestOverTime", value).unwrap_err();
        match err {
            TrendsError::SchemaValidation { endpoint, issues } => {
                assert_eq!(endpoint, "interestOverTime.response");
                assert!(issues[0].starts_with("default.timelineData[1]"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_root_failure_uses_placeholder() {
        let err = parse_response::<Outer>("interestOverTime", Value::Null).unwrap_err();
        match err {
            TrendsError::SchemaValidation { issues, .. } => {
                assert!(issues[0].starts_with(ROOT_PATH));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_success() {
        let value = serde_json::json!({
            "default": { "timelineData": [1, 2, 3] }
        });
        let parsed = parse_response::<Outer>("interestOverTime", value).unwrap();
        assert_eq!(parsed.default.timeline_data, vec![1, 2, 3]);
    }
}
