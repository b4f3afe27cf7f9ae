//! JSON envelopes and exit codes.
//!
//! Every invocation prints exactly one JSON document so the CLI can be
//! scripted: `{"ok":true,...}` to stdout on success, `{"ok":false,"error":...}`
//! to stderr on failure. Log diagnostics also go to stderr, through tracing.

use anyhow::Result;
use serde_json::{json, Value};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;
use crate::OutputFormat;

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// Unclassified error.
    Error = 1,
    /// Usage or configuration error.
    Usage = 2,
    /// Upstream endpoint decommissioned.
    EndpointUnavailable = 3,
    /// Rate limited after all retries.
    RateLimited = 4,
    /// Network or HTTP failure.
    Transport = 5,
    /// Response no longer matches the expected shape.
    SchemaDrift = 6,
}

/// Exit code for a failed invocation.
pub fn exit_code_for(error: &TrendsError) -> i32 {
    let code = match error {
        TrendsError::Config(_) => ExitCode::Usage,
        TrendsError::EndpointUnavailable { .. } => ExitCode::EndpointUnavailable,
        TrendsError::RateLimit { .. } => ExitCode::RateLimited,
        TrendsError::Transport { .. } => ExitCode::Transport,
        TrendsError::SchemaValidation { .. } | TrendsError::UnexpectedResponse { .. } => {
            ExitCode::SchemaDrift
        }
    };
    code as i32
}

fn render(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    })
}

/// Prints the success envelope.
pub fn emit_success(output: &CommandOutput, format: OutputFormat) -> Result<()> {
    let mut envelope = json!({
        "ok": true,
        "endpoint": output.endpoint,
        "data": output.data,
    });
    if let Some(raw) = &output.raw {
        envelope["raw"] = raw.clone();
    }
    println!("{}", render(&envelope, format)?);
    Ok(())
}

/// Structured details for the error envelope, one shape per error kind.
fn error_details(error: &TrendsError) -> Value {
    match error {
        TrendsError::Transport {
            url,
            status,
            response_body,
            ..
        } => json!({
            "url": url,
            "status": status,
            "responseBody": response_body,
        }),
        TrendsError::RateLimit {
            url,
            status,
            retry_after_ms,
        } => json!({
            "url": url,
            "status": status,
            "retryAfterMs": retry_after_ms,
        }),
        TrendsError::SchemaValidation { endpoint, issues } => json!({
            "endpoint": endpoint,
            "issues": issues,
        }),
        TrendsError::UnexpectedResponse { endpoint, .. } => json!({
            "endpoint": endpoint,
        }),
        TrendsError::EndpointUnavailable {
            endpoint,
            status,
            replacements,
        } => json!({
            "endpoint": endpoint,
            "status": status,
            "replacements": replacements,
        }),
        TrendsError::Config(_) => Value::Null,
    }
}

/// Prints the error envelope to stderr.
pub fn emit_error(error: &TrendsError, format: OutputFormat) -> Result<()> {
    let envelope = json!({
        "ok": false,
        "error": {
            "code": error.code(),
            "message": error.to_string(),
            "details": error_details(error),
        },
    });
    eprintln!("{}", render(&envelope, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_error_kind() {
        let rate_limited = TrendsError::RateLimit {
            url: "https://trends.google.com/x".to_string(),
            status: 429,
            retry_after_ms: None,
        };
        assert_eq!(exit_code_for(&rate_limited), 4);

        let gone = TrendsError::EndpointUnavailable {
            endpoint: "dailyTrends".to_string(),
            status: Some(404),
            replacements: vec!["trendingNow".to_string()],
        };
        assert_eq!(exit_code_for(&gone), 3);

        let drift = TrendsError::schema("explore.response", "(root): bad");
        assert_eq!(exit_code_for(&drift), 6);

        let unexpected = TrendsError::unexpected("trendingNow", "no frame");
        assert_eq!(exit_code_for(&unexpected), 6);

        let config = TrendsError::Config("bad base url".to_string());
        assert_eq!(exit_code_for(&config), 2);
    }

    #[test]
    fn test_error_details_carry_structured_fields() {
        let error = TrendsError::RateLimit {
            url: "https://trends.google.com/x".to_string(),
            status: 429,
            retry_after_ms: Some(3000),
        };
        let details = error_details(&error);
        assert_eq!(details["status"], 429);
        assert_eq!(details["retryAfterMs"], 3000);
    }
}
