//! Error taxonomy for trendsearch.
//!
//! Google Trends is an undocumented upstream, so every failure a caller can
//! see is expressed as one flat tagged union. Each variant carries the
//! structured fields a machine-readable error envelope needs; nothing has to
//! be recovered by parsing the display message.

use thiserror::Error;

/// Error type shared by every trendsearch crate.
#[derive(Debug, Clone, Error)]
pub enum TrendsError {
    /// Network or HTTP-level failure. `status` is `None` for connection
    /// errors and per-attempt timeouts.
    #[error("{message}")]
    Transport {
        /// Human-readable description of the failure.
        message: String,
        /// Absolute URL of the attempted request.
        url: String,
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Response body truncated to 400 characters.
        response_body: Option<String>,
    },

    /// Upstream answered HTTP 429.
    #[error("Rate limited on {url} (HTTP {status})")]
    RateLimit {
        /// Absolute URL of the attempted request.
        url: String,
        /// The 429 status, kept for the error envelope.
        status: u16,
        /// Server-provided throttle window from `Retry-After`, in ms.
        retry_after_ms: Option<u64>,
    },

    /// A request or response failed shape validation.
    #[error("Schema validation failed for endpoint '{endpoint}'")]
    SchemaValidation {
        /// Diagnostic endpoint label, suffixed `.request` or `.response`.
        endpoint: String,
        /// One `path: message` entry per violation.
        issues: Vec<String>,
    },

    /// Well-formed response missing an expected structural element
    /// (widget not found, RPC frame not found). Always terminal.
    #[error("{message}")]
    UnexpectedResponse {
        /// Diagnostic endpoint label.
        endpoint: String,
        /// What was missing.
        message: String,
    },

    /// A known-legacy upstream path has been decommissioned (404/410).
    #[error("Endpoint '{endpoint}' is unavailable{}{}", format_status(.status), format_replacements(.replacements))]
    EndpointUnavailable {
        /// Diagnostic endpoint label.
        endpoint: String,
        /// The 404/410 that triggered the classification.
        status: Option<u16>,
        /// Suggested replacement endpoint names.
        replacements: Vec<String>,
    },

    /// Client misconfiguration (malformed base URL, broken TLS stack).
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

fn format_replacements(replacements: &[String]) -> String {
    if replacements.is_empty() {
        String::new()
    } else {
        format!(". Use '{}' instead", replacements.join("', '"))
    }
}

impl TrendsError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::RateLimit { .. } => "RATE_LIMIT_ERROR",
            Self::SchemaValidation { .. } => "SCHEMA_VALIDATION_ERROR",
            Self::UnexpectedResponse { .. } => "UNEXPECTED_RESPONSE_ERROR",
            Self::EndpointUnavailable { .. } => "ENDPOINT_UNAVAILABLE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Shorthand for an [`TrendsError::UnexpectedResponse`].
    pub fn unexpected(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`TrendsError::SchemaValidation`] with one issue.
    pub fn schema(endpoint: impl Into<String>, issue: impl Into<String>) -> Self {
        Self::SchemaValidation {
            endpoint: endpoint.into(),
            issues: vec![issue.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = TrendsError::RateLimit {
            url: "https://trends.google.com/x".to_string(),
            status: 429,
            retry_after_ms: Some(3000),
        };
        assert_eq!(err.code(), "RATE_LIMIT_ERROR");

        let err = TrendsError::Config("bad base url".to_string());
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_endpoint_unavailable_display_lists_replacements() {
        let err = TrendsError::EndpointUnavailable {
            endpoint: "dailyTrends".to_string(),
            status: Some(404),
            replacements: vec!["trendingNow".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("dailyTrends"));
        assert!(message.contains("HTTP 404"));
        assert!(message.contains("trendingNow"));
    }

    #[test]
    fn test_endpoint_unavailable_display_without_hints() {
        let err = TrendsError::EndpointUnavailable {
            endpoint: "experimental.topCharts".to_string(),
            status: None,
            replacements: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "Endpoint 'experimental.topCharts' is unavailable"
        );
    }
}
