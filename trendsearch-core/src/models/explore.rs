//! Explore endpoint shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::{check_geo, check_hl, check_keywords, ExploreWidget, Geo, GoogleProperty};
use crate::validate::ValidateRequest;

/// Request for the explore endpoint, also reused verbatim by the
/// widget-backed endpoints (interest over time, related queries/topics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploreRequest {
    /// Keywords to compare (at least one).
    pub keywords: Vec<String>,
    /// Optional geo filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// Time window expression, e.g. `today 12-m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Category id (0 = all categories).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    /// Search property filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<GoogleProperty>,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl ExploreRequest {
    /// Convenience constructor for a single-keyword request.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keywords: vec![keyword.into()],
            ..Self::default()
        }
    }
}

impl ValidateRequest for ExploreRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        check_keywords(&mut issues, &self.keywords);
        check_geo(&mut issues, self.geo.as_ref());
        check_hl(&mut issues, self.hl.as_deref());
        if let Some(time) = &self.time {
            if time.is_empty() {
                issues.push("time: expected a non-empty string".to_string());
            }
        }
        issues
    }
}

/// One keyword/geo/time triple in the explore request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonItem {
    /// The keyword being compared.
    pub keyword: String,
    /// Geo code for this keyword, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    /// Time window for this keyword.
    pub time: String,
}

/// Body of the `req` query parameter on explore calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreRequestBody {
    /// Keyword comparison items.
    pub comparison_item: Vec<ComparisonItem>,
    /// Category id, 0 when unfiltered.
    pub category: u32,
    /// Property filter, empty string for web search.
    pub property: String,
}

/// Explore response: the widget list other endpoints consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreResponse {
    /// Widget descriptors issued by the server.
    pub widgets: Vec<ExploreWidget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keywords_rejected() {
        let request = ExploreRequest::default();
        let issues = request.issues();
        assert!(issues.iter().any(|i| i.starts_with("keywords:")));
    }

    #[test]
    fn test_valid_request_has_no_issues() {
        let mut request = ExploreRequest::keyword("rust");
        request.geo = Some(Geo::One("US".to_string()));
        assert!(request.issues().is_empty());
    }

    #[test]
    fn test_comparison_item_omits_absent_geo() {
        let item = ComparisonItem {
            keyword: "rust".to_string(),
            geo: None,
            time: "today 12-m".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("geo"));
    }
}
