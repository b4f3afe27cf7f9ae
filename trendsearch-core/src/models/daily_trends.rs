//! Daily-trends (legacy dailytrends endpoint) shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::{check_hl, NumberOrString};
use crate::validate::ValidateRequest;

/// Request for the legacy daily-trends endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyTrendsRequest {
    /// Geo code (required by upstream).
    pub geo: String,
    /// Category filter; upstream accepts a name or a numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NumberOrString>,
    /// ISO date-like string selecting the day (`2024-05-01`, optionally
    /// with a time component).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Number of news items per trend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ns: Option<i64>,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl ValidateRequest for DailyTrendsRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.geo.is_empty() {
            issues.push("geo: expected a non-empty string".to_string());
        }
        if let Some(date) = &self.date {
            if !is_iso_date_like(date) {
                issues.push("date: expected an ISO date-like string".to_string());
            }
        }
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

/// Accepts `YYYY-MM-DD` with an optional time component. Looser than full
/// RFC 3339 on purpose; upstream tolerates date-only input.
pub fn is_iso_date_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    let date_ok = bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit);
    if !date_ok {
        return false;
    }
    match bytes.get(10) {
        None => true,
        Some(b'T' | b't' | b' ') => value.len() > 11,
        Some(_) => false,
    }
}

/// A news article attached to a daily trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendArticle {
    /// Article headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Relative publication time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<String>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Article URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Article snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// The query title of a daily trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTrendTitle {
    /// The trending query.
    pub query: String,
}

/// Image metadata attached to a daily trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendImage {
    /// News article the image came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One trending search of a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendItem {
    /// The trending query.
    pub title: DailyTrendTitle,
    /// Display traffic figure, e.g. `200K+`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_traffic: Option<String>,
    /// Related query strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_queries: Option<Vec<String>>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<DailyTrendImage>,
    /// Attached news articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<DailyTrendArticle>>,
}

/// One day bucket of trending searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingSearchDay {
    /// Day in `YYYYMMDD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Localized day label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_date: Option<String>,
    /// Trends of this day.
    pub trending_searches: Vec<DailyTrendItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DailyTrendsDefault {
    pub trending_searches_days: Vec<TrendingSearchDay>,
}

/// Response of the daily-trends call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTrendsResponse {
    pub(crate) default: DailyTrendsDefault,
}

impl DailyTrendsResponse {
    /// Day buckets, newest first (upstream order).
    pub fn days(&self) -> &[TrendingSearchDay] {
        &self.default.trending_searches_days
    }

    /// Consumes the response, yielding the day buckets.
    pub fn into_days(self) -> Vec<TrendingSearchDay> {
        self.default.trending_searches_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_like_accepts_common_forms() {
        assert!(is_iso_date_like("2024-05-01"));
        assert!(is_iso_date_like("2024-05-01T12:30"));
        assert!(is_iso_date_like("2024-05-01 12:30:05Z"));
    }

    #[test]
    fn test_iso_date_like_rejects_garbage() {
        assert!(!is_iso_date_like("yesterday"));
        assert!(!is_iso_date_like("2024/05/01"));
        assert!(!is_iso_date_like("2024-05-01x"));
    }

    #[test]
    fn test_invalid_date_is_a_request_issue() {
        let request = DailyTrendsRequest {
            geo: "US".to_string(),
            date: Some("not-a-date".to_string()),
            ..DailyTrendsRequest::default()
        };
        assert!(request.issues().iter().any(|i| i.starts_with("date:")));
    }
}
