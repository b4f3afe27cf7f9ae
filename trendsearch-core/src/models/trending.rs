//! Trending-now and trending-articles (batchexecute RPC) shapes.

use serde::{Deserialize, Serialize};

use crate::validate::ValidateRequest;

/// Trend window lengths accepted by the trending-now RPC.
pub const TRENDING_NOW_HOURS: [u32; 4] = [4, 24, 48, 168];

/// Key referencing a news article in a later trending-articles call:
/// `[index, geo, id]` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleKey(pub i64, pub String, pub String);

/// Request for the trending-now RPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingNowRequest {
    /// Geo code, defaults to `US`.
    pub geo: String,
    /// Content language, defaults to `en`.
    pub language: String,
    /// Trend window in hours (4, 24, 48 or 168), defaults to 24.
    pub hours: u32,
}

impl Default for TrendingNowRequest {
    fn default() -> Self {
        Self {
            geo: "US".to_string(),
            language: "en".to_string(),
            hours: 24,
        }
    }
}

impl ValidateRequest for TrendingNowRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.geo.is_empty() {
            issues.push("geo: expected a non-empty string".to_string());
        }
        if self.language.len() < 2 {
            issues.push("language: expected at least 2 characters".to_string());
        }
        if !TRENDING_NOW_HOURS.contains(&self.hours) {
            issues.push("hours: expected one of 4, 24, 48, 168".to_string());
        }
        issues
    }
}

/// One normalized trending-now item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingNowItem {
    /// The trending keyword.
    pub keyword: String,
    /// Approximate search volume.
    pub traffic: f64,
    /// Traffic growth rate percentage.
    pub traffic_growth_rate: f64,
    /// RFC 3339 timestamp of when the trend became active.
    pub active_time: String,
    /// Related keyword strings.
    pub related_keywords: Vec<String>,
    /// Keys usable with the trending-articles endpoint.
    pub article_keys: Vec<ArticleKey>,
}

/// Request for the trending-articles RPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingArticlesRequest {
    /// Article keys from a previous trending-now call (at least one).
    pub article_keys: Vec<ArticleKey>,
    /// Number of articles to fetch (1-100), defaults to 5.
    pub article_count: u32,
}

impl Default for TrendingArticlesRequest {
    fn default() -> Self {
        Self {
            article_keys: Vec::new(),
            article_count: 5,
        }
    }
}

impl ValidateRequest for TrendingArticlesRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.article_keys.is_empty() {
            issues.push("articleKeys: expected at least one article key".to_string());
        }
        if self.article_count == 0 || self.article_count > 100 {
            issues.push("articleCount: expected an integer between 1 and 100".to_string());
        }
        issues
    }
}

/// One normalized trending article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingArticleItem {
    /// Article headline.
    pub title: String,
    /// Article URL.
    pub url: String,
    /// Publisher name.
    pub source: String,
    /// Publication date parts, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_date: Option<Vec<i64>>,
    /// Thumbnail URL, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_now_defaults_are_valid() {
        assert!(TrendingNowRequest::default().issues().is_empty());
    }

    #[test]
    fn test_trending_now_rejects_odd_hours() {
        let request = TrendingNowRequest {
            hours: 12,
            ..TrendingNowRequest::default()
        };
        assert!(request.issues().iter().any(|i| i.starts_with("hours:")));
    }

    #[test]
    fn test_article_key_round_trips_as_array() {
        let key = ArticleKey(3, "US".to_string(), "abc".to_string());
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"[3,"US","abc"]"#);
    }

    #[test]
    fn test_trending_articles_requires_keys() {
        let request = TrendingArticlesRequest::default();
        assert!(request.issues().iter().any(|i| i.starts_with("articleKeys:")));
    }
}
