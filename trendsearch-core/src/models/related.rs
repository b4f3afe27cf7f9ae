//! Related-queries and related-topics (relatedsearches widget) shapes.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::common::{NumberOrString, Topic};

pub use crate::models::explore::ExploreRequest as RelatedQueriesRequest;
pub use crate::models::explore::ExploreRequest as RelatedTopicsRequest;

/// One related query row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQueryItem {
    /// The related query text.
    pub query: String,
    /// Relative value (top list) or growth percentage (rising list).
    pub value: f64,
    /// Display value; rising entries may be `"Breakout"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    /// Data availability flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_data: Option<bool>,
    /// Relative explore link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One related topic row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTopicItem {
    /// The related topic.
    pub topic: Topic,
    /// Relative value; upstream sends number or string here.
    pub value: NumberOrString,
    /// Display value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    /// Data availability flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_data: Option<bool>,
    /// Relative explore link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One ranked list bucket; index 0 is "top", index 1 is "rising".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedList<T> {
    /// Rows of this bucket.
    pub ranked_keyword: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedListDefault<T> {
    pub ranked_list: Vec<RankedList<T>>,
}

/// Response of the relatedsearches widget-data call, generic over the row
/// type (queries vs. topics).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct RelatedSearchesResponse<T> {
    pub(crate) default: RankedListDefault<T>,
}

impl<T> RelatedSearchesResponse<T> {
    /// Number of ranked-list buckets.
    pub fn list_count(&self) -> usize {
        self.default.ranked_list.len()
    }

    /// Splits the response into its top and rising buckets. Buckets beyond
    /// the first two are dropped; a missing bucket becomes empty.
    pub fn into_top_and_rising(self) -> (Vec<T>, Vec<T>) {
        let mut lists = self.default.ranked_list.into_iter();
        let top = lists.next().map(|l| l.ranked_keyword).unwrap_or_default();
        let rising = lists.next().map(|l| l.ranked_keyword).unwrap_or_default();
        (top, rising)
    }
}

/// Response of the related-queries call.
pub type RelatedQueriesResponse = RelatedSearchesResponse<RelatedQueryItem>;
/// Response of the related-topics call.
pub type RelatedTopicsResponse = RelatedSearchesResponse<RelatedTopicItem>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_rising_split() {
        let json = serde_json::json!({
            "default": {
                "rankedList": [
                    { "rankedKeyword": [{ "query": "rust lang", "value": 100.0 }] },
                    { "rankedKeyword": [{ "query": "rust 2024", "value": 250.0 }] }
                ]
            }
        });
        let response: RelatedQueriesResponse = serde_json::from_value(json).unwrap();
        let (top, rising) = response.into_top_and_rising();
        assert_eq!(top[0].query, "rust lang");
        assert_eq!(rising[0].query, "rust 2024");
    }

    #[test]
    fn test_missing_rising_bucket_is_empty() {
        let json = serde_json::json!({
            "default": {
                "rankedList": [
                    { "rankedKeyword": [{ "query": "rust lang", "value": 100.0 }] }
                ]
            }
        });
        let response: RelatedQueriesResponse = serde_json::from_value(json).unwrap();
        let (top, rising) = response.into_top_and_rising();
        assert_eq!(top.len(), 1);
        assert!(rising.is_empty());
    }
}
