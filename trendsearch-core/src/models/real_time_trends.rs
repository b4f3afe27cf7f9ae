//! Real-time-trends (legacy realtimetrends endpoint) shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::{check_hl, NumberOrString};
use crate::validate::ValidateRequest;

/// Request for the legacy real-time-trends endpoint. The single-letter
/// pagination fields mirror the undocumented upstream parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealTimeTrendsRequest {
    /// Geo code (required by upstream).
    pub geo: String,
    /// Category filter; name or numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NumberOrString>,
    /// First story index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fi: Option<i64>,
    /// First story summary index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fs: Option<i64>,
    /// Requested story id count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ri: Option<i64>,
    /// Requested summary count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rs: Option<i64>,
    /// Sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl ValidateRequest for RealTimeTrendsRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.geo.is_empty() {
            issues.push("geo: expected a non-empty string".to_string());
        }
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

/// Image metadata attached to a story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryImage {
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    /// News article the image came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A news article attached to a story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryArticle {
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

/// One trending story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeStory {
    /// Story identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Story title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entities involved in the story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_names: Option<Vec<String>>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<StoryImage>,
    /// Attached news articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<StoryArticle>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StorySummaries {
    pub trending_stories: Vec<RealTimeStory>,
}

/// Response of the real-time-trends call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeTrendsResponse {
    pub(crate) story_summaries: StorySummaries,
}

impl RealTimeTrendsResponse {
    /// The trending stories.
    pub fn stories(&self) -> &[RealTimeStory] {
        &self.story_summaries.trending_stories
    }

    /// Consumes the response, yielding the trending stories.
    pub fn into_stories(self) -> Vec<RealTimeStory> {
        self.story_summaries.trending_stories
    }
}
