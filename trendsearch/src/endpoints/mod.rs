//! One module per upstream endpoint.
//!
//! Every endpoint follows the same shape: validate the request, talk to the
//! wire through [`EndpointContext`](crate::client::EndpointContext), parse
//! the response through the core validation gate, and return an
//! [`EndpointResult`].

use serde::Serialize;
use serde_json::Value;
use trendsearch_core::models::{
    ComparisonItem, ExploreWidget, GeoMapData, InterestOverTimeMultirangePoint,
    InterestOverTimePoint, RealTimeStory, RelatedQueryItem, RelatedTopicItem, Topic, TopChart,
    TopChartListItem, TrendingArticleItem, TrendingNowItem, TrendingSearchDay,
};
use trendsearch_core::models::daily_trends::DailyTrendItem;
use trendsearch_core::models::pickers::PickerResponse;

pub mod autocomplete;
pub mod csv;
pub mod daily_trends;
pub mod explore;
pub mod hot_trends;
pub mod interest_by_region;
pub mod interest_over_time;
pub mod multirange;
pub mod pickers;
pub mod real_time_trends;
pub mod related;
pub(crate) mod shared;
pub mod top_charts;
pub mod trending;

/// Per-call options shared by every endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointOptions {
    /// When set, the result carries the raw upstream payload alongside the
    /// normalized data.
    pub debug_raw_response: bool,
}

/// Normalized endpoint output, with the raw payload attached on request.
#[derive(Debug, Clone)]
pub struct EndpointResult<T> {
    /// The normalized data.
    pub data: T,
    /// Raw upstream payload, present only when
    /// [`EndpointOptions::debug_raw_response`] was set.
    pub raw: Option<Value>,
}

/// Data of an explore call: the widgets plus the comparison items that were
/// sent, which callers need to interpret per-keyword columns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreData {
    /// Widget descriptors issued by the server.
    pub widgets: Vec<ExploreWidget>,
    /// The comparison items sent upstream.
    pub comparison_items: Vec<ComparisonItem>,
}

/// Top and rising related queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQueriesData {
    /// Highest-volume related queries.
    pub top: Vec<RelatedQueryItem>,
    /// Fastest-growing related queries.
    pub rising: Vec<RelatedQueryItem>,
}

/// Top and rising related topics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTopicsData {
    /// Highest-volume related topics.
    pub top: Vec<RelatedTopicItem>,
    /// Fastest-growing related topics.
    pub rising: Vec<RelatedTopicItem>,
}

/// Day buckets plus the flattened trend list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendsData {
    /// Per-day buckets, upstream order.
    pub days: Vec<TrendingSearchDay>,
    /// All trends across the returned days.
    pub trends: Vec<DailyTrendItem>,
}

/// Chart buckets plus the flattened entry list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChartsData {
    /// Chart buckets.
    pub charts: Vec<TopChart>,
    /// All entries across the returned charts.
    pub items: Vec<TopChartListItem>,
}

/// A CSV export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvData {
    /// The CSV text as served.
    pub csv: String,
    /// Content type reported for the export.
    pub content_type: &'static str,
}

/// Result of [`TrendsClient::autocomplete`](crate::TrendsClient::autocomplete).
pub type AutocompleteResult = EndpointResult<Vec<Topic>>;
/// Result of [`TrendsClient::explore`](crate::TrendsClient::explore).
pub type ExploreResult = EndpointResult<ExploreData>;
/// Result of [`TrendsClient::interest_over_time`](crate::TrendsClient::interest_over_time).
pub type InterestOverTimeResult = EndpointResult<Vec<InterestOverTimePoint>>;
/// Result of [`TrendsClient::interest_by_region`](crate::TrendsClient::interest_by_region).
pub type InterestByRegionResult = EndpointResult<Vec<GeoMapData>>;
/// Result of [`TrendsClient::related_queries`](crate::TrendsClient::related_queries).
pub type RelatedQueriesResult = EndpointResult<RelatedQueriesData>;
/// Result of [`TrendsClient::related_topics`](crate::TrendsClient::related_topics).
pub type RelatedTopicsResult = EndpointResult<RelatedTopicsData>;
/// Result of [`TrendsClient::daily_trends`](crate::TrendsClient::daily_trends).
pub type DailyTrendsResult = EndpointResult<DailyTrendsData>;
/// Result of [`TrendsClient::real_time_trends`](crate::TrendsClient::real_time_trends).
pub type RealTimeTrendsResult = EndpointResult<Vec<RealTimeStory>>;
/// Result of [`TrendsClient::trending_now`](crate::TrendsClient::trending_now).
pub type TrendingNowResult = EndpointResult<Vec<TrendingNowItem>>;
/// Result of [`TrendsClient::trending_articles`](crate::TrendsClient::trending_articles).
pub type TrendingArticlesResult = EndpointResult<Vec<TrendingArticleItem>>;
/// Result of the picker endpoints.
pub type PickerResult = EndpointResult<PickerResponse>;
/// Result of [`TrendsClient::top_charts`](crate::TrendsClient::top_charts).
pub type TopChartsResult = EndpointResult<TopChartsData>;
/// Result of [`TrendsClient::interest_over_time_multirange`](crate::TrendsClient::interest_over_time_multirange).
pub type InterestOverTimeMultirangeResult =
    EndpointResult<Vec<InterestOverTimeMultirangePoint>>;
/// Result of [`TrendsClient::hot_trends_legacy`](crate::TrendsClient::hot_trends_legacy).
pub type HotTrendsLegacyResult = EndpointResult<Value>;
/// Result of the CSV export endpoints.
pub type CsvResult = EndpointResult<CsvData>;
