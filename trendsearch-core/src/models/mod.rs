//! Request and response models for every Trends endpoint.
//!
//! Requests validate themselves through [`ValidateRequest`]; responses are
//! deserialized leniently, ignoring upstream fields we do not model.
//!
//! [`ValidateRequest`]: crate::validate::ValidateRequest

pub mod autocomplete;
pub mod common;
pub mod daily_trends;
pub mod explore;
pub mod interest_by_region;
pub mod interest_over_time;
pub mod multirange;
pub mod pickers;
pub mod real_time_trends;
pub mod related;
pub mod top_charts;
pub mod trending;

pub use autocomplete::{AutocompleteRequest, AutocompleteResponse};
pub use common::{ExploreWidget, Geo, GoogleProperty, NumberOrString, Resolution, Topic};
pub use daily_trends::{
    DailyTrendArticle, DailyTrendImage, DailyTrendItem, DailyTrendTitle, DailyTrendsRequest,
    DailyTrendsResponse, TrendingSearchDay,
};
pub use explore::{ComparisonItem, ExploreRequest, ExploreRequestBody, ExploreResponse};
pub use interest_by_region::{
    Coordinates, GeoMapData, InterestByRegionRequest, InterestByRegionResponse,
};
pub use interest_over_time::{
    InterestOverTimePoint, InterestOverTimeRequest, InterestOverTimeResponse,
};
pub use multirange::{
    InterestOverTimeMultirangePoint, InterestOverTimeMultirangeRequest,
    InterestOverTimeMultirangeResponse, MultirangeColumnData, NumberOrNumbers, StringOrStrings,
};
pub use pickers::{PickerNode, PickerRequest, PickerResponse};
pub use real_time_trends::{
    RealTimeStory, RealTimeTrendsRequest, RealTimeTrendsResponse, StoryArticle, StoryImage,
};
pub use related::{
    RankedList, RelatedQueriesRequest, RelatedQueriesResponse, RelatedQueryItem,
    RelatedSearchesResponse, RelatedTopicItem, RelatedTopicsRequest, RelatedTopicsResponse,
};
pub use top_charts::{
    TopChart, TopChartListItem, TopChartsDate, TopChartsRequest, TopChartsResponse,
};
pub use trending::{
    ArticleKey, TrendingArticleItem, TrendingArticlesRequest, TrendingNowItem, TrendingNowRequest,
    TRENDING_NOW_HOURS,
};
