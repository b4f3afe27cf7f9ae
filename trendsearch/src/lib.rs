// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Trendsearch
//!
//! Typed client for the unofficial Google Trends API: explore sessions with
//! widget tokens, interest-over-time and by-region series, related queries
//! and topics, the trending-now `batchexecute` feed, and the legacy daily,
//! real-time and top-charts surfaces.
//!
//! ## Key Types
//!
//! - [`TrendsClient`] - The facade; one async method per endpoint
//! - [`ClientConfig`] - Base URL, locale, time zone, retry and pacing knobs
//! - [`EndpointOptions`] - Per-call switches such as raw-payload capture
//! - [`EndpointResult`] - Normalized data plus the optional raw payload
//!
//! ## Usage
//!
//! ```ignore
//! use trendsearch::{ClientConfig, TrendsClient};
//! use trendsearch_core::models::ExploreRequest;
//!
//! let client = TrendsClient::with_config(ClientConfig::default())?;
//! let series = client
//!     .interest_over_time(&ExploreRequest::keyword("rust"), &Default::default())
//!     .await?;
//! for point in &series.data {
//!     println!("{} {:?}", point.formatted_time, point.value);
//! }
//! ```

pub mod client;
pub mod endpoints;

pub use client::{ClientConfig, EndpointContext, TrendsClient, DEFAULT_BASE_URL, DEFAULT_HL};
pub use endpoints::{
    AutocompleteResult, CsvData, CsvResult, DailyTrendsData, DailyTrendsResult, EndpointOptions,
    EndpointResult, ExploreData, ExploreResult, HotTrendsLegacyResult, InterestByRegionResult,
    InterestOverTimeMultirangeResult, InterestOverTimeResult, PickerResult, RealTimeTrendsResult,
    RelatedQueriesData, RelatedQueriesResult, RelatedTopicsData, RelatedTopicsResult,
    TopChartsData, TopChartsResult, TrendingArticlesResult, TrendingNowResult,
};

pub use trendsearch_core::{models, TrendsError};
pub use trendsearch_fetch::{FetchConfig, HttpTransport, RateLimitPolicy, RetryPolicy};
