// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Trendsearch Core
//!
//! Core types, models, and validation for the Trendsearch client.
//!
//! This crate provides the foundational abstractions used across the other
//! Trendsearch crates, including:
//!
//! - Request and response models for every endpoint
//! - The error taxonomy shared by the transport, client, and CLI layers
//! - Request validation and lenient response parsing
//!
//! ## Key Types
//!
//! ### Errors
//! - [`TrendsError`] - The single error type for the whole client surface
//!
//! ### Validation
//! - [`ValidateRequest`] - Self-validation implemented by request types
//! - [`validate_request`] - Runs validation, mapping issues to an error
//! - [`parse_response`] - Typed deserialization with path-annotated issues
//!
//! ### Models
//! - [`ExploreRequest`] / [`ExploreResponse`] - The widget-discovery call
//! - [`InterestOverTimeResponse`], [`InterestByRegionResponse`],
//!   [`RelatedQueriesResponse`], [`RelatedTopicsResponse`] - Widget data
//! - [`TrendingNowRequest`] / [`TrendingNowItem`] - The batchexecute feed
//! - [`DailyTrendsResponse`], [`RealTimeTrendsResponse`],
//!   [`TopChartsResponse`] - Legacy endpoints

pub mod error;
pub mod models;
pub mod validate;

// Re-export error types
pub use error::TrendsError;

// Re-export validation helpers
pub use validate::{parse_response, validate_request, ValidateRequest, ROOT_PATH};

// Re-export the commonly used model types
pub use models::{
    ArticleKey, AutocompleteRequest, AutocompleteResponse, ComparisonItem, DailyTrendsRequest,
    DailyTrendsResponse, ExploreRequest, ExploreRequestBody, ExploreResponse, ExploreWidget, Geo,
    GeoMapData, GoogleProperty, InterestByRegionRequest, InterestByRegionResponse,
    InterestOverTimeMultirangeRequest, InterestOverTimeMultirangeResponse, InterestOverTimePoint,
    InterestOverTimeRequest, InterestOverTimeResponse, NumberOrString, PickerRequest,
    PickerResponse, RealTimeTrendsRequest, RealTimeTrendsResponse, RelatedQueriesRequest,
    RelatedQueriesResponse, RelatedTopicsRequest, RelatedTopicsResponse, Resolution, Topic,
    TopChartsDate, TopChartsRequest, TopChartsResponse, TrendingArticleItem,
    TrendingArticlesRequest, TrendingNowItem, TrendingNowRequest, TRENDING_NOW_HOURS,
};
