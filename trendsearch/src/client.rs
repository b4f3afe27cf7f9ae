//! Client configuration and the `TrendsClient` facade.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use trendsearch_core::models::{
    AutocompleteRequest, DailyTrendsRequest, ExploreRequest, InterestByRegionRequest,
    PickerRequest, RealTimeTrendsRequest, TopChartsRequest, TrendingArticlesRequest,
    TrendingNowRequest,
};
use trendsearch_core::TrendsError;
use trendsearch_fetch::{
    build_url, CookieStore, FetchConfig, FetchRuntime, HttpTransport, MemoryCookieStore,
    OutboundRequest, QueryValue, RateLimitPolicy, RawResponse, ReqwestTransport, RetryPolicy,
    DEFAULT_USER_AGENT,
};
use url::Url;

use crate::endpoints::{
    self, AutocompleteResult, CsvResult, DailyTrendsResult, EndpointOptions, ExploreResult,
    HotTrendsLegacyResult, InterestByRegionResult, InterestOverTimeMultirangeResult,
    InterestOverTimeResult, PickerResult, RealTimeTrendsResult, RelatedQueriesResult,
    RelatedTopicsResult, TopChartsResult, TrendingArticlesResult, TrendingNowResult,
};

/// Default upstream host.
pub const DEFAULT_BASE_URL: &str = "https://trends.google.com";

/// Default host language.
pub const DEFAULT_HL: &str = "en-US";

/// Configuration for [`TrendsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream base URL.
    pub base_url: String,
    /// Default host language applied when a request leaves `hl` unset.
    pub hl: String,
    /// Default timezone offset in minutes applied when a request leaves
    /// `tz` unset.
    pub tz: i32,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Retry behavior shared by all endpoints.
    pub retry: RetryPolicy,
    /// Request pacing shared by all endpoints.
    pub rate_limit: RateLimitPolicy,
    /// Optional HTTP(S) proxy URL.
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            hl: DEFAULT_HL.to_string(),
            tz: 0,
            timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
            rate_limit: RateLimitPolicy::default(),
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the default host language.
    #[must_use]
    pub fn with_hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = hl.into();
        self
    }

    /// Sets the default timezone offset in minutes.
    #[must_use]
    pub fn with_tz(mut self, tz: i32) -> Self {
        self.tz = tz;
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the rate-limit policy.
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitPolicy) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Routes all requests through an HTTP(S) proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: self.timeout,
            retry: self.retry,
            rate_limit: self.rate_limit,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// The narrow surface endpoints talk to: defaults plus the two request
/// primitives. All endpoint traffic shares one rate limiter and one retry
/// policy through the runtime held here.
#[derive(Debug, Clone)]
pub struct EndpointContext {
    runtime: FetchRuntime,
    base: Url,
    default_hl: String,
    default_tz: i32,
}

impl EndpointContext {
    /// Default host language for requests that leave `hl` unset.
    pub fn default_hl(&self) -> &str {
        &self.default_hl
    }

    /// Default timezone offset for requests that leave `tz` unset.
    pub fn default_tz(&self) -> i32 {
        self.default_tz
    }

    /// Builds an absolute URL from an endpoint path and query parameters.
    pub fn url(
        &self,
        path: &str,
        params: &[(&str, Option<QueryValue>)],
    ) -> Result<String, TrendsError> {
        build_url(self.base.as_str(), path, params)
    }

    /// Executes a request and parses the JSON body, prefix-stripped.
    pub async fn request_json(&self, request: &OutboundRequest) -> Result<Value, TrendsError> {
        self.runtime.fetch_json(request).await
    }

    /// Executes a request and returns the raw text body.
    pub async fn request_text(
        &self,
        request: &OutboundRequest,
    ) -> Result<RawResponse, TrendsError> {
        self.runtime.fetch_text(request).await
    }
}

/// Typed client for the unofficial Google Trends API.
///
/// One client holds one rate limiter, one retry policy, and one cookie jar;
/// cloning is cheap and clones share all of them.
#[derive(Debug, Clone)]
pub struct TrendsClient {
    ctx: EndpointContext,
}

impl TrendsClient {
    /// Creates a client with default configuration.
    pub fn new() -> Result<Self, TrendsError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from a configuration, using the reqwest transport.
    pub fn with_config(config: ClientConfig) -> Result<Self, TrendsError> {
        let transport = ReqwestTransport::with_proxy(config.proxy_url.as_deref())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client over a caller-supplied transport. This is the seam
    /// tests use to avoid the network.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, TrendsError> {
        Self::with_transport_and_cookies(config, transport, Arc::new(MemoryCookieStore::new()))
    }

    /// Creates a client with both a custom transport and cookie store.
    pub fn with_transport_and_cookies(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        cookies: Arc<dyn CookieStore>,
    ) -> Result<Self, TrendsError> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            TrendsError::Config(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        let runtime = FetchRuntime::with_cookie_store(config.fetch_config(), transport, cookies);
        Ok(Self {
            ctx: EndpointContext {
                runtime,
                base,
                default_hl: config.hl,
                default_tz: config.tz,
            },
        })
    }

    // ========================================================================
    // Stable endpoints
    // ========================================================================

    /// Suggests knowledge-graph topics for a keyword.
    pub async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
        options: &EndpointOptions,
    ) -> Result<AutocompleteResult, TrendsError> {
        endpoints::autocomplete::run(&self.ctx, request, options).await
    }

    /// Fetches the widget descriptors the widget-data endpoints build on.
    pub async fn explore(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<ExploreResult, TrendsError> {
        endpoints::explore::run(&self.ctx, request, options).await
    }

    /// Interest timeline for one or more keywords.
    pub async fn interest_over_time(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<InterestOverTimeResult, TrendsError> {
        endpoints::interest_over_time::run(&self.ctx, request, options).await
    }

    /// Interest broken down by geographic region.
    pub async fn interest_by_region(
        &self,
        request: &InterestByRegionRequest,
        options: &EndpointOptions,
    ) -> Result<InterestByRegionResult, TrendsError> {
        endpoints::interest_by_region::run(&self.ctx, request, options).await
    }

    /// Top and rising related queries.
    pub async fn related_queries(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<RelatedQueriesResult, TrendsError> {
        endpoints::related::queries(&self.ctx, request, options).await
    }

    /// Top and rising related topics.
    pub async fn related_topics(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<RelatedTopicsResult, TrendsError> {
        endpoints::related::topics(&self.ctx, request, options).await
    }

    /// Daily trending searches (legacy endpoint; may be decommissioned).
    pub async fn daily_trends(
        &self,
        request: &DailyTrendsRequest,
        options: &EndpointOptions,
    ) -> Result<DailyTrendsResult, TrendsError> {
        endpoints::daily_trends::run(&self.ctx, request, options).await
    }

    /// Real-time trending stories (legacy endpoint; may be decommissioned).
    pub async fn real_time_trends(
        &self,
        request: &RealTimeTrendsRequest,
        options: &EndpointOptions,
    ) -> Result<RealTimeTrendsResult, TrendsError> {
        endpoints::real_time_trends::run(&self.ctx, request, options).await
    }

    /// Currently trending searches via the batchexecute feed.
    pub async fn trending_now(
        &self,
        request: &TrendingNowRequest,
        options: &EndpointOptions,
    ) -> Result<TrendingNowResult, TrendsError> {
        endpoints::trending::now(&self.ctx, request, options).await
    }

    /// News articles for trends returned by [`Self::trending_now`].
    pub async fn trending_articles(
        &self,
        request: &TrendingArticlesRequest,
        options: &EndpointOptions,
    ) -> Result<TrendingArticlesResult, TrendsError> {
        endpoints::trending::articles(&self.ctx, request, options).await
    }

    // ========================================================================
    // Experimental endpoints
    // ========================================================================

    /// Geo filter picker tree.
    pub async fn geo_picker(
        &self,
        request: &PickerRequest,
        options: &EndpointOptions,
    ) -> Result<PickerResult, TrendsError> {
        endpoints::pickers::geo(&self.ctx, request, options).await
    }

    /// Category filter picker tree.
    pub async fn category_picker(
        &self,
        request: &PickerRequest,
        options: &EndpointOptions,
    ) -> Result<PickerResult, TrendsError> {
        endpoints::pickers::category(&self.ctx, request, options).await
    }

    /// Yearly top charts (legacy endpoint; may be decommissioned).
    pub async fn top_charts(
        &self,
        request: &TopChartsRequest,
        options: &EndpointOptions,
    ) -> Result<TopChartsResult, TrendsError> {
        endpoints::top_charts::run(&self.ctx, request, options).await
    }

    /// Interest timeline across multiple compared time ranges.
    pub async fn interest_over_time_multirange(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<InterestOverTimeMultirangeResult, TrendsError> {
        endpoints::multirange::run(&self.ctx, request, options).await
    }

    /// The ancient hot-trends visualization feed.
    pub async fn hot_trends_legacy(
        &self,
        options: &EndpointOptions,
    ) -> Result<HotTrendsLegacyResult, TrendsError> {
        endpoints::hot_trends::run(&self.ctx, options).await
    }

    /// Interest-over-time data as CSV.
    pub async fn interest_over_time_csv(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<CsvResult, TrendsError> {
        endpoints::csv::interest_over_time(&self.ctx, request, options).await
    }

    /// Multirange interest data as CSV.
    pub async fn interest_over_time_multirange_csv(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<CsvResult, TrendsError> {
        endpoints::csv::interest_over_time_multirange(&self.ctx, request, options).await
    }

    /// Interest-by-region data as CSV.
    pub async fn interest_by_region_csv(
        &self,
        request: &InterestByRegionRequest,
        options: &EndpointOptions,
    ) -> Result<CsvResult, TrendsError> {
        endpoints::csv::interest_by_region(&self.ctx, request, options).await
    }

    /// Related queries as CSV.
    pub async fn related_queries_csv(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<CsvResult, TrendsError> {
        endpoints::csv::related_queries(&self.ctx, request, options).await
    }

    /// Related topics as CSV.
    pub async fn related_topics_csv(
        &self,
        request: &ExploreRequest,
        options: &EndpointOptions,
    ) -> Result<CsvResult, TrendsError> {
        endpoints::csv::related_topics(&self.ctx, request, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_base_url_is_a_config_error() {
        let config = ClientConfig::new().with_base_url("not a url");
        let err = TrendsClient::with_config(config).unwrap_err();
        assert!(matches!(err, TrendsError::Config(_)));
    }

    #[test]
    fn test_builder_chains() {
        let config = ClientConfig::new()
            .with_hl("de-DE")
            .with_tz(-120)
            .with_rate_limit(RateLimitPolicy {
                max_concurrent: 2,
                min_delay_ms: 250,
            });
        assert_eq!(config.hl, "de-DE");
        assert_eq!(config.tz, -120);
        assert_eq!(config.rate_limit.max_concurrent, 2);
    }
}
