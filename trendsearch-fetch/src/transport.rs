//! HTTP transport and the request execution pipeline.
//!
//! [`HttpTransport`] is the seam between the client and the network: the
//! production implementation wraps [`reqwest`], and tests substitute scripted
//! transports. [`FetchRuntime`] layers pacing, retries, per-attempt timeouts,
//! cookie replay, and status classification on top of a transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use trendsearch_core::TrendsError;
use url::Url;

use crate::cookies::{CookieStore, MemoryCookieStore};
use crate::prefix::strip_google_prefix;
use crate::rate_limit::{RateLimitPolicy, RateLimiter};
use crate::retry::{default_should_retry, run_with_retry, RetryPolicy};

/// Default per-attempt timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Browser-like user agent sent by default; the API refuses obviously
/// non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Characters of response body kept when embedding it in an error.
const ERROR_BODY_LIMIT: usize = 400;

// ============================================================================
// Request / response types
// ============================================================================

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

/// A fully prepared request, independent of any HTTP library.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Absolute request URL, query string included.
    pub url: String,
    /// Headers in send order.
    pub headers: Vec<(String, String)>,
    /// Request body, for POSTs.
    pub body: Option<String>,
}

impl OutboundRequest {
    /// A GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST request for `url` carrying `body`.
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

/// The raw outcome of one transport round trip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers; repeated headers appear once per value.
    pub headers: Vec<(String, String)>,
    /// Response body decoded as UTF-8.
    pub body: String,
}

impl RawResponse {
    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values of a header, matched case-insensitively.
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP round trip.
///
/// Implementations report network-level failures as
/// [`TrendsError::Transport`] with no status; status classification is the
/// caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and collects the full response body.
    async fn execute(&self, request: OutboundRequest) -> Result<RawResponse, TrendsError>;
}

// ============================================================================
// Reqwest-backed transport
// ============================================================================

/// Production [`HttpTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with no proxy.
    pub fn new() -> Result<Self, TrendsError> {
        Self::with_proxy(None)
    }

    /// Creates a transport, optionally routing through an HTTP(S) proxy.
    pub fn with_proxy(proxy_url: Option<&str>) -> Result<Self, TrendsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(proxy_url) = proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| TrendsError::Config(format!("invalid proxy URL: {e}")))?;
            builder = builder.proxy(proxy);
        }
        let inner = builder.build().map_err(|e| TrendsError::Transport {
            message: format!("failed to build HTTP client: {e}"),
            url: String::new(),
            status: None,
            response_body: None,
        })?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<RawResponse, TrendsError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.inner.get(&request.url),
            HttpMethod::Post => self.inner.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let url = request.url.clone();
        let response = builder.send().await.map_err(|e| TrendsError::Transport {
            message: if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                format!("request failed: {e}")
            },
            url: url.clone(),
            status: None,
            response_body: None,
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(|e| TrendsError::Transport {
            message: format!("failed to read response body: {e}"),
            url,
            status: Some(status),
            response_body: None,
        })?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

// ============================================================================
// Runtime
// ============================================================================

/// Tunables for a [`FetchRuntime`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retry behavior.
    pub retry: RetryPolicy,
    /// Request pacing.
    pub rate_limit: RateLimitPolicy,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            rate_limit: RateLimitPolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Runs requests through pacing, retries, timeouts, and cookie replay.
#[derive(Clone)]
pub struct FetchRuntime {
    transport: Arc<dyn HttpTransport>,
    cookies: Arc<dyn CookieStore>,
    limiter: RateLimiter,
    retry: RetryPolicy,
    timeout: Duration,
    user_agent: String,
}

impl std::fmt::Debug for FetchRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRuntime")
            .field("limiter", &self.limiter)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl FetchRuntime {
    /// Creates a runtime over `transport` with an in-memory cookie store.
    pub fn new(config: FetchConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_cookie_store(config, transport, Arc::new(MemoryCookieStore::new()))
    }

    /// Creates a runtime with a caller-supplied cookie store.
    pub fn with_cookie_store(
        config: FetchConfig,
        transport: Arc<dyn HttpTransport>,
        cookies: Arc<dyn CookieStore>,
    ) -> Self {
        Self {
            transport,
            cookies,
            limiter: RateLimiter::new(config.rate_limit),
            retry: config.retry,
            timeout: config.timeout,
            user_agent: config.user_agent,
        }
    }

    /// Executes a request with pacing and retries, returning the successful
    /// response as text.
    ///
    /// The concurrency slot is acquired once per call and held across every
    /// retry attempt, so an in-flight retry chain is never interleaved with
    /// queued requests.
    pub async fn fetch_text(&self, request: &OutboundRequest) -> Result<RawResponse, TrendsError> {
        self.limiter
            .run(|| {
                run_with_retry(
                    &self.retry,
                    |attempt| self.request_once(request, attempt),
                    default_should_retry,
                )
            })
            .await
    }

    /// Executes a request and parses the body as JSON, stripping the `)]}'`
    /// security prefix first.
    pub async fn fetch_json(&self, request: &OutboundRequest) -> Result<Value, TrendsError> {
        let response = self.fetch_text(request).await?;
        let body = strip_google_prefix(&response.body);
        serde_json::from_str(body).map_err(|e| TrendsError::Transport {
            message: format!("response body is not valid JSON: {e}"),
            url: request.url.clone(),
            status: Some(response.status),
            response_body: Some(truncate_body(&response.body)),
        })
    }

    /// One attempt: header injection, timeout, cookie bookkeeping, and
    /// status classification.
    async fn request_once(
        &self,
        request: &OutboundRequest,
        attempt: u32,
    ) -> Result<RawResponse, TrendsError> {
        let mut prepared = request.clone();
        if !prepared.has_header("user-agent") {
            prepared = prepared.with_header("user-agent", self.user_agent.clone());
        }
        if !prepared.has_header("accept-language") {
            if let Some(hl) = hl_from_url(&prepared.url) {
                prepared = prepared.with_header("accept-language", hl);
            }
        }
        let origin = origin_of(&prepared.url);
        if let Some(origin) = &origin {
            if !prepared.has_header("cookie") {
                if let Some(cookie) = self.cookies.cookie_header(origin).await {
                    prepared = prepared.with_header("cookie", cookie);
                }
            }
        }

        debug!(url = %prepared.url, attempt, "Sending request");
        let response = match tokio::time::timeout(
            self.timeout,
            self.transport.execute(prepared),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(TrendsError::Transport {
                    message: format!(
                        "request timed out after {}ms",
                        self.timeout.as_millis()
                    ),
                    url: request.url.clone(),
                    status: None,
                    response_body: None,
                });
            }
        };

        if let Some(origin) = &origin {
            let set_cookie: Vec<String> = response
                .header_all("set-cookie")
                .into_iter()
                .map(str::to_string)
                .collect();
            if !set_cookie.is_empty() {
                self.cookies.store(origin, &set_cookie).await;
            }
        }

        if response.status == 429 {
            let retry_after_ms = response
                .header("retry-after")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|secs| secs * 1000);
            return Err(TrendsError::RateLimit {
                url: request.url.clone(),
                status: 429,
                retry_after_ms,
            });
        }

        if !response.is_success() {
            return Err(TrendsError::Transport {
                message: format!("unexpected status code {}", response.status),
                url: request.url.clone(),
                status: Some(response.status),
                response_body: Some(truncate_body(&response.body)),
            });
        }

        Ok(response)
    }
}

/// Truncates a response body for inclusion in error messages.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_LIMIT {
        body.to_string()
    } else {
        let mut out: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        out.push_str("...");
        out
    }
}

fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{}://{host}:{port}", parsed.scheme())),
        None => Some(format!("{}://{host}", parsed.scheme())),
    }
}

fn hl_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(name, _)| name == "hl")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Transport that replays a scripted sequence of outcomes and records
    /// the requests it saw.
    struct ScriptedTransport {
        outcomes: Mutex<VecDeque<Result<RawResponse, TrendsError>>>,
        seen: Mutex<Vec<OutboundRequest>>,
    }

    impl ScriptedTransport {
        fn new(outcomes: Vec<Result<RawResponse, TrendsError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<OutboundRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn execute(&self, request: OutboundRequest) -> Result<RawResponse, TrendsError> {
            self.seen.lock().unwrap().push(request);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted transport exhausted")
        }
    }

    fn ok(body: &str) -> Result<RawResponse, TrendsError> {
        Ok(RawResponse {
            status: 200,
            headers: vec![],
            body: body.to_string(),
        })
    }

    fn status(code: u16, body: &str, headers: Vec<(String, String)>) -> RawResponse {
        RawResponse {
            status: code,
            headers,
            body: body.to_string(),
        }
    }

    fn fast_config() -> FetchConfig {
        FetchConfig {
            retry: RetryPolicy {
                max_retries: 3,
                base_delay_ms: 10,
                max_delay_ms: 50,
            },
            rate_limit: RateLimitPolicy {
                max_concurrent: 1,
                min_delay_ms: 0,
            },
            ..FetchConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_then_success() {
        let transport = ScriptedTransport::new(vec![
            Ok(status(
                429,
                "slow down",
                vec![("Retry-After".to_string(), "1".to_string())],
            )),
            ok("{\"fine\":true}"),
        ]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x?hl=en-US");
        let value = runtime.fetch_json(&request).await.unwrap();
        assert_eq!(value["fine"], true);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_client_error_is_not_retried() {
        let transport = ScriptedTransport::new(vec![Ok(status(400, "bad request body", vec![]))]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x");
        let err = runtime.fetch_text(&request).await.unwrap_err();
        match err {
            TrendsError::Transport {
                status: Some(400),
                response_body: Some(body),
                ..
            } => assert_eq!(body, "bad request body"),
            other => panic!("expected Transport 400, got {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_retried_until_exhaustion() {
        let transport = ScriptedTransport::new(vec![
            Ok(status(503, "down", vec![])),
            Ok(status(503, "down", vec![])),
            Ok(status(503, "down", vec![])),
            Ok(status(503, "down", vec![])),
        ]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x");
        let err = runtime.fetch_text(&request).await.unwrap_err();
        assert!(matches!(
            err,
            TrendsError::Transport {
                status: Some(503),
                ..
            }
        ));
        assert_eq!(transport.requests().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_chain_holds_concurrency_slot() {
        let transport = ScriptedTransport::new(vec![
            Ok(status(503, "down", vec![])),
            ok("first"),
            ok("second"),
        ]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let first = {
            let runtime = runtime.clone();
            tokio::spawn(async move {
                runtime
                    .fetch_text(&OutboundRequest::get("https://trends.google.com/a"))
                    .await
            })
        };
        // Let the first call start its retry backoff before queueing another.
        tokio::time::sleep(Duration::from_millis(1)).await;
        let second = {
            let runtime = runtime.clone();
            tokio::spawn(async move {
                runtime
                    .fetch_text(&OutboundRequest::get("https://trends.google.com/b"))
                    .await
            })
        };

        assert_eq!(first.await.unwrap().unwrap().body, "first");
        assert_eq!(second.await.unwrap().unwrap().body, "second");

        let urls: Vec<String> = transport
            .requests()
            .into_iter()
            .map(|request| request.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://trends.google.com/a",
                "https://trends.google.com/a",
                "https://trends.google.com/b",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_language_derived_from_hl() {
        let transport = ScriptedTransport::new(vec![ok("{}")]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x?hl=de-DE");
        runtime.fetch_text(&request).await.unwrap();

        let seen = transport.requests();
        let accept_language = seen[0]
            .headers
            .iter()
            .find(|(n, _)| n == "accept-language")
            .map(|(_, v)| v.clone());
        assert_eq!(accept_language.as_deref(), Some("de-DE"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cookies_replayed_on_next_request() {
        let transport = ScriptedTransport::new(vec![
            Ok(status(
                200,
                "{}",
                vec![("set-cookie".to_string(), "NID=xyz; Path=/".to_string())],
            )),
            ok("{}"),
        ]);
        let runtime = FetchRuntime::new(fast_config(), transport.clone());

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x");
        runtime.fetch_text(&request).await.unwrap();
        runtime.fetch_text(&request).await.unwrap();

        let seen = transport.requests();
        assert!(!seen[0].has_header("cookie"));
        let cookie = seen[1]
            .headers
            .iter()
            .find(|(n, _)| n == "cookie")
            .map(|(_, v)| v.clone());
        assert_eq!(cookie.as_deref(), Some("NID=xyz"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_json_after_prefix_strip() {
        let transport = ScriptedTransport::new(vec![ok(")]}'\n<html>oops</html>")]);
        let runtime = FetchRuntime::new(fast_config(), transport);

        let request = OutboundRequest::get("https://trends.google.com/trends/api/x");
        let err = runtime.fetch_json(&request).await.unwrap_err();
        assert!(matches!(
            err,
            TrendsError::Transport {
                status: Some(200),
                ..
            }
        ));
    }

    #[test]
    fn test_truncate_body() {
        let short = "x".repeat(400);
        assert_eq!(truncate_body(&short), short);
        let long = "y".repeat(401);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 403);
        assert!(truncated.ends_with("..."));
    }
}
