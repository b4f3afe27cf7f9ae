//! End-to-end endpoint flows over a scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use trendsearch::models::{
    AutocompleteRequest, DailyTrendsRequest, ExploreRequest, TrendingNowRequest,
};
use trendsearch::{ClientConfig, EndpointOptions, TrendsClient, TrendsError};
use trendsearch_fetch::{
    HttpMethod, HttpTransport, OutboundRequest, RateLimitPolicy, RawResponse, RetryPolicy,
};

/// Transport that replays a scripted sequence of responses and records the
/// requests it saw.
struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    seen: Mutex<Vec<OutboundRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<RawResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
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
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted transport exhausted"))
    }
}

fn ok(body: &str) -> RawResponse {
    RawResponse {
        status: 200,
        headers: vec![],
        body: body.to_string(),
    }
}

fn status(code: u16, body: &str, headers: Vec<(String, String)>) -> RawResponse {
    RawResponse {
        status: code,
        headers,
        body: body.to_string(),
    }
}

fn client(transport: Arc<ScriptedTransport>) -> TrendsClient {
    let config = ClientConfig::new()
        .with_retry(RetryPolicy {
            max_retries: 3,
            base_delay_ms: 10,
            max_delay_ms: 50,
        })
        .with_rate_limit(RateLimitPolicy {
            max_concurrent: 1,
            min_delay_ms: 0,
        });
    TrendsClient::with_transport(config, transport).unwrap()
}

fn explore_body() -> String {
    format!(
        ")]}}'\n{}",
        json!({
            "widgets": [
                {
                    "id": "TIMESERIES",
                    "token": "TOK-TS",
                    "request": { "time": "2023-08-01 2024-08-01" }
                },
                {
                    "id": "GEO_MAP",
                    "token": "TOK-GEO",
                    "request": { "resolution": "COUNTRY" }
                }
            ]
        })
    )
}

#[tokio::test(start_paused = true)]
async fn test_interest_over_time_widget_flow() {
    let timeline = format!(
        ")]}}'\n{}",
        json!({
            "default": {
                "timelineData": [
                    { "time": "1700000000", "formattedTime": "Nov 2023", "value": [42.0] }
                ]
            }
        })
    );
    let transport = ScriptedTransport::new(vec![ok(&explore_body()), ok(&timeline)]);
    let client = client(transport.clone());

    let result = client
        .interest_over_time(&ExploreRequest::keyword("rust"), &EndpointOptions::default())
        .await
        .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].value, vec![42.0]);
    assert!(result.raw.is_none());

    let seen = transport.requests();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].url.contains("/trends/api/explore?"));
    assert!(seen[0].url.contains("hl=en-US"));
    assert!(seen[1].url.contains("/trends/api/widgetdata/multiline?"));
    assert!(seen[1].url.contains("token=TOK-TS"));
}

#[tokio::test(start_paused = true)]
async fn test_raw_payload_kept_on_request() {
    let transport = ScriptedTransport::new(vec![ok(&explore_body())]);
    let client = client(transport);

    let options = EndpointOptions {
        debug_raw_response: true,
    };
    let result = client
        .explore(&ExploreRequest::keyword("rust"), &options)
        .await
        .unwrap();

    let raw = result.raw.expect("raw payload requested");
    assert_eq!(raw["widgets"][0]["id"], "TIMESERIES");
}

#[tokio::test(start_paused = true)]
async fn test_autocomplete_encodes_keyword_into_path() {
    let body = format!(
        ")]}}'\n{}",
        json!({
            "default": {
                "topics": [
                    { "mid": "/m/0dsbpg6", "title": "Rust", "type": "Programming language" }
                ]
            }
        })
    );
    let transport = ScriptedTransport::new(vec![ok(&body)]);
    let client = client(transport.clone());

    let result = client
        .autocomplete(&AutocompleteRequest::new("rust lang"), &EndpointOptions::default())
        .await
        .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].title, "Rust");

    let seen = transport.requests();
    assert!(seen[0].url.contains("/trends/api/autocomplete/rust%20lang?"));
}

#[tokio::test(start_paused = true)]
async fn test_empty_keywords_rejected_before_any_request() {
    let transport = ScriptedTransport::new(vec![]);
    let client = client(transport.clone());

    let err = client
        .explore(&ExploreRequest::default(), &EndpointOptions::default())
        .await
        .unwrap_err();

    match err {
        TrendsError::SchemaValidation { endpoint, issues } => {
            assert_eq!(endpoint, "explore.request");
            assert!(issues.iter().any(|i| i.starts_with("keywords:")));
        }
        other => panic!("expected SchemaValidation, got {other:?}"),
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_daily_trends_gone_maps_to_unavailable() {
    let transport = ScriptedTransport::new(vec![status(404, "Not Found", vec![])]);
    let client = client(transport);

    let request = DailyTrendsRequest {
        geo: "US".to_string(),
        ..DailyTrendsRequest::default()
    };
    let err = client
        .daily_trends(&request, &EndpointOptions::default())
        .await
        .unwrap_err();

    match err {
        TrendsError::EndpointUnavailable {
            endpoint,
            status,
            replacements,
        } => {
            assert_eq!(endpoint, "dailyTrends");
            assert_eq!(status, Some(404));
            assert_eq!(replacements, vec!["trendingNow".to_string()]);
        }
        other => panic!("expected EndpointUnavailable, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_then_success() {
    let body = format!(")]}}'\n{}", json!({ "default": { "topics": [] } }));
    let transport = ScriptedTransport::new(vec![
        status(
            429,
            "slow down",
            vec![("Retry-After".to_string(), "1".to_string())],
        ),
        ok(&body),
    ]);
    let client = client(transport.clone());

    let result = client
        .autocomplete(&AutocompleteRequest::new("rust"), &EndpointOptions::default())
        .await
        .unwrap();

    assert!(result.data.is_empty());
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_trending_now_over_batchexecute() {
    let row = json!([
        "rust",
        null,
        null,
        [1_700_000_000],
        null,
        null,
        200_000,
        null,
        350,
        ["rust lang"],
        null,
        [[3, "US", "abc"]]
    ]);
    let payload = json!([null, [row]]).to_string();
    let frame = json!([["wrb.fr", "i0OFE", payload]]).to_string();
    let body = format!(")]}}'\n\n{frame}\n");

    let transport = ScriptedTransport::new(vec![ok(&body)]);
    let client = client(transport.clone());

    let result = client
        .trending_now(&TrendingNowRequest::default(), &EndpointOptions::default())
        .await
        .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].keyword, "rust");
    assert_eq!(result.data[0].traffic, 200_000.0);
    assert_eq!(result.data[0].article_keys.len(), 1);

    let seen = transport.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, HttpMethod::Post);
    assert!(seen[0].url.ends_with("/_/TrendsUi/data/batchexecute"));
    let sent = seen[0].body.as_deref().unwrap();
    assert!(sent.starts_with("f.req="));
    assert!(sent.contains("i0OFE"));
    let content_type = seen[0]
        .headers
        .iter()
        .find(|(n, _)| n == "content-type")
        .map(|(_, v)| v.as_str());
    assert_eq!(
        content_type,
        Some("application/x-www-form-urlencoded;charset=UTF-8")
    );
}

#[tokio::test(start_paused = true)]
async fn test_trending_now_missing_frame_is_unexpected() {
    let body = ")]}'\n[[\"wrb.fr\",\"other\",\"[]\"]]\n";
    let transport = ScriptedTransport::new(vec![ok(body)]);
    let client = client(transport);

    let err = client
        .trending_now(&TrendingNowRequest::default(), &EndpointOptions::default())
        .await
        .unwrap_err();

    match err {
        TrendsError::UnexpectedResponse { endpoint, .. } => {
            assert_eq!(endpoint, "trendingNow");
        }
        other => panic!("expected UnexpectedResponse, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_csv_export_uses_csv_widget_path() {
    let csv = "Week,rust\n2024-08-04,61\n2024-08-11,64\n";
    let transport = ScriptedTransport::new(vec![ok(&explore_body()), ok(csv)]);
    let client = client(transport.clone());

    let result = client
        .interest_over_time_csv(&ExploreRequest::keyword("rust"), &EndpointOptions::default())
        .await
        .unwrap();

    assert_eq!(result.data.csv, csv);
    assert_eq!(result.data.content_type, "text/csv");

    let seen = transport.requests();
    assert_eq!(seen.len(), 2);
    assert!(seen[1].url.contains("/trends/api/widgetdata/multiline/csv?"));
    assert!(seen[1].url.contains("token=TOK-TS"));
}
