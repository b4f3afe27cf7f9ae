//! Trending-now and trending-articles via the batchexecute feed.
//!
//! These are the replacements Google shipped for the decommissioned
//! dailytrends/realtimetrends endpoints. The payload layout is
//! reverse-engineered: rows are located by structural sniffing (the longest
//! deep array whose elements look like rows) rather than by fixed index
//! paths, and normalization failures surface as schema-validation errors
//! instead of panics.

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::debug;
use trendsearch_core::models::{
    ArticleKey, TrendingArticleItem, TrendingArticlesRequest, TrendingNowItem, TrendingNowRequest,
};
use trendsearch_core::{validate_request, TrendsError};
use trendsearch_fetch::{encode_form, extract_batchexecute_payload, OutboundRequest};

use crate::client::EndpointContext;
use crate::endpoints::shared::longest_matching_array;
use crate::endpoints::{
    EndpointOptions, EndpointResult, TrendingArticlesResult, TrendingNowResult,
};

const BATCHEXECUTE_PATH: &str = "/_/TrendsUi/data/batchexecute";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

const TRENDING_NOW_RPC: &str = "i0OFE";
const TRENDING_ARTICLES_RPC: &str = "w4opAf";

async fn call_batchexecute(
    ctx: &EndpointContext,
    endpoint: &str,
    rpc_id: &str,
    rpc_payload: &str,
) -> Result<Value, TrendsError> {
    let f_req = json!([[[rpc_id, rpc_payload, null, "generic"]]]).to_string();
    let body = encode_form(&[("f.req", &f_req)]);
    let url = ctx.url(BATCHEXECUTE_PATH, &[])?;

    debug!(endpoint, rpc_id, "Calling batchexecute");
    let request =
        OutboundRequest::post(url, body).with_header("content-type", FORM_CONTENT_TYPE);
    let response = ctx.request_text(&request).await?;

    extract_batchexecute_payload(endpoint, &response.body, rpc_id)
}

// ============================================================================
// Trending now
// ============================================================================

/// Loose shape check for one trending row.
fn is_trending_row(value: &Value) -> bool {
    let Some(row) = value.as_array() else {
        return false;
    };
    row.len() > 8
        && row[0].is_string()
        && (row[6].is_number() || row[6].is_string())
}

fn number_from(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn article_key_from(value: &Value) -> Option<ArticleKey> {
    let parts = value.as_array()?;
    if parts.len() != 3 {
        return None;
    }
    Some(ArticleKey(
        parts[0].as_i64()?,
        parts[1].as_str()?.to_string(),
        parts[2].as_str()?.to_string(),
    ))
}

fn rfc3339_from_unix(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn normalize_trending_row(row: &[Value]) -> Result<TrendingNowItem, TrendsError> {
    const ENDPOINT: &str = "trendingNow.response.item";

    let keyword = row[0]
        .as_str()
        .ok_or_else(|| TrendsError::schema(ENDPOINT, "keyword: expected a string"))?
        .to_string();
    let traffic = number_from(&row[6])
        .ok_or_else(|| TrendsError::schema(ENDPOINT, "traffic: expected a number"))?;
    let traffic_growth_rate = match row.get(8) {
        None | Some(Value::Null) => 0.0,
        Some(value) => number_from(value)
            .ok_or_else(|| TrendsError::schema(ENDPOINT, "trafficGrowthRate: expected a number"))?,
    };

    let active_time = row
        .get(3)
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(Value::as_i64)
        .map_or_else(
            || Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            rfc3339_from_unix,
        );

    let related_keywords = row
        .get(9)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let article_keys = row
        .get(11)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(article_key_from).collect())
        .unwrap_or_default();

    Ok(TrendingNowItem {
        keyword,
        traffic,
        traffic_growth_rate,
        active_time,
        related_keywords,
        article_keys,
    })
}

pub(crate) async fn now(
    ctx: &EndpointContext,
    request: &TrendingNowRequest,
    options: &EndpointOptions,
) -> Result<TrendingNowResult, TrendsError> {
    validate_request("trendingNow", request)?;

    let rpc_payload = json!([
        null,
        null,
        request.geo,
        0,
        request.language,
        request.hours,
        1
    ])
    .to_string();
    let payload = call_batchexecute(ctx, "trendingNow", TRENDING_NOW_RPC, &rpc_payload).await?;

    let items = match longest_matching_array(&payload, is_trending_row) {
        Some(rows) => rows
            .iter()
            .filter_map(Value::as_array)
            .map(|row| normalize_trending_row(row))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let kept = options.debug_raw_response.then_some(payload);
    Ok(EndpointResult {
        data: items,
        raw: kept,
    })
}

// ============================================================================
// Trending articles
// ============================================================================

/// Loose shape check for one article row.
fn is_article_row(value: &Value) -> bool {
    let Some(row) = value.as_array() else {
        return false;
    };
    row.len() >= 3 && row[0].is_string() && row[1].is_string()
}

fn normalize_article_row(row: &[Value]) -> Result<TrendingArticleItem, TrendsError> {
    const ENDPOINT: &str = "trendingArticles.response.item";

    let title = row[0]
        .as_str()
        .ok_or_else(|| TrendsError::schema(ENDPOINT, "title: expected a string"))?
        .to_string();
    let url = row[1]
        .as_str()
        .ok_or_else(|| TrendsError::schema(ENDPOINT, "url: expected a string"))?
        .to_string();
    let source = row[2]
        .as_str()
        .ok_or_else(|| TrendsError::schema(ENDPOINT, "source: expected a string"))?
        .to_string();

    let press_date = match row.get(3) {
        None | Some(Value::Null) => None,
        Some(Value::Array(parts)) => Some(
            parts
                .iter()
                .map(|part| {
                    part.as_i64().ok_or_else(|| {
                        TrendsError::schema(ENDPOINT, "pressDate: expected a list of numbers")
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => {
            return Err(TrendsError::schema(
                ENDPOINT,
                "pressDate: expected a list of numbers",
            ));
        }
    };

    let image = match row.get(4) {
        None | Some(Value::Null) => None,
        Some(Value::String(url)) => Some(url.clone()),
        Some(_) => {
            return Err(TrendsError::schema(ENDPOINT, "image: expected a string"));
        }
    };

    Ok(TrendingArticleItem {
        title,
        url,
        source,
        press_date,
        image,
    })
}

pub(crate) async fn articles(
    ctx: &EndpointContext,
    request: &TrendingArticlesRequest,
    options: &EndpointOptions,
) -> Result<TrendingArticlesResult, TrendsError> {
    validate_request("trendingArticles", request)?;

    let rpc_payload = json!([request.article_keys, request.article_count]).to_string();
    let payload =
        call_batchexecute(ctx, "trendingArticles", TRENDING_ARTICLES_RPC, &rpc_payload).await?;

    let items = match longest_matching_array(&payload, is_article_row) {
        Some(rows) => rows
            .iter()
            .filter_map(Value::as_array)
            .map(|row| normalize_article_row(row))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let kept = options.debug_raw_response.then_some(payload);
    Ok(EndpointResult {
        data: items,
        raw: kept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_row() -> Value {
        json!([
            "rust",
            null,
            null,
            [1_700_000_000],
            null,
            null,
            200_000,
            null,
            350,
            ["rust lang", "rustup"],
            null,
            [[3, "US", "abc"], ["bad"], [4, "US", "def"]]
        ])
    }

    #[test]
    fn test_trending_row_predicate() {
        assert!(is_trending_row(&trending_row()));
        assert!(!is_trending_row(&json!(["too", "short"])));
        assert!(!is_trending_row(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9])));
    }

    #[test]
    fn test_normalize_trending_row() {
        let row = trending_row();
        let item = normalize_trending_row(row.as_array().unwrap()).unwrap();
        assert_eq!(item.keyword, "rust");
        assert_eq!(item.traffic, 200_000.0);
        assert_eq!(item.traffic_growth_rate, 350.0);
        assert_eq!(item.active_time, "2023-11-14T22:13:20.000Z");
        assert_eq!(item.related_keywords, vec!["rust lang", "rustup"]);
        // Malformed keys are dropped, not fatal.
        assert_eq!(item.article_keys.len(), 2);
        assert_eq!(item.article_keys[0], ArticleKey(3, "US".into(), "abc".into()));
    }

    #[test]
    fn test_normalize_trending_row_string_traffic() {
        let mut row = trending_row();
        row[6] = json!("1250");
        let item = normalize_trending_row(row.as_array().unwrap()).unwrap();
        assert_eq!(item.traffic, 1250.0);
    }

    #[test]
    fn test_normalize_trending_row_bad_traffic_is_schema_error() {
        let mut row = trending_row();
        row[6] = json!("not a number");
        let err = normalize_trending_row(row.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, TrendsError::SchemaValidation { .. }));
    }

    #[test]
    fn test_normalize_article_row() {
        let row = json!([
            "Rust 1.80 released",
            "https://news.example/rust",
            "Example News",
            [2024, 7, 25],
            "https://img.example/rust.png"
        ]);
        let item = normalize_article_row(row.as_array().unwrap()).unwrap();
        assert_eq!(item.title, "Rust 1.80 released");
        assert_eq!(item.source, "Example News");
        assert_eq!(item.press_date, Some(vec![2024, 7, 25]));
        assert_eq!(item.image.as_deref(), Some("https://img.example/rust.png"));
    }

    #[test]
    fn test_normalize_article_row_optional_tail() {
        let row = json!(["Title", "https://news.example/x", "Source"]);
        let item = normalize_article_row(row.as_array().unwrap()).unwrap();
        assert!(item.press_date.is_none());
        assert!(item.image.is_none());
    }

    #[test]
    fn test_normalize_article_row_bad_press_date() {
        let row = json!(["Title", "https://news.example/x", "Source", "July 2024"]);
        let err = normalize_article_row(row.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, TrendsError::SchemaValidation { .. }));
    }
}
