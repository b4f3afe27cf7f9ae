//! Real-time trending stories (legacy `realtimetrends` endpoint).

use trendsearch_core::models::{RealTimeTrendsRequest, RealTimeTrendsResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::shared::{remap_unavailable, resolve_common};
use crate::endpoints::{EndpointOptions, EndpointResult, RealTimeTrendsResult};

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &RealTimeTrendsRequest,
    options: &EndpointOptions,
) -> Result<RealTimeTrendsResult, TrendsError> {
    validate_request("realTimeTrends", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let cat = request
        .category
        .as_ref()
        .map_or_else(|| "all".to_string(), ToString::to_string);

    let url = ctx.url(
        "/trends/api/realtimetrends",
        &[
            ("hl", Some(QueryValue::Str(common.hl))),
            ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
            ("geo", Some(QueryValue::Str(request.geo.clone()))),
            ("cat", Some(QueryValue::Str(cat))),
            ("fi", Some(QueryValue::Int(request.fi.unwrap_or(0)))),
            ("fs", Some(QueryValue::Int(request.fs.unwrap_or(0)))),
            ("ri", Some(QueryValue::Int(request.ri.unwrap_or(300)))),
            ("rs", Some(QueryValue::Int(request.rs.unwrap_or(20)))),
            ("sort", Some(QueryValue::Int(request.sort.unwrap_or(0)))),
        ],
    )?;

    let raw = ctx
        .request_json(&OutboundRequest::get(url))
        .await
        .map_err(|e| {
            remap_unavailable(e, "realTimeTrends", &["trendingNow", "trendingArticles"])
        })?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: RealTimeTrendsResponse = parse_response("realTimeTrends", raw)?;

    Ok(EndpointResult {
        data: response.into_stories(),
        raw: kept,
    })
}
