//! Daily trending searches (legacy `dailytrends` endpoint).

use chrono::Utc;
use trendsearch_core::models::{DailyTrendsRequest, DailyTrendsResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::shared::{format_date_without_dashes, remap_unavailable, resolve_common};
use crate::endpoints::{DailyTrendsData, DailyTrendsResult, EndpointOptions, EndpointResult};

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &DailyTrendsRequest,
    options: &EndpointOptions,
) -> Result<DailyTrendsResult, TrendsError> {
    validate_request("dailyTrends", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let ed = match &request.date {
        Some(date) => format_date_without_dashes(date),
        None => Utc::now().format("%Y%m%d").to_string(),
    };
    let cat = request
        .category
        .as_ref()
        .map_or_else(|| "all".to_string(), ToString::to_string);

    let url = ctx.url(
        "/trends/api/dailytrends",
        &[
            ("hl", Some(QueryValue::Str(common.hl))),
            ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
            ("geo", Some(QueryValue::Str(request.geo.clone()))),
            ("cat", Some(QueryValue::Str(cat))),
            ("ed", Some(QueryValue::Str(ed))),
            ("ns", Some(QueryValue::Int(request.ns.unwrap_or(15)))),
        ],
    )?;

    let raw = ctx
        .request_json(&OutboundRequest::get(url))
        .await
        .map_err(|e| remap_unavailable(e, "dailyTrends", &["trendingNow"]))?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: DailyTrendsResponse = parse_response("dailyTrends", raw)?;

    let days = response.into_days();
    let trends = days
        .iter()
        .flat_map(|day| day.trending_searches.iter().cloned())
        .collect();

    Ok(EndpointResult {
        data: DailyTrendsData { days, trends },
        raw: kept,
    })
}
