//! Yearly top charts (legacy `topcharts` endpoint).

use chrono::{Datelike, Utc};
use trendsearch_core::models::{TopChartsDate, TopChartsRequest, TopChartsResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::shared::{remap_unavailable, resolve_common};
use crate::endpoints::{EndpointOptions, EndpointResult, TopChartsData, TopChartsResult};

const ENDPOINT: &str = "experimental.topCharts";

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &TopChartsRequest,
    options: &EndpointOptions,
) -> Result<TopChartsResult, TrendsError> {
    validate_request(ENDPOINT, request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let date = request
        .date
        .as_ref()
        .map_or_else(
            || i64::from(Utc::now().year()).to_string(),
            TopChartsDate::to_query_value,
        );

    let url = ctx.url(
        "/trends/api/topcharts",
        &[
            ("hl", Some(QueryValue::Str(common.hl))),
            ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
            (
                "geo",
                Some(QueryValue::Str(
                    request.geo.clone().unwrap_or_else(|| "GLOBAL".to_string()),
                )),
            ),
            ("date", Some(QueryValue::Str(date))),
            (
                "isMobile",
                Some(QueryValue::Int(i64::from(request.is_mobile == Some(true)))),
            ),
        ],
    )?;

    let raw = ctx
        .request_json(&OutboundRequest::get(url))
        .await
        .map_err(|e| remap_unavailable(e, ENDPOINT, &[]))?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: TopChartsResponse = parse_response(ENDPOINT, raw)?;

    let items = response
        .top_charts
        .iter()
        .flat_map(|chart| chart.list_items.iter().cloned())
        .collect();

    Ok(EndpointResult {
        data: TopChartsData {
            charts: response.top_charts,
            items,
        },
        raw: kept,
    })
}
