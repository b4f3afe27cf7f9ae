//! CSV export variants of the widget-data endpoints.
//!
//! Same widget flow as the JSON endpoints, but the widget-data path gets a
//! `/csv` suffix and the body is returned verbatim.

use serde_json::Value;
use trendsearch_core::models::{ExploreRequest, InterestByRegionRequest};
use trendsearch_core::{validate_request, TrendsError};
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::shared::{resolve_common, select_widget, widget_query, Common};
use crate::endpoints::{explore, CsvData, CsvResult, EndpointOptions, EndpointResult};

async fn fetch_widget_csv(
    ctx: &EndpointContext,
    path: &str,
    common: &Common,
    widget_request: &Value,
    token: &str,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    let url = ctx.url(path, &widget_query(common, widget_request, token))?;
    let response = ctx.request_text(&OutboundRequest::get(url)).await?;

    let kept = options
        .debug_raw_response
        .then(|| Value::String(response.body.clone()));
    Ok(EndpointResult {
        data: CsvData {
            csv: response.body,
            content_type: "text/csv",
        },
        raw: kept,
    })
}

async fn run_explore_csv(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
    endpoint: &str,
    widget_id: &str,
    path: &str,
) -> Result<CsvResult, TrendsError> {
    validate_request(endpoint, request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, request, &EndpointOptions::default()).await?;
    let widget = select_widget(endpoint, &explore.data.widgets, widget_id)?;

    fetch_widget_csv(
        ctx,
        path,
        &common,
        &Value::Object(widget.request.clone()),
        &widget.token,
        options,
    )
    .await
}

pub(crate) async fn interest_over_time(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    run_explore_csv(
        ctx,
        request,
        options,
        "experimental.interestOverTimeCsv",
        "TIMESERIES",
        "/trends/api/widgetdata/multiline/csv",
    )
    .await
}

pub(crate) async fn interest_over_time_multirange(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    run_explore_csv(
        ctx,
        request,
        options,
        "experimental.interestOverTimeMultirangeCsv",
        "TIMESERIES",
        "/trends/api/widgetdata/multirange/csv",
    )
    .await
}

pub(crate) async fn interest_by_region(
    ctx: &EndpointContext,
    request: &InterestByRegionRequest,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    const ENDPOINT: &str = "experimental.interestByRegionCsv";

    validate_request(ENDPOINT, request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, &request.to_explore(), &EndpointOptions::default()).await?;
    let widget = select_widget(ENDPOINT, &explore.data.widgets, "GEO_MAP")?;

    let mut widget_request = widget.request.clone();
    if let Some(resolution) = request.resolution {
        widget_request.insert(
            "resolution".to_string(),
            Value::String(resolution.as_str().to_string()),
        );
    }

    fetch_widget_csv(
        ctx,
        "/trends/api/widgetdata/comparedgeo/csv",
        &common,
        &Value::Object(widget_request),
        &widget.token,
        options,
    )
    .await
}

pub(crate) async fn related_queries(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    run_explore_csv(
        ctx,
        request,
        options,
        "experimental.relatedQueriesCsv",
        "RELATED_QUERIES",
        "/trends/api/widgetdata/relatedsearches/csv",
    )
    .await
}

pub(crate) async fn related_topics(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<CsvResult, TrendsError> {
    run_explore_csv(
        ctx,
        request,
        options,
        "experimental.relatedTopicsCsv",
        "RELATED_TOPICS",
        "/trends/api/widgetdata/relatedsearches/csv",
    )
    .await
}
