//! Related queries and related topics via the relatedsearches widget.
//!
//! Both endpoints share the widget flow and differ only in widget id and row
//! type, so they share one generic implementation.

use serde::de::DeserializeOwned;
use serde_json::Value;
use trendsearch_core::models::{ExploreRequest, RelatedSearchesResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::shared::{resolve_common, select_widget, widget_query};
use crate::endpoints::{
    explore, EndpointOptions, EndpointResult, RelatedQueriesData, RelatedQueriesResult,
    RelatedTopicsData, RelatedTopicsResult,
};

async fn run<T: DeserializeOwned>(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
    endpoint: &str,
    widget_id: &str,
) -> Result<EndpointResult<(Vec<T>, Vec<T>)>, TrendsError> {
    validate_request(endpoint, request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, request, &EndpointOptions::default()).await?;
    let widget = select_widget(endpoint, &explore.data.widgets, widget_id)?;

    let url = ctx.url(
        "/trends/api/widgetdata/relatedsearches",
        &widget_query(
            &common,
            &Value::Object(widget.request.clone()),
            &widget.token,
        ),
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: RelatedSearchesResponse<T> = parse_response(endpoint, raw)?;

    Ok(EndpointResult {
        data: response.into_top_and_rising(),
        raw: kept,
    })
}

pub(crate) async fn queries(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<RelatedQueriesResult, TrendsError> {
    let result = run(ctx, request, options, "relatedQueries", "RELATED_QUERIES").await?;
    let (top, rising) = result.data;
    Ok(EndpointResult {
        data: RelatedQueriesData { top, rising },
        raw: result.raw,
    })
}

pub(crate) async fn topics(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<RelatedTopicsResult, TrendsError> {
    let result = run(ctx, request, options, "relatedTopics", "RELATED_TOPICS").await?;
    let (top, rising) = result.data;
    Ok(EndpointResult {
        data: RelatedTopicsData { top, rising },
        raw: result.raw,
    })
}
