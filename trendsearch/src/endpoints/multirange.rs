//! Interest-over-time across multiple compared time ranges.

use serde_json::Value;
use trendsearch_core::models::{ExploreRequest, InterestOverTimeMultirangeResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::shared::{resolve_common, select_widget, widget_query};
use crate::endpoints::{
    explore, EndpointOptions, EndpointResult, InterestOverTimeMultirangeResult,
};

const ENDPOINT: &str = "experimental.interestOverTimeMultirange";

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<InterestOverTimeMultirangeResult, TrendsError> {
    validate_request(ENDPOINT, request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, request, &EndpointOptions::default()).await?;
    let widget = select_widget(ENDPOINT, &explore.data.widgets, "TIMESERIES")?;

    let url = ctx.url(
        "/trends/api/widgetdata/multirange",
        &widget_query(
            &common,
            &Value::Object(widget.request.clone()),
            &widget.token,
        ),
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: InterestOverTimeMultirangeResponse = parse_response(ENDPOINT, raw)?;

    Ok(EndpointResult {
        data: response.into_timeline(),
        raw: kept,
    })
}
