//! Interest-over-time via the multiline widget.

use serde_json::Value;
use trendsearch_core::models::{ExploreRequest, InterestOverTimeResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::shared::{resolve_common, select_widget, widget_query};
use crate::endpoints::{explore, EndpointOptions, EndpointResult, InterestOverTimeResult};

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<InterestOverTimeResult, TrendsError> {
    validate_request("interestOverTime", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, request, &EndpointOptions::default()).await?;
    let widget = select_widget("interestOverTime", &explore.data.widgets, "TIMESERIES")?;

    let url = ctx.url(
        "/trends/api/widgetdata/multiline",
        &widget_query(
            &common,
            &Value::Object(widget.request.clone()),
            &widget.token,
        ),
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: InterestOverTimeResponse = parse_response("interestOverTime", raw)?;

    Ok(EndpointResult {
        data: response.into_timeline(),
        raw: kept,
    })
}
