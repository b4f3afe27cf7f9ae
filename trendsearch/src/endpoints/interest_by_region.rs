//! Interest-by-region via the comparedgeo widget.

use serde_json::Value;
use trendsearch_core::models::{InterestByRegionRequest, InterestByRegionResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::shared::{resolve_common, select_widget, widget_query};
use crate::endpoints::{explore, EndpointOptions, EndpointResult, InterestByRegionResult};

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &InterestByRegionRequest,
    options: &EndpointOptions,
) -> Result<InterestByRegionResult, TrendsError> {
    validate_request("interestByRegion", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let explore = explore::run(ctx, &request.to_explore(), &EndpointOptions::default()).await?;
    let widget = select_widget("interestByRegion", &explore.data.widgets, "GEO_MAP")?;

    // The requested resolution overrides whatever the widget carries.
    let mut widget_request = widget.request.clone();
    if let Some(resolution) = request.resolution {
        widget_request.insert(
            "resolution".to_string(),
            Value::String(resolution.as_str().to_string()),
        );
    }

    let url = ctx.url(
        "/trends/api/widgetdata/comparedgeo",
        &widget_query(&common, &Value::Object(widget_request), &widget.token),
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: InterestByRegionResponse = parse_response("interestByRegion", raw)?;

    Ok(EndpointResult {
        data: response.into_regions(),
        raw: kept,
    })
}
