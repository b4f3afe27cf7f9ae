//! The explore endpoint: source of the widget descriptors every
//! widget-data endpoint replays.

use tracing::debug;
use trendsearch_core::models::{ExploreRequest, ExploreRequestBody, ExploreResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::shared::{build_comparison_items, resolve_common};
use crate::endpoints::{EndpointOptions, EndpointResult, ExploreData, ExploreResult};

/// Time window used when a request does not specify one.
pub(crate) const DEFAULT_TIME: &str = "today 12-m";

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &ExploreRequest,
    options: &EndpointOptions,
) -> Result<ExploreResult, TrendsError> {
    validate_request("explore", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let time = request.time.as_deref().unwrap_or(DEFAULT_TIME);
    let comparison_items =
        build_comparison_items("explore.request", &request.keywords, request.geo.as_ref(), time)?;

    let body = ExploreRequestBody {
        comparison_item: comparison_items.clone(),
        category: request.category.unwrap_or(0),
        property: request.property.unwrap_or_default().as_str().to_string(),
    };
    let req = serde_json::to_string(&body).map_err(|e| {
        TrendsError::unexpected("explore.request", format!("failed to serialize request: {e}"))
    })?;

    let url = ctx.url(
        "/trends/api/explore",
        &[
            ("hl", Some(QueryValue::Str(common.hl))),
            ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
            ("req", Some(QueryValue::Str(req))),
        ],
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: ExploreResponse = parse_response("explore", raw)?;
    debug!(
        keywords = ?request.keywords,
        widgets = response.widgets.len(),
        "Resolved explore widgets"
    );

    Ok(EndpointResult {
        data: ExploreData {
            widgets: response.widgets,
            comparison_items,
        },
        raw: kept,
    })
}
