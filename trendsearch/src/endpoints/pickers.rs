//! Geo and category picker trees.

use trendsearch_core::models::pickers::{PickerRequest, PickerResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::{EndpointOptions, EndpointResult, PickerResult};

async fn run(
    ctx: &EndpointContext,
    request: &PickerRequest,
    options: &EndpointOptions,
    endpoint: &str,
    path: &str,
) -> Result<PickerResult, TrendsError> {
    validate_request(endpoint, request)?;
    let hl = request
        .hl
        .clone()
        .unwrap_or_else(|| ctx.default_hl().to_string());

    let url = ctx.url(path, &[("hl", Some(QueryValue::Str(hl)))])?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: PickerResponse = parse_response(endpoint, raw)?;

    Ok(EndpointResult {
        data: response,
        raw: kept,
    })
}

pub(crate) async fn geo(
    ctx: &EndpointContext,
    request: &PickerRequest,
    options: &EndpointOptions,
) -> Result<PickerResult, TrendsError> {
    run(
        ctx,
        request,
        options,
        "experimental.geoPicker",
        "/trends/api/explore/pickers/geo",
    )
    .await
}

pub(crate) async fn category(
    ctx: &EndpointContext,
    request: &PickerRequest,
    options: &EndpointOptions,
) -> Result<PickerResult, TrendsError> {
    run(
        ctx,
        request,
        options,
        "experimental.categoryPicker",
        "/trends/api/explore/pickers/category",
    )
    .await
}
