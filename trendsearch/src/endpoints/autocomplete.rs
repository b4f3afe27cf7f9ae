//! Keyword-to-topic autocompletion.

use trendsearch_core::models::{AutocompleteRequest, AutocompleteResponse};
use trendsearch_core::{parse_response, validate_request, TrendsError};
use trendsearch_fetch::{encode_path_segment, OutboundRequest, QueryValue};

use crate::client::EndpointContext;
use crate::endpoints::shared::resolve_common;
use crate::endpoints::{AutocompleteResult, EndpointOptions, EndpointResult};

pub(crate) async fn run(
    ctx: &EndpointContext,
    request: &AutocompleteRequest,
    options: &EndpointOptions,
) -> Result<AutocompleteResult, TrendsError> {
    validate_request("autocomplete", request)?;
    let common = resolve_common(ctx, request.hl.as_deref(), request.tz);

    let path = format!(
        "/trends/api/autocomplete/{}",
        encode_path_segment(&request.keyword)
    );
    let url = ctx.url(
        &path,
        &[
            ("hl", Some(QueryValue::Str(common.hl))),
            ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
        ],
    )?;

    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;
    let kept = options.debug_raw_response.then(|| raw.clone());
    let response: AutocompleteResponse = parse_response("autocomplete", raw)?;

    Ok(EndpointResult {
        data: response.into_topics(),
        raw: kept,
    })
}
