//! The ancient hot-trends visualization feed.
//!
//! The payload shape predates the widget era and varies by deployment, so it
//! is returned as loose JSON after a minimal structural check.

use serde_json::Value;
use trendsearch_core::TrendsError;
use trendsearch_fetch::OutboundRequest;

use crate::client::EndpointContext;
use crate::endpoints::{EndpointOptions, EndpointResult, HotTrendsLegacyResult};

const ENDPOINT: &str = "experimental.hotTrendsLegacy";

pub(crate) async fn run(
    ctx: &EndpointContext,
    options: &EndpointOptions,
) -> Result<HotTrendsLegacyResult, TrendsError> {
    let url = ctx.url("/trends/hottrends/visualize/internal/data", &[])?;
    let raw = ctx.request_json(&OutboundRequest::get(url)).await?;

    if !raw.is_array() && !raw.is_object() {
        return Err(TrendsError::SchemaValidation {
            endpoint: format!("{ENDPOINT}.response"),
            issues: vec!["(root): expected an array or object".to_string()],
        });
    }

    let kept = options.debug_raw_response.then(|| raw.clone());
    Ok(EndpointResult {
        data: raw,
        raw: kept,
    })
}
