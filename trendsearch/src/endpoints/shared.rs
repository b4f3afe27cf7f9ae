//! Helpers shared by the endpoint modules.

use serde_json::Value;
use tracing::warn;
use trendsearch_core::models::{ComparisonItem, ExploreWidget, Geo};
use trendsearch_core::TrendsError;
use trendsearch_fetch::QueryValue;

use crate::client::EndpointContext;

/// Resolved hl/tz pair for one call.
pub(crate) struct Common {
    pub hl: String,
    pub tz: i32,
}

pub(crate) fn resolve_common(
    ctx: &EndpointContext,
    hl: Option<&str>,
    tz: Option<i32>,
) -> Common {
    Common {
        hl: hl.unwrap_or(ctx.default_hl()).to_string(),
        tz: tz.unwrap_or(ctx.default_tz()),
    }
}

/// `YYYYMMDD` form of an ISO date-like string (`ed` query parameter).
pub(crate) fn format_date_without_dashes(date: &str) -> String {
    date.chars().take(10).filter(|c| *c != '-').collect()
}

/// Builds the comparison items for an explore-family request.
///
/// A scalar geo (or a 1-element list) applies to every keyword; a longer
/// list must match the keyword count exactly.
pub(crate) fn build_comparison_items(
    endpoint: &str,
    keywords: &[String],
    geo: Option<&Geo>,
    time: &str,
) -> Result<Vec<ComparisonItem>, TrendsError> {
    let item = |keyword: &String, geo: Option<String>| ComparisonItem {
        keyword: keyword.clone(),
        geo,
        time: time.to_string(),
    };

    match geo {
        None => Ok(keywords.iter().map(|k| item(k, None)).collect()),
        Some(Geo::One(code)) => Ok(keywords
            .iter()
            .map(|k| item(k, Some(code.clone())))
            .collect()),
        Some(Geo::Many(codes)) if codes.len() == 1 => Ok(keywords
            .iter()
            .map(|k| item(k, Some(codes[0].clone())))
            .collect()),
        Some(Geo::Many(codes)) if codes.len() == keywords.len() => Ok(keywords
            .iter()
            .zip(codes)
            .map(|(k, code)| item(k, Some(code.clone())))
            .collect()),
        Some(Geo::Many(_)) => Err(TrendsError::unexpected(
            endpoint,
            "When geo is a list, it must have length 1 or match the number of keywords.",
        )),
    }
}

/// Finds the widget with the given id, or fails with `UnexpectedResponse`.
pub(crate) fn select_widget<'a>(
    endpoint: &str,
    widgets: &'a [ExploreWidget],
    id: &str,
) -> Result<&'a ExploreWidget, TrendsError> {
    widgets.iter().find(|widget| widget.id == id).ok_or_else(|| {
        TrendsError::unexpected(
            endpoint,
            format!("Widget '{id}' was not found in explore response."),
        )
    })
}

/// Collects every array reachable in `value`, outermost first.
pub(crate) fn find_deep_arrays<'a>(value: &'a Value, found: &mut Vec<&'a Vec<Value>>) {
    if let Value::Array(items) = value {
        found.push(items);
        for child in items {
            find_deep_arrays(child, found);
        }
    }
}

/// The longest deep array whose every element satisfies `is_row`.
///
/// This is the structural sniffing the batchexecute feeds need: the payload
/// layout is undocumented, so rows are located by shape rather than by a
/// fixed index path. Empty arrays match trivially and are skipped.
pub(crate) fn longest_matching_array<'a>(
    payload: &'a Value,
    is_row: impl Fn(&Value) -> bool,
) -> Option<&'a Vec<Value>> {
    let mut arrays = Vec::new();
    find_deep_arrays(payload, &mut arrays);
    arrays
        .into_iter()
        .filter(|array| !array.is_empty() && array.iter().all(&is_row))
        .max_by_key(|array| array.len())
}

/// Query slice for a widget-data call: `hl`, `tz`, `req`, `token`.
pub(crate) fn widget_query(
    common: &Common,
    widget_request: &Value,
    token: &str,
) -> Vec<(&'static str, Option<QueryValue>)> {
    vec![
        ("hl", Some(QueryValue::Str(common.hl.clone()))),
        ("tz", Some(QueryValue::Int(i64::from(common.tz)))),
        ("req", Some(QueryValue::Str(widget_request.to_string()))),
        ("token", Some(QueryValue::Str(token.to_string()))),
    ]
}

/// Remaps a decommission signal (HTTP 404/410) on a legacy endpoint into
/// `EndpointUnavailable` with replacement hints. Other errors pass through.
pub(crate) fn remap_unavailable(
    error: TrendsError,
    endpoint: &str,
    replacements: &[&str],
) -> TrendsError {
    match error {
        TrendsError::Transport {
            status: Some(status),
            ..
        } if status == 404 || status == 410 => {
            warn!(endpoint, status, "Legacy endpoint appears decommissioned");
            TrendsError::EndpointUnavailable {
                endpoint: endpoint.to_string(),
                status: Some(status),
                replacements: replacements.iter().map(|r| (*r).to_string()).collect(),
            }
        }
        other => other,
    }
}
