//! Interest-over-time (multiline widget) shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::models::explore::ExploreRequest as InterestOverTimeRequest;

/// One point of the interest timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestOverTimePoint {
    /// Unix timestamp as a decimal string.
    pub time: String,
    /// Localized time label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    /// Short axis label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_axis_time: Option<String>,
    /// One value per compared keyword, scaled 0-100.
    pub value: Vec<f64>,
    /// Display values; upstream mixes strings and numbers here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<Vec<Value>>,
    /// Per-keyword data availability flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_data: Option<Vec<bool>>,
    /// Partial-bucket marker; upstream sends bool or string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_partial: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InterestOverTimeDefault {
    pub timeline_data: Vec<InterestOverTimePoint>,
}

/// Response of the multiline widget-data call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestOverTimeResponse {
    pub(crate) default: InterestOverTimeDefault,
}

impl InterestOverTimeResponse {
    /// The timeline points.
    pub fn timeline(&self) -> &[InterestOverTimePoint] {
        &self.default.timeline_data
    }

    /// Consumes the response, yielding the timeline points.
    pub fn into_timeline(self) -> Vec<InterestOverTimePoint> {
        self.default.timeline_data
    }
}
