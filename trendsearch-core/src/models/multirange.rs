//! Interest-over-time multirange (multirange widget) shapes.

use serde::{Deserialize, Serialize};

pub use crate::models::explore::ExploreRequest as InterestOverTimeMultirangeRequest;

/// Value that upstream sends as one number or a number list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrNumbers {
    /// Single value.
    One(f64),
    /// Per-keyword values.
    Many(Vec<f64>),
}

/// Display value that upstream sends as one string or a string list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrStrings {
    /// Single value.
    One(String),
    /// Per-keyword values.
    Many(Vec<String>),
}

/// Per-range column of a multirange point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultirangeColumnData {
    /// Unix timestamp as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Localized time label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    /// Scaled values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NumberOrNumbers>,
    /// Display values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<StringOrStrings>,
    /// Data availability flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_data: Option<bool>,
}

/// One aligned point across the compared time ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestOverTimeMultirangePoint {
    /// Unix timestamp as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Localized time label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    /// One column per compared range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_data: Option<Vec<MultirangeColumnData>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MultirangeDefault {
    pub timeline_data: Vec<InterestOverTimeMultirangePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averages: Option<Vec<f64>>,
}

/// Response of the multirange widget-data call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestOverTimeMultirangeResponse {
    pub(crate) default: MultirangeDefault,
}

impl InterestOverTimeMultirangeResponse {
    /// The timeline points.
    pub fn timeline(&self) -> &[InterestOverTimeMultirangePoint] {
        &self.default.timeline_data
    }

    /// Consumes the response, yielding the timeline points.
    pub fn into_timeline(self) -> Vec<InterestOverTimeMultirangePoint> {
        self.default.timeline_data
    }

    /// Per-range averages, when provided.
    pub fn averages(&self) -> Option<&[f64]> {
        self.default.averages.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_value_accepts_number_or_list() {
        let one: MultirangeColumnData =
            serde_json::from_str(r#"{"value": 42, "formattedValue": "42"}"#).unwrap();
        assert_eq!(one.value, Some(NumberOrNumbers::One(42.0)));
        assert_eq!(one.formatted_value, Some(StringOrStrings::One("42".into())));

        let many: MultirangeColumnData =
            serde_json::from_str(r#"{"value": [10, 20], "formattedValue": ["10", "20"]}"#).unwrap();
        assert_eq!(many.value, Some(NumberOrNumbers::Many(vec![10.0, 20.0])));
    }

    #[test]
    fn test_response_averages_optional() {
        let json = r#"{
            "default": {
                "timelineData": [
                    {"time": "1700000000", "columnData": [{"value": 5, "hasData": true}]}
                ]
            }
        }"#;
        let parsed: InterestOverTimeMultirangeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.timeline().len(), 1);
        assert!(parsed.averages().is_none());
    }
}
