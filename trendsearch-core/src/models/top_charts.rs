//! Top-charts (legacy topcharts endpoint) shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::check_hl;
use crate::models::daily_trends::is_iso_date_like;
use crate::validate::ValidateRequest;

/// Date selector for top charts: a year number or an ISO date-like string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopChartsDate {
    /// A year, e.g. 2020.
    Year(i64),
    /// ISO date-like string.
    Text(String),
}

impl TopChartsDate {
    /// Wire form of the `date` query parameter.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Year(year) => year.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Request for the legacy top-charts endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChartsRequest {
    /// Chart date; defaults to the current year upstream-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<TopChartsDate>,
    /// Geo code, defaults to `GLOBAL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    /// Mobile chart variant flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mobile: Option<bool>,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl ValidateRequest for TopChartsRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        match &self.date {
            Some(TopChartsDate::Year(year)) if *year <= 0 => {
                issues.push("date: expected a positive year".to_string());
            }
            Some(TopChartsDate::Text(text)) if !is_iso_date_like(text) => {
                issues.push("date: expected an ISO date-like string".to_string());
            }
            _ => {}
        }
        if let Some(geo) = &self.geo {
            if geo.is_empty() {
                issues.push("geo: expected a non-empty string".to_string());
            }
        }
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

/// One chart entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChartListItem {
    /// Entry title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Relative value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Display value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

/// One chart bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChart {
    /// Chart date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Localized date label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_date: Option<String>,
    /// Chart entries.
    pub list_items: Vec<TopChartListItem>,
}

/// Response of the top-charts call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChartsResponse {
    /// Chart buckets.
    pub top_charts: Vec<TopChart>,
}
