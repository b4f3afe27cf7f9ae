//! Shared wire types used by several endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Google search property filter (`gprop` in upstream requests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoogleProperty {
    /// Web search, serialized as the empty string.
    #[default]
    #[serde(rename = "")]
    Web,
    /// Image search.
    #[serde(rename = "images")]
    Images,
    /// News search.
    #[serde(rename = "news")]
    News,
    /// YouTube search.
    #[serde(rename = "youtube")]
    Youtube,
    /// Google Shopping (historical "froogle" identifier).
    #[serde(rename = "froogle")]
    Froogle,
}

impl GoogleProperty {
    /// Wire value for this property.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "",
            Self::Images => "images",
            Self::News => "news",
            Self::Youtube => "youtube",
            Self::Froogle => "froogle",
        }
    }
}

/// Geographic resolution for interest-by-region requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Resolution {
    /// Country-level aggregation.
    Country,
    /// Region (state/province) level.
    Region,
    /// City level.
    City,
    /// US designated market areas.
    Dma,
}

impl Resolution {
    /// Wire value for this resolution.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "COUNTRY",
            Self::Region => "REGION",
            Self::City => "CITY",
            Self::Dma => "DMA",
        }
    }
}

/// A geo filter: one code for all keywords, or one code per keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geo {
    /// A single geo code applied to every keyword.
    One(String),
    /// Per-keyword geo codes (length 1 or matching the keyword count).
    Many(Vec<String>),
}

impl From<&str> for Geo {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for Geo {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

/// JSON value that upstream sends as either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    /// Numeric form.
    Number(f64),
    /// String form.
    String(String),
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// A knowledge-graph topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Machine identifier (`/m/...`).
    pub mid: String,
    /// Display title.
    pub title: String,
    /// Topic type description.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A widget descriptor from the explore endpoint.
///
/// Other endpoints reference widgets by id (`TIMESERIES`, `GEO_MAP`, ...) and
/// replay the server-issued `request` and `token` to fetch derived data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreWidget {
    /// Opaque request object replayed on widget-data calls.
    pub request: Map<String, Value>,
    /// Server-issued access token for this widget.
    pub token: String,
    /// Widget identifier (`TIMESERIES`, `GEO_MAP`, `RELATED_QUERIES`, ...).
    pub id: String,
    /// Display title, when provided.
    #[serde(default)]
    pub title: Option<String>,
    /// Widget type, when provided.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

pub(crate) fn check_keywords(issues: &mut Vec<String>, keywords: &[String]) {
    if keywords.is_empty() {
        issues.push("keywords: expected at least one keyword".to_string());
    }
    for (index, keyword) in keywords.iter().enumerate() {
        if keyword.is_empty() {
            issues.push(format!("keywords[{index}]: expected a non-empty string"));
        }
    }
}

pub(crate) fn check_hl(issues: &mut Vec<String>, hl: Option<&str>) {
    if let Some(hl) = hl {
        if hl.len() < 2 {
            issues.push("hl: expected at least 2 characters".to_string());
        }
    }
}

pub(crate) fn check_geo(issues: &mut Vec<String>, geo: Option<&Geo>) {
    match geo {
        Some(Geo::One(code)) if code.is_empty() => {
            issues.push("geo: expected a non-empty string".to_string());
        }
        Some(Geo::Many(codes)) => {
            if codes.is_empty() {
                issues.push("geo: expected at least one geo code".to_string());
            }
            for (index, code) in codes.iter().enumerate() {
                if code.is_empty() {
                    issues.push(format!("geo[{index}]: expected a non-empty string"));
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_wire_values() {
        assert_eq!(GoogleProperty::Web.as_str(), "");
        assert_eq!(GoogleProperty::Youtube.as_str(), "youtube");
    }

    #[test]
    fn test_number_or_string_display() {
        assert_eq!(NumberOrString::Number(200.0).to_string(), "200");
        assert_eq!(NumberOrString::Number(1.5).to_string(), "1.5");
        assert_eq!(NumberOrString::String("all".to_string()).to_string(), "all");
    }

    #[test]
    fn test_widget_tolerates_unknown_fields() {
        let json = r#"{
            "request": {"comparisonItem": []},
            "token": "APcmRq",
            "id": "TIMESERIES",
            "helpDialog": {"title": "ignored"}
        }"#;
        let widget: ExploreWidget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.id, "TIMESERIES");
        assert!(widget.title.is_none());
    }
}
