//! Interest-by-region (comparedgeo widget) shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::{check_geo, check_hl, check_keywords, Geo, GoogleProperty, Resolution};
use crate::models::explore::ExploreRequest;
use crate::validate::ValidateRequest;

/// Request for interest-by-region: the explore fields plus an optional
/// geographic resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestByRegionRequest {
    /// Keywords to compare (at least one).
    pub keywords: Vec<String>,
    /// Optional geo filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// Time window expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Category id (0 = all categories).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    /// Search property filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<GoogleProperty>,
    /// Geographic resolution of the result rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl InterestByRegionRequest {
    /// The explore-shaped subset of this request, used for the widget call.
    pub fn to_explore(&self) -> ExploreRequest {
        ExploreRequest {
            keywords: self.keywords.clone(),
            geo: self.geo.clone(),
            time: self.time.clone(),
            category: self.category,
            property: self.property,
            hl: self.hl.clone(),
            tz: self.tz,
        }
    }
}

impl ValidateRequest for InterestByRegionRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        check_keywords(&mut issues, &self.keywords);
        check_geo(&mut issues, self.geo.as_ref());
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

/// Coordinates attached to city-resolution rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// One region row of the comparedgeo response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoMapData {
    /// Region code, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_code: Option<String>,
    /// Region display name.
    pub geo_name: String,
    /// One value per compared keyword, scaled 0-100.
    pub value: Vec<f64>,
    /// Display values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<Vec<String>>,
    /// Per-keyword data availability flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_data: Option<Vec<bool>>,
    /// Index of the keyword with the maximum value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value_index: Option<f64>,
    /// Coordinates for city-level rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InterestByRegionDefault {
    pub geo_map_data: Vec<GeoMapData>,
}

/// Response of the comparedgeo widget-data call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestByRegionResponse {
    pub(crate) default: InterestByRegionDefault,
}

impl InterestByRegionResponse {
    /// The region rows.
    pub fn regions(&self) -> &[GeoMapData] {
        &self.default.geo_map_data
    }

    /// Consumes the response, yielding the region rows.
    pub fn into_regions(self) -> Vec<GeoMapData> {
        self.default.geo_map_data
    }
}
