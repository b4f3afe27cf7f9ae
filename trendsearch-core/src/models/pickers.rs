//! Geo/category picker shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::common::{check_hl, NumberOrString};
use crate::validate::ValidateRequest;

/// Request for the geo and category picker endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickerRequest {
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
}

impl ValidateRequest for PickerRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

/// One picker tree node. Children are kept untyped; the tree nests
/// arbitrarily and callers mostly display it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerNode {
    /// Node identifier; string for geo codes, number for category ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NumberOrString>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Child nodes, untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Value>>,
}

/// Response of the geo and category picker calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerResponse {
    /// Top-level picker nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PickerNode>>,
}
