//! Autocomplete endpoint shapes.

use serde::{Deserialize, Serialize};

use crate::models::common::{check_hl, Topic};
use crate::validate::ValidateRequest;

/// Request for topic autocompletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteRequest {
    /// Keyword to complete.
    pub keyword: String,
    /// Host language override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Timezone offset override, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<i32>,
}

impl AutocompleteRequest {
    /// Convenience constructor.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }
}

impl ValidateRequest for AutocompleteRequest {
    fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.keyword.is_empty() {
            issues.push("keyword: expected a non-empty string".to_string());
        }
        check_hl(&mut issues, self.hl.as_deref());
        issues
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AutocompleteDefault {
    pub topics: Vec<Topic>,
}

/// Response of the autocomplete call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub(crate) default: AutocompleteDefault,
}

impl AutocompleteResponse {
    /// Suggested topics.
    pub fn topics(&self) -> &[Topic] {
        &self.default.topics
    }

    /// Consumes the response, yielding the suggested topics.
    pub fn into_topics(self) -> Vec<Topic> {
        self.default.topics
    }
}
