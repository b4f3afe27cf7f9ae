//! One module per group of related subcommands.

use serde::Serialize;
use serde_json::Value;
use trendsearch_core::TrendsError;

pub mod autocomplete;
pub mod csv;
pub mod explore;
pub mod interest;
pub mod legacy;
pub mod pickers;
pub mod related;
pub mod trending;

/// What a subcommand hands back for the success envelope.
pub struct CommandOutput {
    /// Endpoint label used in the envelope.
    pub endpoint: &'static str,
    /// Normalized data, already JSON.
    pub data: Value,
    /// Raw upstream payload, when `--raw` was given.
    pub raw: Option<Value>,
}

impl CommandOutput {
    /// Serializes `data` into an output for `endpoint`.
    pub fn new<T: Serialize>(
        endpoint: &'static str,
        data: &T,
        raw: Option<Value>,
    ) -> Result<Self, TrendsError> {
        let data = serde_json::to_value(data)
            .map_err(|e| TrendsError::unexpected(endpoint, format!("serialization failed: {e}")))?;
        Ok(Self {
            endpoint,
            data,
            raw,
        })
    }
}
