//! Geo and category picker subcommands.

use trendsearch::models::PickerRequest;
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;

/// Runs the geo-picker subcommand.
pub async fn geo(
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.geo_picker(&PickerRequest::default(), options).await?;
    CommandOutput::new("experimental.geoPicker", &result.data, result.raw)
}

/// Runs the category-picker subcommand.
pub async fn category(
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .category_picker(&PickerRequest::default(), options)
        .await?;
    CommandOutput::new("experimental.categoryPicker", &result.data, result.raw)
}
