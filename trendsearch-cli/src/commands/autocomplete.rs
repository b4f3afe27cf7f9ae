//! Autocomplete subcommand.

use clap::Args;
use trendsearch::models::AutocompleteRequest;
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;

/// Arguments for the autocomplete subcommand.
#[derive(Args, Debug, Clone)]
pub struct AutocompleteArgs {
    /// Keyword to complete.
    pub keyword: String,
}

/// Runs the autocomplete subcommand.
pub async fn run(
    args: &AutocompleteArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let request = AutocompleteRequest::new(args.keyword.clone());
    let result = client.autocomplete(&request, options).await?;
    CommandOutput::new("autocomplete", &result.data, result.raw)
}
