//! Related-queries and related-topics subcommands.

use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::explore::ExploreArgs;
use crate::commands::CommandOutput;

/// Runs the related-queries subcommand.
pub async fn queries(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.related_queries(&args.to_request(), options).await?;
    CommandOutput::new("relatedQueries", &result.data, result.raw)
}

/// Runs the related-topics subcommand.
pub async fn topics(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.related_topics(&args.to_request(), options).await?;
    CommandOutput::new("relatedTopics", &result.data, result.raw)
}
