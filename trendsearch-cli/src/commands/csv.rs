//! CSV export subcommands.
//!
//! These print the same envelope as the JSON subcommands, with the CSV text
//! carried in `data.csv`.

use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::explore::ExploreArgs;
use crate::commands::interest::RegionArgs;
use crate::commands::CommandOutput;

/// Runs the interest-over-time CSV subcommand.
pub async fn interest_over_time(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .interest_over_time_csv(&args.to_request(), options)
        .await?;
    CommandOutput::new("experimental.interestOverTimeCsv", &result.data, result.raw)
}

/// Runs the multirange CSV subcommand.
pub async fn multirange(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .interest_over_time_multirange_csv(&args.to_request(), options)
        .await?;
    CommandOutput::new(
        "experimental.interestOverTimeMultirangeCsv",
        &result.data,
        result.raw,
    )
}

/// Runs the interest-by-region CSV subcommand.
pub async fn by_region(
    args: &RegionArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .interest_by_region_csv(&args.to_request(), options)
        .await?;
    CommandOutput::new("experimental.interestByRegionCsv", &result.data, result.raw)
}

/// Runs the related-queries CSV subcommand.
pub async fn related_queries(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .related_queries_csv(&args.to_request(), options)
        .await?;
    CommandOutput::new("experimental.relatedQueriesCsv", &result.data, result.raw)
}

/// Runs the related-topics CSV subcommand.
pub async fn related_topics(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .related_topics_csv(&args.to_request(), options)
        .await?;
    CommandOutput::new("experimental.relatedTopicsCsv", &result.data, result.raw)
}
