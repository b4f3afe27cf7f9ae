//! Interest-over-time, interest-by-region and multirange subcommands.

use clap::Args;
use trendsearch::models::{InterestByRegionRequest, Resolution};
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::explore::{geo_from_args, ExploreArgs};
use crate::commands::CommandOutput;

/// Arguments for the interest-by-region subcommand.
#[derive(Args, Debug, Clone)]
pub struct RegionArgs {
    #[command(flatten)]
    pub explore: ExploreArgs,

    /// Result granularity (country, region, city, dma).
    #[arg(long, short = 'r', value_parser = parse_resolution)]
    pub resolution: Option<Resolution>,
}

impl RegionArgs {
    /// The interest-by-region request these arguments describe.
    pub fn to_request(&self) -> InterestByRegionRequest {
        InterestByRegionRequest {
            keywords: self.explore.keywords.clone(),
            geo: geo_from_args(&self.explore.geo),
            time: self.explore.time.clone(),
            category: self.explore.category,
            property: self.explore.property,
            resolution: self.resolution,
            hl: None,
            tz: None,
        }
    }
}

pub(crate) fn parse_resolution(value: &str) -> Result<Resolution, String> {
    match value.to_ascii_lowercase().as_str() {
        "country" => Ok(Resolution::Country),
        "region" => Ok(Resolution::Region),
        "city" => Ok(Resolution::City),
        "dma" => Ok(Resolution::Dma),
        other => Err(format!(
            "unknown resolution {other:?} (expected country, region, city or dma)"
        )),
    }
}

/// Runs the interest-over-time subcommand.
pub async fn over_time(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.interest_over_time(&args.to_request(), options).await?;
    CommandOutput::new("interestOverTime", &result.data, result.raw)
}

/// Runs the interest-by-region subcommand.
pub async fn by_region(
    args: &RegionArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.interest_by_region(&args.to_request(), options).await?;
    CommandOutput::new("interestByRegion", &result.data, result.raw)
}

/// Runs the multirange interest subcommand.
pub async fn multirange(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client
        .interest_over_time_multirange(&args.to_request(), options)
        .await?;
    CommandOutput::new("experimental.interestOverTimeMultirange", &result.data, result.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution_is_case_insensitive() {
        assert!(matches!(parse_resolution("DMA"), Ok(Resolution::Dma)));
        assert!(parse_resolution("continent").is_err());
    }
}
