//! Daily-trends, real-time-trends, top-charts and hot-trends subcommands.
//!
//! Google has been decommissioning these paths one by one; failures with
//! a 404/410 come back as `ENDPOINT_UNAVAILABLE_ERROR` with the replacement
//! endpoints named.

use clap::Args;
use trendsearch::models::{
    DailyTrendsRequest, NumberOrString, RealTimeTrendsRequest, TopChartsDate, TopChartsRequest,
};
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;

fn parse_category(value: &str) -> NumberOrString {
    match value.parse::<f64>() {
        Ok(n) => NumberOrString::Number(n),
        Err(_) => NumberOrString::String(value.to_string()),
    }
}

/// Arguments for the daily-trends subcommand.
#[derive(Args, Debug, Clone)]
pub struct DailyTrendsArgs {
    /// Geo code.
    #[arg(long, short = 'g', default_value = "US")]
    pub geo: String,

    /// Category name or numeric id.
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Day to fetch, as an ISO date (defaults to today).
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// News items per trend.
    #[arg(long)]
    pub ns: Option<i64>,
}

/// Runs the daily-trends subcommand.
pub async fn daily_trends(
    args: &DailyTrendsArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let request = DailyTrendsRequest {
        geo: args.geo.clone(),
        category: args.category.as_deref().map(parse_category),
        date: args.date.clone(),
        ns: args.ns,
        hl: None,
        tz: None,
    };
    let result = client.daily_trends(&request, options).await?;
    CommandOutput::new("dailyTrends", &result.data, result.raw)
}

/// Arguments for the real-time-trends subcommand.
#[derive(Args, Debug, Clone)]
pub struct RealTimeTrendsArgs {
    /// Geo code.
    #[arg(long, short = 'g', default_value = "US")]
    pub geo: String,

    /// Category name or numeric id.
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Requested story count.
    #[arg(long)]
    pub ri: Option<i64>,

    /// Requested summary count.
    #[arg(long)]
    pub rs: Option<i64>,
}

/// Runs the real-time-trends subcommand.
pub async fn real_time_trends(
    args: &RealTimeTrendsArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let request = RealTimeTrendsRequest {
        geo: args.geo.clone(),
        category: args.category.as_deref().map(parse_category),
        fi: None,
        fs: None,
        ri: args.ri,
        rs: args.rs,
        sort: None,
        hl: None,
        tz: None,
    };
    let result = client.real_time_trends(&request, options).await?;
    CommandOutput::new("realTimeTrends", &result.data, result.raw)
}

/// Arguments for the top-charts subcommand.
#[derive(Args, Debug, Clone)]
pub struct TopChartsArgs {
    /// Chart year or ISO date (defaults to the current year).
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Geo code.
    #[arg(long, short = 'g', default_value = "GLOBAL")]
    pub geo: String,

    /// Request the mobile chart variant.
    #[arg(long)]
    pub mobile: bool,
}

/// Runs the top-charts subcommand.
pub async fn top_charts(
    args: &TopChartsArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let date = args.date.as_deref().map(|value| match value.parse::<i64>() {
        Ok(year) => TopChartsDate::Year(year),
        Err(_) => TopChartsDate::Text(value.to_string()),
    });
    let request = TopChartsRequest {
        date,
        geo: Some(args.geo.clone()),
        is_mobile: Some(args.mobile),
        hl: None,
        tz: None,
    };
    let result = client.top_charts(&request, options).await?;
    CommandOutput::new("experimental.topCharts", &result.data, result.raw)
}

/// Runs the hot-trends subcommand.
pub async fn hot_trends(
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.hot_trends_legacy(options).await?;
    CommandOutput::new("experimental.hotTrendsLegacy", &result.data, result.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("5"), NumberOrString::Number(5.0));
        assert_eq!(
            parse_category("all"),
            NumberOrString::String("all".to_string())
        );
    }
}
