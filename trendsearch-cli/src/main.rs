// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Trendsearch CLI - Google Trends data from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Interest timeline for one keyword
//! trendsearch interest-over-time rust
//!
//! # Compare keywords over a custom window
//! trendsearch interest-over-time rust go --time "today 3-m" --geo US
//!
//! # Regional breakdown at city granularity
//! trendsearch interest-by-region rust --resolution city
//!
//! # What is trending right now in Germany
//! trendsearch trending-now --geo DE --language de
//!
//! # Related queries, pretty-printed with the raw payload attached
//! trendsearch related-queries rust --output pretty --raw
//!
//! # CSV export
//! trendsearch interest-over-time-csv rust
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trendsearch::{ClientConfig, EndpointOptions, RateLimitPolicy, RetryPolicy, TrendsClient};
use trendsearch_core::TrendsError;

use commands::{
    autocomplete, csv, explore, interest, legacy, pickers, related, trending, CommandOutput,
};

// ============================================================================
// CLI Definition
// ============================================================================

/// Trendsearch CLI - Google Trends client.
#[derive(Parser)]
#[command(name = "trendsearch")]
#[command(about = "Google Trends data from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Upstream base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Default host language, e.g. en-US.
    #[arg(long, global = true)]
    pub hl: Option<String>,

    /// Default timezone offset in minutes.
    #[arg(long, global = true)]
    pub tz: Option<i32>,

    /// Per-attempt request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Retries after the first attempt.
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Base backoff delay in milliseconds.
    #[arg(long, global = true)]
    pub retry_base_delay_ms: Option<u64>,

    /// Backoff delay cap in milliseconds.
    #[arg(long, global = true)]
    pub retry_max_delay_ms: Option<u64>,

    /// Maximum concurrent requests.
    #[arg(long, global = true)]
    pub max_concurrent: Option<usize>,

    /// Minimum spacing between request starts, in milliseconds.
    #[arg(long, global = true)]
    pub min_delay_ms: Option<u64>,

    /// User-Agent header value.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// HTTP(S) proxy URL.
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Output rendering (json or pretty).
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Attach the raw upstream payload to the output.
    #[arg(long, global = true)]
    pub raw: bool,

    /// Verbose logging to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress logging entirely.
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI subcommands, one per endpoint.
#[derive(Subcommand)]
pub enum Commands {
    /// Suggest knowledge-graph topics for a keyword.
    Autocomplete(autocomplete::AutocompleteArgs),

    /// Fetch the raw widget descriptors for a comparison.
    Explore(explore::ExploreArgs),

    /// Interest timeline for one or more keywords.
    #[command(visible_alias = "iot")]
    InterestOverTime(explore::ExploreArgs),

    /// Interest broken down by geographic region.
    #[command(visible_alias = "ibr")]
    InterestByRegion(interest::RegionArgs),

    /// Top and rising related queries.
    RelatedQueries(explore::ExploreArgs),

    /// Top and rising related topics.
    RelatedTopics(explore::ExploreArgs),

    /// Daily trending searches (legacy; may be decommissioned).
    DailyTrends(legacy::DailyTrendsArgs),

    /// Real-time trending stories (legacy; may be decommissioned).
    RealTimeTrends(legacy::RealTimeTrendsArgs),

    /// Currently trending searches.
    TrendingNow(trending::TrendingNowArgs),

    /// News articles for trending searches.
    TrendingArticles(trending::TrendingArticlesArgs),

    /// Geo filter picker tree.
    GeoPicker,

    /// Category filter picker tree.
    CategoryPicker,

    /// Yearly top charts (legacy; may be decommissioned).
    TopCharts(legacy::TopChartsArgs),

    /// Interest timeline across multiple compared time ranges.
    InterestOverTimeMultirange(explore::ExploreArgs),

    /// The ancient hot-trends visualization feed.
    HotTrends,

    /// Interest-over-time data as CSV.
    InterestOverTimeCsv(explore::ExploreArgs),

    /// Multirange interest data as CSV.
    InterestOverTimeMultirangeCsv(explore::ExploreArgs),

    /// Interest-by-region data as CSV.
    InterestByRegionCsv(interest::RegionArgs),

    /// Related queries as CSV.
    RelatedQueriesCsv(explore::ExploreArgs),

    /// Related topics as CSV.
    RelatedTopicsCsv(explore::ExploreArgs),
}

/// Output rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Compact JSON, one document per line.
    #[default]
    Json,
    /// Indented JSON for human eyes.
    Pretty,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("trendsearch=debug,info")
        } else {
            EnvFilter::new("trendsearch=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Client construction
// ============================================================================

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::new();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(hl) = &cli.hl {
        config = config.with_hl(hl.clone());
    }
    if let Some(tz) = cli.tz {
        config = config.with_tz(tz);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout(std::time::Duration::from_millis(timeout_ms));
    }
    if let Some(user_agent) = &cli.user_agent {
        config = config.with_user_agent(user_agent.clone());
    }
    if let Some(proxy) = &cli.proxy {
        config = config.with_proxy(proxy.clone());
    }

    let mut retry = RetryPolicy::default();
    if let Some(max_retries) = cli.max_retries {
        retry.max_retries = max_retries;
    }
    if let Some(base_delay_ms) = cli.retry_base_delay_ms {
        retry.base_delay_ms = base_delay_ms;
    }
    if let Some(max_delay_ms) = cli.retry_max_delay_ms {
        retry.max_delay_ms = max_delay_ms;
    }
    config = config.with_retry(retry);

    let mut rate_limit = RateLimitPolicy::default();
    if let Some(max_concurrent) = cli.max_concurrent {
        rate_limit.max_concurrent = max_concurrent;
    }
    if let Some(min_delay_ms) = cli.min_delay_ms {
        rate_limit.min_delay_ms = min_delay_ms;
    }
    config.with_rate_limit(rate_limit)
}

async fn dispatch(
    cli: &Cli,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    match &cli.command {
        Commands::Autocomplete(args) => autocomplete::run(args, client, options).await,
        Commands::Explore(args) => explore::run(args, client, options).await,
        Commands::InterestOverTime(args) => interest::over_time(args, client, options).await,
        Commands::InterestByRegion(args) => interest::by_region(args, client, options).await,
        Commands::RelatedQueries(args) => related::queries(args, client, options).await,
        Commands::RelatedTopics(args) => related::topics(args, client, options).await,
        Commands::DailyTrends(args) => legacy::daily_trends(args, client, options).await,
        Commands::RealTimeTrends(args) => legacy::real_time_trends(args, client, options).await,
        Commands::TrendingNow(args) => trending::now(args, client, options).await,
        Commands::TrendingArticles(args) => trending::articles(args, client, options).await,
        Commands::GeoPicker => pickers::geo(client, options).await,
        Commands::CategoryPicker => pickers::category(client, options).await,
        Commands::TopCharts(args) => legacy::top_charts(args, client, options).await,
        Commands::InterestOverTimeMultirange(args) => {
            interest::multirange(args, client, options).await
        }
        Commands::HotTrends => legacy::hot_trends(client, options).await,
        Commands::InterestOverTimeCsv(args) => csv::interest_over_time(args, client, options).await,
        Commands::InterestOverTimeMultirangeCsv(args) => {
            csv::multirange(args, client, options).await
        }
        Commands::InterestByRegionCsv(args) => csv::by_region(args, client, options).await,
        Commands::RelatedQueriesCsv(args) => csv::related_queries(args, client, options).await,
        Commands::RelatedTopicsCsv(args) => csv::related_topics(args, client, options).await,
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = EndpointOptions {
        debug_raw_response: cli.raw,
    };

    let config = client_config(&cli);
    debug!(base_url = %config.base_url, hl = %config.hl, "Client configured");

    let result = match TrendsClient::with_config(config) {
        Ok(client) => dispatch(&cli, &client, &options).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(output) => {
            output::emit_success(&output, cli.output)?;
            Ok(())
        }
        Err(error) => {
            output::emit_error(&error, cli.output)?;
            std::process::exit(output::exit_code_for(&error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_apply_to_config() {
        let cli = Cli::parse_from([
            "trendsearch",
            "--hl",
            "de-DE",
            "--max-retries",
            "0",
            "--min-delay-ms",
            "0",
            "interest-over-time",
            "rust",
        ]);
        let config = client_config(&cli);
        assert_eq!(config.hl, "de-DE");
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.rate_limit.min_delay_ms, 0);
    }
}
