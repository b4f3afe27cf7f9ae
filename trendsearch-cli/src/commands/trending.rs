//! Trending-now and trending-articles subcommands.

use clap::Args;
use trendsearch::models::{ArticleKey, TrendingArticlesRequest, TrendingNowRequest};
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;

/// Arguments for the trending-now subcommand.
#[derive(Args, Debug, Clone)]
pub struct TrendingNowArgs {
    /// Geo code.
    #[arg(long, short = 'g', default_value = "US")]
    pub geo: String,

    /// Content language.
    #[arg(long, short = 'l', default_value = "en")]
    pub language: String,

    /// Trend window in hours (4, 24, 48 or 168).
    #[arg(long, default_value = "24")]
    pub hours: u32,
}

/// Arguments for the trending-articles subcommand.
#[derive(Args, Debug, Clone)]
pub struct TrendingArticlesArgs {
    /// Article key as "index,geo,id" (repeat for more). Keys come from a
    /// previous trending-now call.
    #[arg(long = "key", required = true, value_parser = parse_article_key)]
    pub keys: Vec<ArticleKey>,

    /// Number of articles to fetch (1-100).
    #[arg(long, default_value = "5")]
    pub count: u32,
}

fn parse_article_key(value: &str) -> Result<ArticleKey, String> {
    let mut parts = value.splitn(3, ',');
    let index = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .ok_or_else(|| format!("expected \"index,geo,id\", got {value:?}"))?;
    let geo = parts
        .next()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("expected \"index,geo,id\", got {value:?}"))?;
    let id = parts
        .next()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("expected \"index,geo,id\", got {value:?}"))?;
    Ok(ArticleKey(index, geo.to_string(), id.to_string()))
}

/// Runs the trending-now subcommand.
pub async fn now(
    args: &TrendingNowArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let request = TrendingNowRequest {
        geo: args.geo.clone(),
        language: args.language.clone(),
        hours: args.hours,
    };
    let result = client.trending_now(&request, options).await?;
    CommandOutput::new("trendingNow", &result.data, result.raw)
}

/// Runs the trending-articles subcommand.
pub async fn articles(
    args: &TrendingArticlesArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let request = TrendingArticlesRequest {
        article_keys: args.keys.clone(),
        article_count: args.count,
    };
    let result = client.trending_articles(&request, options).await?;
    CommandOutput::new("trendingArticles", &result.data, result.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_key() {
        let key = parse_article_key("3,US,abc").unwrap();
        assert_eq!(key, ArticleKey(3, "US".to_string(), "abc".to_string()));
        assert!(parse_article_key("US,abc").is_err());
        assert!(parse_article_key("3,US").is_err());
    }
}
