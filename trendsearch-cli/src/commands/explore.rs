//! Explore subcommand and the keyword/geo/time argument block shared by
//! every widget-backed subcommand.

use clap::Args;
use trendsearch::models::{ExploreRequest, Geo, GoogleProperty};
use trendsearch::{EndpointOptions, TrendsClient};
use trendsearch_core::TrendsError;

use crate::commands::CommandOutput;

/// Keyword comparison arguments, matching the explore request shape.
#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Keywords to compare (at least one).
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Geo code; repeat for per-keyword geos.
    #[arg(long, short = 'g')]
    pub geo: Vec<String>,

    /// Time window expression, e.g. "today 12-m" or "2024-01-01 2024-06-30".
    #[arg(long, short = 't')]
    pub time: Option<String>,

    /// Category id (0 = all categories).
    #[arg(long, short = 'c')]
    pub category: Option<u32>,

    /// Search property (web, images, news, youtube, froogle).
    #[arg(long, short = 'p', value_parser = parse_property)]
    pub property: Option<GoogleProperty>,
}

impl ExploreArgs {
    /// The explore request these arguments describe.
    pub fn to_request(&self) -> ExploreRequest {
        ExploreRequest {
            keywords: self.keywords.clone(),
            geo: geo_from_args(&self.geo),
            time: self.time.clone(),
            category: self.category,
            property: self.property,
            hl: None,
            tz: None,
        }
    }
}

/// Maps repeated `--geo` flags onto the request's geo shape.
pub fn geo_from_args(geos: &[String]) -> Option<Geo> {
    match geos {
        [] => None,
        [one] => Some(Geo::One(one.clone())),
        many => Some(Geo::Many(many.to_vec())),
    }
}

fn parse_property(value: &str) -> Result<GoogleProperty, String> {
    match value {
        "web" | "" => Ok(GoogleProperty::Web),
        "images" => Ok(GoogleProperty::Images),
        "news" => Ok(GoogleProperty::News),
        "youtube" => Ok(GoogleProperty::Youtube),
        "froogle" => Ok(GoogleProperty::Froogle),
        other => Err(format!(
            "unknown property {other:?} (expected web, images, news, youtube or froogle)"
        )),
    }
}

/// Runs the explore subcommand.
pub async fn run(
    args: &ExploreArgs,
    client: &TrendsClient,
    options: &EndpointOptions,
) -> Result<CommandOutput, TrendsError> {
    let result = client.explore(&args.to_request(), options).await?;
    CommandOutput::new("explore", &result.data, result.raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_from_args() {
        assert!(geo_from_args(&[]).is_none());
        assert!(matches!(
            geo_from_args(&["US".to_string()]),
            Some(Geo::One(_))
        ));
        assert!(matches!(
            geo_from_args(&["US".to_string(), "DE".to_string()]),
            Some(Geo::Many(_))
        ));
    }

    #[test]
    fn test_parse_property() {
        assert!(matches!(parse_property("youtube"), Ok(GoogleProperty::Youtube)));
        assert!(parse_property("maps").is_err());
    }
}
