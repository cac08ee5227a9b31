use std::io::Write;

use tracing::info;

use crate::{
    cli::Cli,
    config::Config,
    services::serp_client::{
        local_search::{LocalSearch, LocalSearchInput},
        serp_service::{SerpService, SerpServiceConfig},
    },
    utils::{
        app_error::AppError,
        place_extractor::{extract_places, PlaceFilter},
        report_printer::{print_report, ReportOptions},
    },
};

pub fn gen_service(config: &Config) -> SerpService {
    SerpService::new(SerpServiceConfig {
        api_key: config.api_key.clone(),
        host: config.host.clone(),
    })
}

/// Resolves configuration and performs one search. Configuration errors are
/// returned before any request is sent.
pub async fn execute<F, W>(cli: &Cli, env: F, out: &mut W) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    execute_with(cli, env, gen_service, out).await
}

/// Like [`execute`], with the search service built by `build` from the
/// resolved configuration.
pub async fn execute_with<F, B, S, W>(
    cli: &Cli,
    env: F,
    build: B,
    out: &mut W,
) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
    B: FnOnce(&Config) -> S,
    S: LocalSearch,
    W: Write,
{
    let config = Config::resolve(cli, env)?;
    let service = build(&config);

    run(&config, &service, out).await
}

pub async fn run<S, W>(config: &Config, search: &S, out: &mut W) -> Result<(), AppError>
where
    S: LocalSearch,
    W: Write,
{
    writeln!(out, "Search query: {}", config.query)?;
    writeln!(out, "Location: {}", config.location)?;
    writeln!(out, "\nSearching for stores...")?;

    let response = search
        .search_local(LocalSearchInput {
            query: config.query.clone(),
            location: config.location.clone(),
        })
        .await?;

    let places = extract_places(
        &response,
        PlaceFilter {
            takeout_only: config.takeout_only,
            max_results: config.max_results,
        },
    );
    info!(count = places.len(), "Extracted places");

    print_report(
        out,
        &places,
        &response,
        ReportOptions {
            csv: config.csv_requested,
            ratings: config.show_ratings,
        },
    )?;

    Ok(())
}
