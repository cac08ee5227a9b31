use thiserror::Error;
use tracing::debug;

use crate::{
    cli::Cli,
    services::serp_client::serp_service::DEFAULT_SERP_HOST,
    types::lat_long_location::{radius_to_zoom, DEFAULT_ZOOM},
};

/// Environment variables searched for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["SERPAPI_KEY", "SERP_API_KEY"];
pub const HOST_VAR: &str = "SERPAPI_HOST";

pub const DEFAULT_QUERY: &str = "Coffee";
pub const DEFAULT_LOCATION: &str = "@40.7455096,-74.0083012,14z";
pub const CSV_FLAGS: [&str; 2] = ["--csv", "-c"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SERPAPI_KEY or SERP_API_KEY is not set in the environment or .env file.")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub host: String,
    pub query: String,
    pub location: String,
    pub csv_requested: bool,
    pub takeout_only: bool,
    pub max_results: Option<usize>,
    pub show_ratings: bool,
}

impl Config {
    /// Resolves the run configuration. `env` looks up a variable by name so
    /// callers decide where values come from.
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| env(*name).filter(|v| !v.trim().is_empty()))
            .ok_or(ConfigError::MissingApiKey)?;

        let host = env(HOST_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERP_HOST.to_string());

        let config = Self {
            api_key,
            host,
            query: cli
                .query
                .clone()
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            location: resolve_location(cli),
            csv_requested: cli
                .format
                .as_deref()
                .is_some_and(|flag| CSV_FLAGS.contains(&flag)),
            takeout_only: cli.takeout_only,
            max_results: cli.max_results.map(|n| n as usize),
            show_ratings: cli.show_ratings,
        };

        debug!(
            query = %config.query,
            location = %config.location,
            csv = config.csv_requested,
            takeout_only = config.takeout_only,
            max_results = ?config.max_results,
            host = %config.host,
            "Resolved configuration"
        );

        Ok(config)
    }
}

fn resolve_location(cli: &Cli) -> String {
    if let Some(location) = &cli.location {
        return location.clone();
    }

    if cli.preset.is_none() && cli.radius.is_none() {
        return DEFAULT_LOCATION.to_string();
    }

    let zoom = cli.radius.map(radius_to_zoom).unwrap_or(DEFAULT_ZOOM);
    cli.preset.unwrap_or_default().at_zoom(zoom).to_ll()
}
