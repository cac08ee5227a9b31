use clap::{ArgAction, Parser};

use crate::types::lat_long_location::LocationPreset;

/// Look up businesses on Google Maps through SerpAPI and list their phone numbers
#[derive(Parser, Debug, Default)]
#[command(name = "serp-phone-extractor", version, long_about = None)]
pub struct Cli {
    /// Search keyword, e.g. "Coffee" or "Ramen" [default: Coffee]
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Map location such as "@lat,lon,zoomz" [default: @40.7455096,-74.0083012,14z]
    #[arg(allow_hyphen_values = true)]
    pub location: Option<String>,

    /// Pass "--csv" or "-c" to also print the results as CSV
    #[arg(allow_hyphen_values = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Search around a well-known city center instead of LOCATION
    #[arg(long, value_enum, conflicts_with = "location")]
    pub preset: Option<LocationPreset>,

    /// Search radius in meters, converted to a map zoom level
    #[arg(
        long,
        value_name = "METERS",
        value_parser = clap::value_parser!(u32).range(100..=50_000),
        conflicts_with = "location"
    )]
    pub radius: Option<u32>,

    /// Only list places that offer takeout
    #[arg(long)]
    pub takeout_only: bool,

    /// List at most this many places
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_results: Option<u32>,

    /// Show each place's rating and review count
    #[arg(long)]
    pub show_ratings: bool,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
