mod app;
mod cli;
mod config;
mod services;
mod types;
mod utils;

use std::{env, io, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli);
    debug!("Starting search...");

    let mut stdout = io::stdout().lock();
    if let Err(e) = app::execute(&cli, |name| env::var(name).ok(), &mut stdout).await {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
