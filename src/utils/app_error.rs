use thiserror::Error;

use crate::{
    config::ConfigError,
    services::serp_client::types::serp_service_error::SerpServiceError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Search failed: {0}")]
    Search(#[from] SerpServiceError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 1,
            AppError::Search(_) | AppError::Output(_) => 2,
        }
    }
}
