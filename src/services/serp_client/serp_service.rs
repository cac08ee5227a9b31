use async_trait::async_trait;
use tracing::{debug, info};
use urlencoding::encode;

use super::{
    local_search::{LocalSearch, LocalSearchInput},
    types::{google_maps_response::GoogleMapsResponse, serp_service_error::SerpServiceError},
};

pub const DEFAULT_SERP_HOST: &str = "https://serpapi.com";
pub const GOOGLE_MAPS_ENGINE: &str = "google_maps";

#[derive(Clone)]
pub struct SerpServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct SerpService {
    config: SerpServiceConfig,
    client: reqwest::Client,
}

impl SerpService {
    pub fn new(config: SerpServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self, input: &LocalSearchInput) -> String {
        format!(
            "{}/search.json?engine={}&q={}&ll={}&api_key={}",
            self.config.host.trim_end_matches('/'),
            GOOGLE_MAPS_ENGINE,
            encode(&input.query),
            encode(&input.location),
            encode(&self.config.api_key)
        )
    }
}

#[async_trait]
impl LocalSearch for SerpService {
    async fn search_local(
        &self,
        input: LocalSearchInput,
    ) -> Result<GoogleMapsResponse, SerpServiceError> {
        info!(
            query = %input.query,
            location = %input.location,
            "Searching Google Maps local results"
        );

        let resp = self
            .client
            .get(self.search_url(&input))
            .send()
            .await
            .map_err(|e| SerpServiceError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        debug!(status = status.as_u16(), "Search API responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<GoogleMapsResponse>()
            .await
            .map_err(|e| SerpServiceError::Decode(e.without_url().to_string()))
    }
}
