use async_trait::async_trait;

use super::types::{
    google_maps_response::GoogleMapsResponse, serp_service_error::SerpServiceError,
};

pub struct LocalSearchInput {
    pub query: String,
    pub location: String,
}

/// Local business search by query and map location.
#[async_trait]
pub trait LocalSearch {
    async fn search_local(
        &self,
        input: LocalSearchInput,
    ) -> Result<GoogleMapsResponse, SerpServiceError>;
}
