pub mod google_maps_response;
pub mod serp_service_error;
