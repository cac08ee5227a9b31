pub mod local_search;
pub mod serp_service;
pub mod types;
