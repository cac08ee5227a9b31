pub mod serp_client;
