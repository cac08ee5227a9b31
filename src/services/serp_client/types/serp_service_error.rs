use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerpServiceError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Search API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}
