use thiserror::Error;

/// Errors produced by the stats API client.
#[derive(Debug, Error)]
pub enum StatsApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },
}
