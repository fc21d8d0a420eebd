use thiserror::Error;

/// Everything that can go wrong between submitting an ID and getting items back.
///
/// The calendar treats every variant the same way: log it and show an
/// empty grid.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API base URL cannot have path segments: {0}")]
    InvalidBase(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
