use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Rate limit exceeded or access denied (HTTP {0})")]
    RateLimited(u16),

    #[error("Resource not found (HTTP {0})")]
    NotFound(u16),

    #[error("Upstream request failed (HTTP {0})")]
    Upstream(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortfolioError {
    /// Maps a non-success HTTP status onto the matching error variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => PortfolioError::RateLimited(status),
            404 => PortfolioError::NotFound(status),
            other => PortfolioError::Upstream(other),
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortfolioError::RateLimited(s)
            | PortfolioError::NotFound(s)
            | PortfolioError::Upstream(s) => Some(*s),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
