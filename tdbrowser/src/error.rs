//! Error types for the radio-browser directory client

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the radio-browser API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned a non-success status
    #[error("API returned status: {0}")]
    Api(reqwest::StatusCode),

    /// Station id could not be decoded back into a provider UUID
    #[error("Invalid station id: {0}")]
    InvalidStationId(String),

    /// The playable-URL endpoint returned no usable entry
    #[error("No playable URL for station: {0}")]
    NoPlayableUrl(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
