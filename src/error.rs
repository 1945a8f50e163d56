//! Fetch-boundary errors
//!
//! Every failure between issuing a request and holding a validated payload
//! lands in one of these variants. The controller turns them into widget
//! placeholders; nothing here is fatal to the dashboard.

use thiserror::Error;

/// Error raised while fetching or validating a backend payload
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error on {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid payload from {endpoint}: {reason}")]
    Schema { endpoint: String, reason: String },

    #[error("{endpoint} requires an area")]
    MissingArea { endpoint: String },
}

impl FetchError {
    /// Endpoint the failing request was addressed to
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::Schema { endpoint, .. }
            | Self::MissingArea { endpoint } => endpoint,
        }
    }
}

/// Result type for the fetch layer
pub type FetchResult<T> = std::result::Result<T, FetchError>;
