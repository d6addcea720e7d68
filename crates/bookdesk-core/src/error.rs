//! Error types for bookdesk-core

use thiserror::Error;

use crate::client::FetchError;

/// Result type alias using bookdesk-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bookdesk-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid service configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bookings could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
