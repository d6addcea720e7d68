//! HTTP client for the bookings service.
//!
//! One read: `GET {base_url}/api/bookings`. Failures collapse into a single
//! user-visible message (see [`FetchError::user_message`]); the variants only
//! exist so logs can tell transport, HTTP, and decode failures apart.

use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::models::Booking;
use crate::util::compact_text;

/// Message shown when the service gives no usable error message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch bookings";

/// Why a bookings fetch did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("bookings request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("bookings endpoint returned HTTP {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A success response that is not a booking array
    #[error("invalid bookings response: {0}")]
    Decode(String),

    /// The owner stopped waiting before the response arrived
    #[error("bookings request cancelled")]
    Cancelled,
}

impl FetchError {
    /// Text to display in the error banner.
    ///
    /// The service's `message` is used verbatim when present.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// HTTP client for the bookings collection.
#[derive(Debug, Clone)]
pub struct BookingsClient {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl PartialEq for BookingsClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl BookingsClient {
    /// Builds a client for the given service configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetches the full booking list in service order.
    pub async fn fetch_bookings(&self) -> std::result::Result<Vec<Booking>, FetchError> {
        let url = self.config.bookings_url();
        tracing::debug!("Fetching bookings from {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        if !status.is_success() {
            tracing::warn!(
                "Bookings endpoint returned HTTP {}: {}",
                status.as_u16(),
                compact_text(&body)
            );
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                message: error_message_from_body(&body),
            });
        }

        let bookings = parse_bookings(&body)?;
        tracing::info!("Fetched {} bookings", bookings.len());
        Ok(bookings)
    }

    /// Like [`Self::fetch_bookings`], but gives up as soon as `token` is cancelled.
    pub async fn fetch_bookings_until_cancelled(
        &self,
        token: &CancellationToken,
    ) -> std::result::Result<Vec<Booking>, FetchError> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!("Bookings fetch cancelled");
                Err(FetchError::Cancelled)
            }
            result = self.fetch_bookings() => result,
        }
    }
}

/// Parses a success body into bookings.
pub fn parse_bookings(body: &str) -> std::result::Result<Vec<Booking>, FetchError> {
    serde_json::from_str(body).map_err(|error| FetchError::Decode(error.to_string()))
}

/// Extracts the top-level `message` string from an error body, if any.
pub fn error_message_from_body(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}
