use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] bookdesk_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    /// User-facing fetch failure message
    #[error("{0}")]
    Fetch(String),
    #[error("Booking id cannot be empty")]
    EmptyBookingId,
    #[error("Booking not found for id/number: {0}")]
    BookingNotFound(String),
}
