//! bookdesk-core - Core library for Bookdesk
//!
//! This crate contains the booking models, the client-side filter engine, the
//! bookings API client, and the list view state machine shared by the desktop
//! dashboard and the CLI.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
pub mod util;

pub use client::{BookingsClient, FetchError, FALLBACK_ERROR_MESSAGE};
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use models::{Booking, StatusFilter};
pub use state::{BookingListState, ListView};
