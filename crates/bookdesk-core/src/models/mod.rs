//! Data models for Bookdesk

mod booking;
mod status;

pub use booking::{Booking, Customer, Payment, Trip, Vehicle};
pub use status::{StatusFilter, DEFAULT_STATUS_OPTIONS};
