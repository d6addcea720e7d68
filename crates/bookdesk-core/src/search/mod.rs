//! Client-side booking filtering (text search + status filter).

use std::collections::BTreeSet;

use crate::models::{Booking, StatusFilter, DEFAULT_STATUS_OPTIONS};

/// Filter bookings by case-insensitive text query and status.
///
/// The query is matched as a substring of the booking number, customer name,
/// or vehicle number. An empty query matches everything. Input order is kept.
#[must_use]
pub fn filter_bookings(bookings: &[Booking], query: &str, status: &StatusFilter) -> Vec<Booking> {
    let normalized_query = query.to_lowercase();

    bookings
        .iter()
        .filter(|booking| booking_matches_query(booking, &normalized_query))
        .filter(|booking| matches_status(booking, status))
        .cloned()
        .collect()
}

/// Whether a booking matches a raw search query.
#[must_use]
pub fn matches_search(booking: &Booking, query: &str) -> bool {
    booking_matches_query(booking, &query.to_lowercase())
}

/// Whether a booking passes a status filter.
#[must_use]
pub fn matches_status(booking: &Booking, status: &StatusFilter) -> bool {
    status.accepts(&booking.status)
}

/// Return a sorted, deduplicated, lowercase status list discovered across bookings.
#[must_use]
pub fn collect_statuses(bookings: &[Booking]) -> Vec<String> {
    bookings
        .iter()
        .map(|booking| booking.status.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Selector options: the default statuses followed by any others present in the data.
#[must_use]
pub fn status_options(bookings: &[Booking]) -> Vec<String> {
    let mut options: Vec<String> = DEFAULT_STATUS_OPTIONS
        .iter()
        .map(ToString::to_string)
        .collect();
    for status in collect_statuses(bookings) {
        if !status.is_empty() && !options.contains(&status) {
            options.push(status);
        }
    }
    options
}

fn booking_matches_query(booking: &Booking, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    booking.booking_number.to_lowercase().contains(query)
        || booking.customer.name.to_lowercase().contains(query)
        || booking.vehicle.number.to_lowercase().contains(query)
}
