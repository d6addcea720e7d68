use bookdesk_core::search::filter_bookings;
use bookdesk_core::{Booking, BookingsClient, StatusFilter};

use crate::commands::common::{fetch_bookings, format_booking_lines};
use crate::error::CliError;

pub const NO_BOOKINGS_FOUND: &str = "No bookings found.";

pub async fn run_list(
    client: &BookingsClient,
    search: Option<&str>,
    status: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let bookings = fetch_bookings(client).await?;
    println!("{}", render_list(&bookings, search, status, as_json)?);
    Ok(())
}

pub fn render_list(
    bookings: &[Booking],
    search: Option<&str>,
    status: &str,
    as_json: bool,
) -> Result<String, CliError> {
    let filtered = filter_bookings(
        bookings,
        search.unwrap_or_default(),
        &StatusFilter::parse(status),
    );

    if as_json {
        return Ok(serde_json::to_string_pretty(&filtered)?);
    }
    if filtered.is_empty() {
        return Ok(NO_BOOKINGS_FOUND.to_string());
    }
    Ok(format_booking_lines(&filtered).join("\n"))
}
