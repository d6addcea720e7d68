use bookdesk_core::BookingsClient;

use crate::commands::common::{fetch_bookings, find_booking, format_booking_detail};
use crate::error::CliError;

pub async fn run_show(client: &BookingsClient, id: &str, as_json: bool) -> Result<(), CliError> {
    let bookings = fetch_bookings(client).await?;
    let booking = find_booking(&bookings, id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(booking)?);
    } else {
        for line in format_booking_detail(booking) {
            println!("{line}");
        }
    }

    Ok(())
}
