use bookdesk_core::search::status_options;
use bookdesk_core::BookingsClient;

use crate::commands::common::fetch_bookings;
use crate::error::CliError;

pub async fn run_statuses(client: &BookingsClient, as_json: bool) -> Result<(), CliError> {
    let bookings = fetch_bookings(client).await?;
    let options = status_options(&bookings);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        println!("all");
        for status in options {
            println!("{status}");
        }
    }

    Ok(())
}
