use std::time::Duration;

use bookdesk_core::config::{resolve_base_url, BASE_URL_ENV};
use bookdesk_core::{Booking, BookingsClient, ServiceConfig};

use crate::error::CliError;

/// Builds the client from `--base-url`, then the environment, then the default service.
pub fn build_client(
    base_url_flag: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<BookingsClient, CliError> {
    let config = resolve_service_config(
        base_url_flag,
        std::env::var(BASE_URL_ENV).ok(),
        timeout_secs,
    )?;
    Ok(BookingsClient::new(config)?)
}

pub fn resolve_service_config(
    base_url_flag: Option<String>,
    base_url_env: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<ServiceConfig, CliError> {
    let base_url = resolve_base_url([base_url_flag, base_url_env]);
    tracing::debug!("Using bookings service {}", base_url);
    Ok(ServiceConfig::new(base_url)?.with_timeout(timeout_secs.map(Duration::from_secs)))
}

/// Fetches every booking, reducing failures to the user-facing message.
pub async fn fetch_bookings(client: &BookingsClient) -> Result<Vec<Booking>, CliError> {
    client.fetch_bookings().await.map_err(|error| {
        tracing::debug!("Bookings fetch failed: {}", error);
        CliError::Fetch(error.user_message())
    })
}

pub fn format_booking_lines(bookings: &[Booking]) -> Vec<String> {
    bookings
        .iter()
        .map(|booking| {
            let line = format!(
                "{:<14} {:<10} {:<20} {:<16} {}",
                booking.booking_number,
                booking.status,
                booking.customer.name,
                booking.vehicle.number,
                booking.route().unwrap_or_default()
            );
            line.trim_end().to_string()
        })
        .collect()
}

pub fn format_booking_detail(booking: &Booking) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", booking.booking_number, booking.status),
        format!("  id:        {}", booking.id),
        format!("  customer:  {}", booking.customer.name),
    ];
    push_optional(&mut lines, "  phone:     ", booking.customer.phone.as_deref());
    push_optional(&mut lines, "  email:     ", booking.customer.email.as_deref());
    lines.push(format!("  vehicle:   {}", booking.vehicle.number));
    push_optional(&mut lines, "  type:      ", booking.vehicle.kind.as_deref());
    push_optional(&mut lines, "  driver:    ", booking.vehicle.driver.as_deref());
    push_optional(&mut lines, "  route:     ", booking.route().as_deref());
    push_optional(&mut lines, "  dates:     ", booking.date_range().as_deref());

    if let Some(payment) = &booking.payment {
        let amounts = [
            ("total", payment.total),
            ("advance", payment.advance),
            ("balance", payment.balance),
        ]
        .into_iter()
        .filter_map(|(label, amount)| amount.map(|value| format!("{label} {value}")))
        .collect::<Vec<_>>();
        if !amounts.is_empty() {
            lines.push(format!("  payment:   {}", amounts.join(", ")));
        }
        push_optional(&mut lines, "  paid:      ", payment.status.as_deref());
    }

    lines
}

/// Finds a booking by exact id or case-insensitive booking number.
pub fn find_booking<'a>(bookings: &'a [Booking], query: &str) -> Result<&'a Booking, CliError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::EmptyBookingId);
    }

    bookings
        .iter()
        .find(|booking| booking.id == query)
        .or_else(|| {
            bookings
                .iter()
                .find(|booking| booking.booking_number.eq_ignore_ascii_case(query))
        })
        .ok_or_else(|| CliError::BookingNotFound(query.to_string()))
}

fn push_optional(lines: &mut Vec<String>, prefix: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("{prefix}{value}"));
    }
}
