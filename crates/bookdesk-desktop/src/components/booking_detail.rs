//! Detail pane for the selected booking

use dioxus::prelude::*;

use bookdesk_core::Booking;

use super::button::{Button, ButtonVariant};
use super::card::{Card, CardContent};
use crate::state::AppState;

#[component]
pub fn BookingDetail(booking: Booking, on_close: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let customer_rows = vec![
        ("Name", Some(booking.customer.name.clone())),
        ("Phone", booking.customer.phone.clone()),
        ("Email", booking.customer.email.clone()),
    ];
    let vehicle_rows = vec![
        ("Number", Some(booking.vehicle.number.clone())),
        ("Type", booking.vehicle.kind.clone()),
        ("Driver", booking.vehicle.driver.clone()),
    ];
    let trip_rows = booking.trip.as_ref().map(|trip| {
        vec![
            ("From", trip.from.clone()),
            ("To", trip.to.clone()),
            ("Start", trip.start_date.clone()),
            ("End", trip.end_date.clone()),
            ("Days", trip.total_days.map(|days| days.to_string())),
        ]
    });
    let payment_rows = booking.payment.as_ref().map(|payment| {
        vec![
            ("Total", payment.total.map(format_amount)),
            ("Advance", payment.advance.map(format_amount)),
            ("Balance", payment.balance.map(format_amount)),
            ("Status", payment.status.clone()),
        ]
    });

    let mut sections = vec![("Customer", customer_rows), ("Vehicle", vehicle_rows)];
    if let Some(rows) = trip_rows {
        sections.push(("Trip", rows));
    }
    if let Some(rows) = payment_rows {
        sections.push(("Payment", rows));
    }

    rsx! {
        aside {
            class: "booking-detail",
            style: "
                width: 340px;
                padding: 24px;
                overflow-y: auto;
                border-left: 1px solid {colors.border};
                background: {colors.bg_primary};
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                div {
                    div { style: "font-size: 16px; font-weight: 600;", "{booking.booking_number}" }
                    div { style: "font-size: 12px; color: {colors.text_secondary};", "{booking.status}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |evt| on_close.call(evt),
                    "Close"
                }
            }

            for (title, rows) in sections {
                Card {
                    key: "{title}",
                    CardContent {
                        div {
                            style: "font-size: 12px; font-weight: 600; text-transform: uppercase; color: {colors.text_muted}; margin-bottom: 8px;",
                            "{title}"
                        }
                        for (label, value) in rows.into_iter().filter_map(|(label, value)| value.map(|v| (label, v))) {
                            div {
                                key: "{label}",
                                style: "display: flex; justify-content: space-between; gap: 12px; padding: 2px 0;",
                                span { style: "color: {colors.text_secondary};", "{label}" }
                                span { style: "text-align: right;", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Formats an amount with thousands separators and at most two decimals.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents_total = (value.abs() * 100.0).round() as u64;
    let whole = (cents_total / 100).to_string();
    let cents = cents_total % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}
