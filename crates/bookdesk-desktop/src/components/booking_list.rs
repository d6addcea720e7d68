//! Booking list component
//!
//! Fetches the bookings once per mount and filters them locally as the
//! operator types or picks a status. The fetch is bound to a cancellation
//! token that is cancelled when the component unmounts, so a late response
//! never writes into a dropped list.

use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use bookdesk_core::{Booking, BookingListState, BookingsClient, ListView, StatusFilter};

use super::button::{Button, ButtonVariant};
use super::card::{Card, CardContent};
use super::{BookingCard, SearchBar, StatusFilterSelect};
use crate::state::AppState;

/// Searchable, status-filterable list of bookings
#[component]
pub fn BookingList(
    client: BookingsClient,
    #[props(!optional)]
    selected_id: Option<String>,
    on_select_booking: EventHandler<Booking>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut list = use_signal(BookingListState::new);
    let cancel_token = use_hook(CancellationToken::new);

    let drop_token = cancel_token.clone();
    use_drop(move || drop_token.cancel());

    use_future(move || {
        let client = client.clone();
        let token = cancel_token.clone();
        async move {
            list.write().begin_fetch();
            tracing::info!("Loading bookings from {}", client.config().bookings_url());

            let result = client.fetch_bookings_until_cancelled(&token).await;
            if token.is_cancelled() {
                return;
            }
            if let Err(error) = &result {
                tracing::error!("Failed to fetch bookings: {}", error);
            }
            list.write().finish_fetch(result);
        }
    });

    let view = list.read().view();
    let rows = match view {
        ListView::Loading => return rsx! {
            div {
                class: "booking-list-loading",
                style: "display: flex; justify-content: center; align-items: center; height: 60vh;",
                div {
                    class: "spinner",
                    style: "
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        border-top: 2px solid {colors.accent};
                        border-bottom: 2px solid {colors.accent};
                        border-left: 2px solid transparent;
                        border-right: 2px solid transparent;
                        animation: bookdesk-spin 1s linear infinite;
                    ",
                }
            }
        },
        ListView::Error(message) => return rsx! {
            div {
                class: "booking-list-error",
                style: "padding: 24px;",
                div {
                    "role": "alert",
                    style: "
                        padding: 12px 16px;
                        border: 1px solid {colors.error};
                        border-radius: 8px;
                        background: {colors.error_bg};
                        color: {colors.error};
                    ",
                    "{message}"
                }
            }
        },
        ListView::Empty => Vec::new(),
        ListView::Rows(rows) => rows,
    };

    let (search_query, selected_status, status_options, controls_disabled) = {
        let current = list.read();
        (
            current.search_query().to_string(),
            current.status_filter().to_string(),
            current.status_options(),
            current.filters_disabled(),
        )
    };

    rsx! {
        div {
            class: "booking-list",
            style: "display: flex; flex-direction: column; gap: 16px;",

            div {
                class: "booking-filters",
                style: "display: flex; flex-wrap: wrap; gap: 16px;",

                SearchBar {
                    value: search_query,
                    disabled: controls_disabled,
                    on_change: move |query: String| list.write().set_search_query(query),
                }

                div {
                    style: "display: flex; gap: 8px;",
                    StatusFilterSelect {
                        selected: selected_status,
                        options: status_options,
                        disabled: controls_disabled,
                        on_change: move |value: String| {
                            list.write().set_status_filter(StatusFilter::parse(&value));
                        },
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: controls_disabled,
                        "More Filters"
                    }
                }
            }

            div {
                class: "booking-rows",
                style: "display: flex; flex-direction: column; gap: 16px;",

                if rows.is_empty() {
                    Card {
                        CardContent {
                            style: "padding: 24px; text-align: center;",
                            p {
                                style: "margin: 0; color: {colors.text_secondary};",
                                "No bookings found."
                            }
                        }
                    }
                } else {
                    for booking in rows {
                        {
                            let is_selected = selected_id.as_deref() == Some(booking.id.as_str());
                            let key = booking.id.clone();
                            let row = booking.clone();

                            rsx! {
                                BookingCard {
                                    key: "{key}",
                                    booking,
                                    is_selected,
                                    onclick: move |_| on_select_booking.call(row.clone()),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
