//! Home view - booking list with the selected booking beside it

use dioxus::prelude::*;

use bookdesk_core::{Booking, BookingsClient};

use crate::components::{BookingDetail, BookingList};
use crate::state::AppState;

/// Home view component - the main dashboard screen
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let client = use_context::<BookingsClient>();
    let colors = (state.theme)().palette();
    let selected = (state.selected_booking)();
    let selected_id = state.selected_booking_id();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            header {
                style: "
                    padding: 16px 24px;
                    border-bottom: 1px solid {colors.border};
                    background: {colors.bg_primary};
                    font-size: 18px;
                    font-weight: 600;
                ",
                "Bookings"
            }

            div {
                class: "content-area",
                style: "flex: 1; display: flex; overflow: hidden;",

                div {
                    style: "flex: 1; overflow-y: auto; padding: 24px;",
                    BookingList {
                        client,
                        selected_id,
                        on_select_booking: move |booking: Booking| {
                            tracing::info!("Selected booking {}", booking.booking_number);
                            state.selected_booking.set(Some(booking));
                        },
                    }
                }

                if let Some(booking) = selected {
                    BookingDetail {
                        booking,
                        on_close: move |_| state.selected_booking.set(None),
                    }
                }
            }
        }
    }
}
