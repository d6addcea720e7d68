//! Application state management
//!
//! Global state accessible via Dioxus context providers. The booking list
//! keeps its own fetch/filter state; only the selection crosses components.

use dioxus::prelude::*;

use bookdesk_core::Booking;

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Booking picked from the list, shown in the detail pane
    pub selected_booking: Signal<Option<Booking>>,
    /// Resolved theme (light/dark based on configuration and system preference)
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Id of the selected booking, for row highlighting
    #[must_use]
    pub fn selected_booking_id(&self) -> Option<String> {
        self.selected_booking
            .read()
            .as_ref()
            .map(|booking| booking.id.clone())
    }
}
