//! Booking list view state.
//!
//! Holds everything the list view renders from: the query, the selected
//! status, the fetched records, the loading flag, and the error message.
//! The state lives for one mount of the view; only a remount resets it.

use crate::client::FetchError;
use crate::models::{Booking, StatusFilter};
use crate::search::{filter_bookings, status_options};

/// What the list view should render, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Fetch in flight
    Loading,
    /// Fetch failed; the list is suppressed
    Error(String),
    /// Ready, but nothing passes the current filters
    Empty,
    /// Ready, one row per booking
    Rows(Vec<Booking>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingListState {
    search_query: String,
    status_filter: StatusFilter,
    bookings: Vec<Booking>,
    is_loading: bool,
    error: String,
}

impl Default for BookingListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingListState {
    /// Fresh state for a new mount; starts out loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            status_filter: StatusFilter::All,
            bookings: Vec::new(),
            is_loading: true,
            error: String::new(),
        }
    }

    /// Marks a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error.clear();
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `false` without touching anything when the fetch was cancelled.
    pub fn finish_fetch(&mut self, result: Result<Vec<Booking>, FetchError>) -> bool {
        match result {
            Err(FetchError::Cancelled) => return false,
            Ok(bookings) => {
                self.bookings = bookings;
                self.error.clear();
            }
            Err(error) => {
                self.error = error.user_message();
            }
        }
        self.is_loading = false;
        true
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub const fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Search and status controls are inert while a fetch is in flight.
    pub const fn filters_disabled(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Bookings passing the current query and status filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<Booking> {
        filter_bookings(&self.bookings, &self.search_query, &self.status_filter)
    }

    /// Options for the status selector, excluding "all".
    #[must_use]
    pub fn status_options(&self) -> Vec<String> {
        status_options(&self.bookings)
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        if self.is_loading {
            return ListView::Loading;
        }
        if !self.error.is_empty() {
            return ListView::Error(self.error.clone());
        }
        let rows = self.filtered();
        if rows.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FALLBACK_ERROR_MESSAGE;
    use crate::models::{Customer, Vehicle};
    use pretty_assertions::assert_eq;

    fn booking(number: &str, status: &str) -> Booking {
        Booking {
            id: number.to_string(),
            booking_number: number.to_string(),
            customer: Customer {
                name: "Raj Kumar".to_string(),
                phone: None,
                email: None,
            },
            vehicle: Vehicle {
                number: "DL 01 AB 1234".to_string(),
                kind: None,
                driver: None,
            },
            status: status.to_string(),
            trip: None,
            payment: None,
        }
    }

    fn ready_state() -> BookingListState {
        let mut state = BookingListState::new();
        state.finish_fetch(Ok(vec![
            booking("BK-2024-001", "pending"),
            booking("BK-2024-002", "confirmed"),
        ]));
        state
    }

    #[test]
    fn new_state_is_loading() {
        let state = BookingListState::new();
        assert_eq!(state.view(), ListView::Loading);
        assert_eq!(state.search_query(), "");
        assert_eq!(state.status_filter(), &StatusFilter::All);
        assert!(state.bookings().is_empty());
    }

    #[test]
    fn filter_controls_follow_fetch_progress() {
        let mut state = BookingListState::new();
        assert!(state.filters_disabled());

        assert!(state.finish_fetch(Ok(Vec::new())));
        assert!(!state.filters_disabled());

        state.begin_fetch();
        assert!(state.filters_disabled());

        assert!(state.finish_fetch(Err(FetchError::Transport(
            "connection reset".to_string()
        ))));
        assert!(!state.filters_disabled());
    }

    #[test]
    fn successful_fetch_renders_rows() {
        let state = ready_state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), "");
        match state.view() {
            ListView::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn filters_narrow_rows_without_refetching() {
        let mut state = ready_state();

        state.set_search_query("2024-001");
        assert_eq!(state.view(), ListView::Rows(vec![booking("BK-2024-001", "pending")]));

        state.set_search_query("");
        state.set_status_filter(StatusFilter::parse("confirmed"));
        assert_eq!(
            state.view(),
            ListView::Rows(vec![booking("BK-2024-002", "confirmed")])
        );

        state.set_status_filter(StatusFilter::parse("rejected"));
        assert_eq!(state.view(), ListView::Empty);
        assert!(!state.is_loading());
    }

    #[test]
    fn rejected_fetch_shows_service_message() {
        let mut state = BookingListState::new();
        state.finish_fetch(Err(FetchError::Rejected {
            status: 503,
            message: Some("Service unavailable".to_string()),
        }));

        assert!(!state.is_loading());
        assert_eq!(state.error(), "Service unavailable");
        assert_eq!(
            state.view(),
            ListView::Error("Service unavailable".to_string())
        );
    }

    #[test]
    fn failed_fetch_without_body_uses_fallback_and_keeps_records() {
        let mut state = ready_state();
        state.begin_fetch();
        assert_eq!(state.view(), ListView::Loading);

        assert!(state.finish_fetch(Err(FetchError::Transport(
            "connection reset".to_string()
        ))));
        assert_eq!(state.error(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(state.bookings().len(), 2);
        assert_eq!(
            state.view(),
            ListView::Error(FALLBACK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = BookingListState::new();
        state.finish_fetch(Err(FetchError::Transport("down".to_string())));
        state.begin_fetch();
        assert_eq!(state.error(), "");
        state.finish_fetch(Ok(vec![booking("BK-1", "pending")]));
        assert_eq!(state.error(), "");
        assert_eq!(state.view(), ListView::Rows(vec![booking("BK-1", "pending")]));
    }

    #[test]
    fn cancelled_fetch_leaves_state_untouched() {
        let mut state = BookingListState::new();
        let before = state.clone();
        assert!(!state.finish_fetch(Err(FetchError::Cancelled)));
        assert_eq!(state, before);
    }

    #[test]
    fn status_options_include_loaded_statuses() {
        let state = ready_state();
        assert!(state.status_options().contains(&"confirmed".to_string()));
        assert_eq!(state.status_options()[0], "pending");
    }
}
