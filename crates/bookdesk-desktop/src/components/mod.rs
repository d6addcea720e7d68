//! UI Components
//!
//! The booking list and the display primitives it is composed of.

mod booking_card;
mod booking_detail;
mod booking_list;
mod button;
mod card;
mod input;
mod search_bar;
mod status_filter;

pub use booking_card::BookingCard;
pub use booking_detail::BookingDetail;
pub use booking_list::BookingList;
pub use input::Input;
pub use search_bar::SearchBar;
pub use status_filter::StatusFilterSelect;
