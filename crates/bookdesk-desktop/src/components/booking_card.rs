//! Booking row component

use dioxus::prelude::*;

use bookdesk_core::Booking;

use super::card::{Card, CardContent};
use crate::state::AppState;
use crate::theme::ColorPalette;

/// Colour family of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Waiting,
    Negative,
    Neutral,
}

impl StatusTone {
    #[must_use]
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "approved" | "confirmed" | "completed" => Self::Positive,
            "pending" => Self::Waiting,
            "rejected" | "cancelled" | "canceled" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// (background, foreground)
    pub const fn colors(self, palette: &ColorPalette) -> (&'static str, &'static str) {
        match self {
            Self::Positive => (palette.success_bg, palette.success),
            Self::Waiting => (palette.warning_bg, palette.warning),
            Self::Negative => (palette.error_bg, palette.error),
            Self::Neutral => (palette.bg_tertiary, palette.text_secondary),
        }
    }
}

/// A single booking row rendered in the booking list.
#[component]
pub fn BookingCard(
    booking: Booking,
    #[props(default)] is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let (badge_bg, badge_fg) = StatusTone::for_status(&booking.status).colors(colors);

    let border = if is_selected {
        colors.accent
    } else {
        "transparent"
    };
    let vehicle = booking.vehicle.kind.as_ref().map_or_else(
        || booking.vehicle.number.clone(),
        |kind| format!("{} · {kind}", booking.vehicle.number),
    );
    let route = booking.route();
    let dates = booking.date_range();

    rsx! {
        div {
            class: if is_selected { "booking-item selected" } else { "booking-item" },
            style: "
                cursor: pointer;
                border-radius: 12px;
                outline: 2px solid {border};
            ",
            onclick: move |evt| onclick.call(evt),

            Card {
                CardContent {
                    style: "display: flex; align-items: center; gap: 16px;",

                    div {
                        style: "flex: 1; min-width: 0;",

                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                            span {
                                class: "booking-number",
                                style: "font-weight: 600;",
                                "{booking.booking_number}"
                            }
                            span {
                                class: "status-badge",
                                style: "
                                    padding: 2px 8px;
                                    border-radius: 999px;
                                    font-size: 12px;
                                    background: {badge_bg};
                                    color: {badge_fg};
                                ",
                                "{booking.status}"
                            }
                        }

                        div {
                            style: "color: {colors.text_primary};",
                            "{booking.customer.name}"
                            if let Some(phone) = booking.customer.phone.clone() {
                                span {
                                    style: "color: {colors.text_secondary}; margin-left: 8px;",
                                    "{phone}"
                                }
                            }
                        }

                        div {
                            style: "font-size: 12px; color: {colors.text_secondary}; margin-top: 4px;",
                            "{vehicle}"
                        }

                        if route.is_some() || dates.is_some() {
                            div {
                                style: "font-size: 12px; color: {colors.text_muted}; margin-top: 4px; display: flex; gap: 12px;",
                                if let Some(route) = route {
                                    span { "{route}" }
                                }
                                if let Some(dates) = dates {
                                    span { "{dates}" }
                                }
                            }
                        }
                    }

                    span {
                        style: "color: {colors.text_muted}; font-size: 20px;",
                        "›"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LIGHT_PALETTE;

    #[test]
    fn status_tone_ignores_case() {
        assert_eq!(StatusTone::for_status("Approved"), StatusTone::Positive);
        assert_eq!(StatusTone::for_status("PENDING"), StatusTone::Waiting);
        assert_eq!(StatusTone::for_status("rejected"), StatusTone::Negative);
        assert_eq!(StatusTone::for_status("on-hold"), StatusTone::Neutral);
    }

    #[test]
    fn status_tone_maps_to_palette() {
        assert_eq!(
            StatusTone::Negative.colors(&LIGHT_PALETTE),
            (LIGHT_PALETTE.error_bg, LIGHT_PALETTE.error)
        );
    }
}
