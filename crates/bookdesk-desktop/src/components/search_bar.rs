//! Search bar component

use dioxus::prelude::*;

use super::Input;

/// Search field for filtering bookings by number, customer, or vehicle
#[component]
pub fn SearchBar(
    value: String,
    #[props(default)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-bar",
            style: "flex: 1;",

            Input {
                value,
                disabled,
                placeholder: "Search bookings...",
                prefix: "⌕".to_string(),
                oninput: move |query: String| on_change.call(query),
            }
        }
    }
}
