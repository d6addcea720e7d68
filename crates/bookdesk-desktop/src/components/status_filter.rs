//! Status selector component

use dioxus::prelude::*;

use crate::state::AppState;

/// Dropdown with "All Status" followed by one option per status value.
#[component]
pub fn StatusFilterSelect(
    selected: String,
    options: Vec<String>,
    #[props(default)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        select {
            class: "status-select",
            value: "{selected}",
            disabled,
            onchange: move |evt| on_change.call(evt.value()),
            style: "
                padding: 8px 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            option {
                value: "all",
                selected: selected == "all",
                "All Status"
            }
            for status in options {
                {
                    let label = status_label(&status);
                    let is_selected = status.eq_ignore_ascii_case(&selected);

                    rsx! {
                        option {
                            key: "{status}",
                            value: "{status}",
                            selected: is_selected,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Capitalized label for a status option value
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_capitalizes_first_letter() {
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label("in progress"), "In progress");
        assert_eq!(status_label(""), "");
    }
}
