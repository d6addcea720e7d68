//! Card container primitive

use dioxus::prelude::*;

use crate::state::AppState;

/// Bordered surface; `style` is appended to the defaults.
#[component]
pub fn Card(#[props(default)] style: String, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                border: 1px solid {colors.border};
                border-radius: 12px;
                background: {colors.bg_primary};
                box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                {style}
            ",
            {children}
        }
    }
}

#[component]
pub fn CardContent(#[props(default)] style: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card-content",
            style: "padding: 16px; {style}",
            {children}
        }
    }
}
