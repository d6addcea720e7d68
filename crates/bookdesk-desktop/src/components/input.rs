//! Text input primitive with an optional leading glyph

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Input(
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    prefix: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let left_padding = if prefix.is_some() { "36px" } else { "12px" };

    rsx! {
        div {
            style: "position: relative; width: 100%;",

            if let Some(prefix) = prefix {
                span {
                    style: "
                        position: absolute;
                        left: 12px;
                        top: 50%;
                        transform: translateY(-50%);
                        color: {colors.text_muted};
                        pointer-events: none;
                    ",
                    "{prefix}"
                }
            }

            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
                style: "
                    width: 100%;
                    padding: 8px 12px 8px {left_padding};
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}
