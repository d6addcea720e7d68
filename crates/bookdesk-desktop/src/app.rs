//! Main application component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::{resolve_theme, ThemeMode};
use crate::views::Home;

/// Spinner keyframes; everything else is styled inline.
const GLOBAL_CSS: &str = "
@keyframes bookdesk-spin {
    to { transform: rotate(360deg); }
}
* { box-sizing: border-box; }
body { margin: 0; }
";

/// Root application component
#[component]
pub fn App() -> Element {
    let theme_mode = use_context::<ThemeMode>();
    let selected_booking = use_signal(|| None);
    let theme = use_signal(|| resolve_theme(theme_mode));

    use_context_provider(|| AppState {
        selected_booking,
        theme,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = current_theme.as_attr();

    rsx! {
        style { {GLOBAL_CSS} }

        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
