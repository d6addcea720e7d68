//! Desktop configuration: build-time defaults overridden by the runtime environment.

use bookdesk_core::config::{resolve_base_url, BASE_URL_ENV};
use bookdesk_core::util::normalize_text_option;
use bookdesk_core::ServiceConfig;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Environment variable selecting `light`, `dark`, or `system`.
pub const THEME_ENV: &str = "BOOKDESK_THEME";

/// Values embedded into the binary by `build.rs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns an empty config so the
/// hosted service default applies.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

impl DesktopBootstrapConfig {
    /// Service config from the runtime override, then the embedded value, then the default.
    ///
    /// An unusable URL is logged and replaced by the default service.
    pub fn service_config(&self, runtime_base_url: Option<String>) -> ServiceConfig {
        let base_url = resolve_base_url([runtime_base_url, self.api_base_url.clone()]);
        ServiceConfig::new(&base_url).unwrap_or_else(|error| {
            tracing::error!("Ignoring bookings base URL '{}': {}", base_url, error);
            ServiceConfig::default()
        })
    }

    /// Theme mode from the runtime override, then the embedded value.
    pub fn theme_mode(&self, runtime_theme: Option<String>) -> ThemeMode {
        normalize_text_option(runtime_theme)
            .or_else(|| normalize_text_option(self.theme.clone()))
            .map_or(ThemeMode::System, |raw| {
                raw.parse().unwrap_or_else(|()| {
                    tracing::warn!("Unknown theme '{}', following the system", raw);
                    ThemeMode::System
                })
            })
    }
}

/// Reads the runtime overrides from the process environment.
pub fn runtime_overrides() -> (Option<String>, Option<String>) {
    (
        std::env::var(BASE_URL_ENV).ok(),
        std::env::var(THEME_ENV).ok(),
    )
}
