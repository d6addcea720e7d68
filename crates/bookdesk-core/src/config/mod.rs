//! Service configuration for the bookings API.
//!
//! The base URL is always passed explicitly to [`crate::BookingsClient`].
//! Applications resolve it once at startup from their own sources (CLI flags,
//! environment, build-time values) with [`resolve_base_url`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Base URL used when no other source provides one.
pub const DEFAULT_BASE_URL: &str = "https://abuses-admin-backend.onrender.com";

/// Path of the bookings collection, appended to the base URL.
pub const BOOKINGS_PATH: &str = "/api/bookings";

/// Environment variable consulted by the applications for the base URL.
pub const BASE_URL_ENV: &str = "BOOKDESK_API_BASE_URL";

/// Connection settings for the remote bookings service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    base_url: String,
    #[serde(default)]
    timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Builds a config for an explicit base URL.
    ///
    /// The URL must use `http://` or `https://`; trailing slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            timeout: None,
        })
    }

    /// Sets an overall request timeout. `None` disables it.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL of the bookings collection.
    pub fn bookings_url(&self) -> String {
        format!("{}{}", self.base_url, BOOKINGS_PATH)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Picks the first non-empty candidate, falling back to [`DEFAULT_BASE_URL`].
///
/// Candidates are ordered by precedence, highest first.
pub fn resolve_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .find_map(normalize_text_option)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidConfig(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidConfig(format!(
            "API base URL must include http:// or https:// (got '{base}')"
        )));
    }
    Ok(base)
}
