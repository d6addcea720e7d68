//! Status filter model

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Option value that disables status filtering.
const ALL: &str = "all";

/// Status values offered by the selector before any data is loaded.
pub const DEFAULT_STATUS_OPTIONS: [&str; 4] = ["pending", "approved", "rejected", "completed"];

/// Selected status in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every status
    #[default]
    All,
    /// Keep records whose status equals this value, ignoring case
    Status(String),
}

impl StatusFilter {
    /// Build a filter from a selector value.
    ///
    /// `"all"` is matched ignoring case, like every other status comparison,
    /// so `--status ALL` on the command line also disables the filter. The
    /// selector itself only ever emits lowercase `"all"`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Status(value.to_string())
        }
    }

    /// The value this filter is selected by in a status selector.
    #[must_use]
    pub fn as_option_value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Status(status) => status,
        }
    }

    /// Whether a record status passes this filter.
    #[must_use]
    pub fn accepts(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Status(selected) => selected.to_lowercase() == status.to_lowercase(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option_value())
    }
}
