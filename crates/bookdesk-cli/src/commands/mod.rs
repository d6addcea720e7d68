pub mod common;
pub mod completions;
pub mod list;
pub mod show;
pub mod statuses;
