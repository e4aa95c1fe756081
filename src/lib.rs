//! # Royale Tools
//!
//! A Clash Royale clan management toolkit.
//!
//! ## Architecture
//!
//! - **models**: API payloads and derived report types
//! - **calculate**: card progression and war statistics engine (pure)
//! - **client**: authenticated Clash Royale API client
//! - **config**: configuration loading and persistence
//! - **report**: text rendering of reports

pub mod calculate;
pub mod client;
pub mod config;
pub mod models;
pub mod report;

pub use models::*;

/// Normalize a player or clan tag for use in an API URL: add the leading
/// `#` if it is missing, then percent-encode it as `%23`.
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let bare = tag.strip_prefix('#').unwrap_or(tag);
    format!("%23{}", bare)
}
