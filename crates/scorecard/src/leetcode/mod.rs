//! LeetCode adapter.
//!
//! A single GraphQL endpoint serves every operation. The global-stats query
//! is mandatory (a missing user fails the scrape); profile, languages,
//! contest, topics, recent submissions and acceptance are optional queries
//! issued concurrently, each absorbed to `None` on failure so one flaky
//! operation never takes down the rest.
//!
//! # Module Structure
//!
//! - [`types`] - GraphQL response types
//! - [`client`] - The adapter and its query set
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::LeetCodeAdapter;
pub use convert::{acceptance_rate, rating_changes, to_platform_stats};
pub use types::{LcAcceptance, LcSubmitStats, LeetCodeStats};
