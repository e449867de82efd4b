//! GitHub adapter.
//!
//! Mixes three surfaces: the REST API for profile and repositories
//! (authenticated when a token is configured), an unauthenticated HTML
//! scrape of the public contribution graph (`data-date`/`data-count`
//! attributes), and an optional GraphQL query for pinned repositories that
//! is only attempted when a token exists. A failed profile fetch degrades
//! to a skeleton instead of failing the scrape.
//!
//! # Module Structure
//!
//! - [`types`] - REST/GraphQL payloads and the scraped calendar day
//! - [`client`] - The adapter and its three fetch surfaces
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::GitHubAdapter;
pub use convert::{contribution_summary, to_platform_stats};
pub use types::{ContributionDay, GhRepo, GhUser, GitHubStats};
