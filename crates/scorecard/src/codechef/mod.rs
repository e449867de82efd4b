//! CodeChef adapter.
//!
//! Pure HTML scraping: every profile field is extracted via an ordered
//! pattern list so old and new site markup are both tolerated. The rating
//! history lives in an embedded `var all_rating = [...]` script literal and
//! is validated entry-by-entry; the recent-activity tab is fetched
//! best-effort, independent of the primary page.
//!
//! # Module Structure
//!
//! - [`types`] - Scraped data and embedded-array entry types
//! - [`client`] - The adapter and its pattern lists
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::CodeChefAdapter;
pub use convert::to_platform_stats;
pub use types::{CcRatingEntry, CodeChefStats};
