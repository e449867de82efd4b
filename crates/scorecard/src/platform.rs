//! Platform-agnostic types for the scraping pipeline.
//!
//! This module defines the canonical [`PlatformStats`] schema the scoring
//! engine consumes, the [`PlatformAdapter`] trait every platform implements,
//! and the shared [`ScrapeError`] taxonomy.
//!
//! # Example
//!
//! ```ignore
//! use scorecard::platform::{PlatformAdapter, ScrapeOutcome};
//!
//! async fn solved<A: PlatformAdapter>(adapter: &A, handle: &str) -> u32 {
//!     match adapter.scrape(handle).await {
//!         Ok(outcome) => outcome.stats().problems_solved,
//!         Err(_) => 0,
//!     }
//! }
//! ```

mod errors;
mod types;

pub use errors::{Result, ScrapeError, short_error_message};
pub use types::{
    Badge, ContestEntry, CpHandles, HeatmapDay, PinnedRepo, PlatformAdapter, PlatformId,
    PlatformStats, RatingPoint, RecentSubmission, ScrapeOutcome,
};
