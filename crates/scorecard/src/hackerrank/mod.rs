//! HackerRank adapter.
//!
//! Five REST endpoints under `/rest/hackers/<handle>/` fetched in a
//! settle-all fan-out: each endpoint is best-effort, a failed one leaves
//! its fields at default, and the join itself can never fail. Domain solved
//! counts without an explicit number are estimated as `round(score / 10)`
//! and flagged as such - the estimate is inherited upstream behavior, not a
//! real count. The only explicit request timeout in the pipeline (12 s)
//! lives here.
//!
//! # Module Structure
//!
//! - [`types`] - REST envelope and payload types
//! - [`client`] - The adapter and endpoint fan-out
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::HackerRankAdapter;
pub use convert::{domain_solved, to_platform_stats};
pub use types::{HackerRankStats, HrBadge, HrDomainScore, HrProfile};
