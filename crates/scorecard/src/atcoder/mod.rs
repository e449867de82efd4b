//! AtCoder adapter.
//!
//! Three fetches: profile HTML (rating, rank, title), the contest-history
//! CSV export (parsed positionally by column index), and the submissions
//! table (nested row/cell regexes, capped at 20 rows). The adapter never
//! fails hard - even a dead profile page degrades to an all-default
//! skeleton instead of an error.
//!
//! # Module Structure
//!
//! - [`types`] - Scraped row and raw-stats types
//! - [`client`] - The adapter, pattern lists and CSV/table parsers
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::AtCoderAdapter;
pub use convert::to_platform_stats;
pub use types::{AcContestRow, AcSubmissionRow, AtCoderStats};
