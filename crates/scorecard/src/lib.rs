//! Scorecard - a multi-platform competitive-programming profile scraper.
//!
//! This library fetches heterogeneous profile data from six independent
//! sources (REST APIs, GraphQL, raw HTML, CSV exports) and reduces them to
//! one canonical [`PlatformStats`] schema for a downstream scoring engine,
//! under partial-failure isolation: one dead platform never takes down the
//! batch, it just goes missing from the output.
//!
//! # Example
//!
//! ```ignore
//! use scorecard::{CpHandles, ProfileScraper};
//!
//! let scraper = ProfileScraper::new(std::env::var("SCORECARD_GITHUB_TOKEN").ok());
//! let handles = CpHandles {
//!     leetcode: Some("neal_wu".into()),
//!     codeforces: Some("tourist".into()),
//!     ..CpHandles::default()
//! };
//!
//! let stats = scraper.scrape_all_platforms_for_user(&handles).await;
//! for entry in &stats {
//!     println!("{}: {} solved", entry.platform, entry.problems_solved);
//! }
//! ```

pub mod aggregate;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod platform;

pub mod atcoder;
pub mod codechef;
pub mod codeforces;
pub mod github;
pub mod hackerrank;
pub mod leetcode;

pub use aggregate::ProfileScraper;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use platform::{
    CpHandles, PlatformAdapter, PlatformId, PlatformStats, ScrapeError, ScrapeOutcome,
};
