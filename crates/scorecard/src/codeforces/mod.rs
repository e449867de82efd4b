//! Codeforces adapter.
//!
//! Three sequential calls against the public REST API (`user.info`,
//! `user.rating`, `user.status`), mapped into the canonical schema. A
//! non-"OK" envelope anywhere in the chain fails the whole scrape; there is
//! no partial result for this platform.
//!
//! # Module Structure
//!
//! - [`types`] - API envelope and payload types
//! - [`client`] - The adapter and its endpoint calls
//! - [`convert`] - Pure normalization into [`crate::platform::PlatformStats`]

mod client;
mod convert;
mod types;

pub use client::CodeforcesAdapter;
pub use convert::{difficulty_bucket, problem_key, to_platform_stats};
pub use types::{CfProblem, CfRatingChange, CfSubmission, CfUser, CodeforcesStats};
