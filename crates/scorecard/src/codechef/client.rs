//! CodeChef adapter: HTML scraping with ordered per-field pattern lists.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use super::convert::to_platform_stats;
use super::types::{CcRatingEntry, CodeChefStats};
use crate::extract::{Extractor, embedded_json_array};
use crate::fetch::{best_effort, get_text};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{PlatformAdapter, PlatformId, Result, ScrapeError, ScrapeOutcome};

const HOST: &str = "https://www.codechef.com";

/// Maximum problems surfaced from the recent-activity tab.
const RECENT_LIMIT: usize = 10;

/// Per-field pattern lists. Each field carries patterns for both the
/// current markup and older revisions; first match wins.
struct CcPatterns {
    rating: Extractor,
    highest_rating: Extractor,
    stars: Extractor,
    division: Extractor,
    global_rank: Extractor,
    country_rank: Extractor,
    country: Extractor,
    display_name: Extractor,
    solved: Extractor,
    problem_link: Regex,
}

impl CcPatterns {
    fn new() -> Self {
        Self {
            rating: Extractor::new(&[
                r#"class="rating-number">\s*(\d+)"#,
                r"Rating[^0-9]{0,40}?(\d{3,4})",
            ]),
            highest_rating: Extractor::new(&[
                r"Highest Rating\s*(\d+)",
                r"\(Highest Rating\s*(\d+)\)",
            ]),
            stars: Extractor::new(&[r#"class="rating"[^>]*>\s*(\d★)"#, r"(\d★)"]),
            division: Extractor::new(&[r"\(Div\s*(\d)\)", r"Division\s*(\d)"]),
            global_rank: Extractor::new(&[
                r#"global-rank">\s*(\d+)"#,
                r"Global Rank[^0-9]{0,40}?(\d+)",
            ]),
            country_rank: Extractor::new(&[
                r#"country-rank">\s*(\d+)"#,
                r"Country Rank[^0-9]{0,40}?(\d+)",
            ]),
            country: Extractor::new(&[r#"class="user-country-name">([^<]+)"#]),
            display_name: Extractor::new(&[r#"<h1[^>]*class="h2-style"[^>]*>([^<]+)"#]),
            solved: Extractor::new(&[
                r"Total Problems Solved:\s*(\d+)",
                r"Fully Solved[^(]{0,20}\((\d+)\)",
            ]),
            problem_link: Regex::new(r#"href="/problems/([A-Z0-9_]+)""#)
                .expect("problem link pattern should compile"),
        }
    }
}

/// CodeChef scrape adapter.
///
/// The profile page is the sole primary source: if it cannot be fetched the
/// scrape fails hard. The embedded rating array and the recent-activity tab
/// degrade independently.
#[derive(Clone)]
pub struct CodeChefAdapter {
    transport: Arc<dyn HttpTransport>,
    patterns: Arc<CcPatterns>,
}

impl Default for CodeChefAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeChefAdapter {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            patterns: Arc::new(CcPatterns::new()),
        }
    }

    /// Extract the scalar profile fields from the page.
    fn parse_profile(&self, handle: &str, html: &str) -> CodeChefStats {
        let p = &self.patterns;
        CodeChefStats {
            username: handle.to_string(),
            display_name: p
                .display_name
                .capture(html)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            country: p.country.capture(html).map(|s| s.trim().to_string()),
            rating: p.rating.capture_as(html),
            highest_rating: p.highest_rating.capture_as(html),
            stars: p.stars.capture(html).map(str::to_string),
            division: p.division.capture(html).map(|d| format!("Div {d}")),
            global_rank: p.global_rank.capture_as(html),
            country_rank: p.country_rank.capture_as(html),
            solved: p.solved.capture_as(html),
            rating_history: Vec::new(),
            recent_problems: Vec::new(),
        }
    }

    /// Recover the rating history from the embedded `all_rating` array.
    ///
    /// Malformed individual entries are dropped; isolation or parse failure
    /// of the whole array degrades the section to empty.
    fn parse_rating_history(html: &str) -> Vec<CcRatingEntry> {
        let Some(entries) = embedded_json_array(html, "all_rating") else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<CcRatingEntry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!(error = %e, "dropping malformed rating entry");
                    None
                }
            })
            .collect()
    }

    async fn fetch_recent_problems(&self, handle: &str) -> Result<Vec<String>> {
        let url = format!("{HOST}/recent/user?user_handle={handle}");
        let html = get_text(self.transport.as_ref(), &url, &[]).await?;
        Ok(self
            .patterns
            .problem_link
            .captures_iter(&html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .take(RECENT_LIMIT)
            .collect())
    }
}

#[async_trait]
impl PlatformAdapter for CodeChefAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::CodeChef
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        if handle.trim().is_empty() {
            return Err(ScrapeError::InvalidHandle(handle.to_string()));
        }
        let handle = handle.trim();

        // Primary fetch: hard failure when the profile page is unreachable.
        let url = format!("{HOST}/users/{handle}");
        let html = get_text(self.transport.as_ref(), &url, &[]).await?;

        let mut raw = self.parse_profile(handle, &html);
        raw.rating_history = Self::parse_rating_history(&html);

        // Independent of the primary fetch's success path from here on.
        raw.recent_problems = best_effort(
            "codechef submissions",
            Vec::new(),
            self.fetch_recent_problems(handle),
        )
        .await;

        Ok(ScrapeOutcome::Complete(to_platform_stats(&raw)))
    }
}
