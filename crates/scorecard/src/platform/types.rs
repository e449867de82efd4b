use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// The platforms this pipeline knows how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    LeetCode,
    Codeforces,
    CodeChef,
    AtCoder,
    HackerRank,
    GitHub,
}

impl PlatformId {
    /// Fan-out order for aggregation. Output lists follow this order, not
    /// completion order.
    pub const ALL: [PlatformId; 6] = [
        PlatformId::LeetCode,
        PlatformId::CodeChef,
        PlatformId::Codeforces,
        PlatformId::AtCoder,
        PlatformId::HackerRank,
        PlatformId::GitHub,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::LeetCode => "leetcode",
            PlatformId::Codeforces => "codeforces",
            PlatformId::CodeChef => "codechef",
            PlatformId::AtCoder => "atcoder",
            PlatformId::HackerRank => "hackerrank",
            PlatformId::GitHub => "github",
        }
    }

    /// Public profile URL for a handle on this platform.
    #[must_use]
    pub fn profile_url(self, handle: &str) -> String {
        match self {
            PlatformId::LeetCode => format!("https://leetcode.com/u/{handle}/"),
            PlatformId::Codeforces => format!("https://codeforces.com/profile/{handle}"),
            PlatformId::CodeChef => format!("https://www.codechef.com/users/{handle}"),
            PlatformId::AtCoder => format!("https://atcoder.jp/users/{handle}"),
            PlatformId::HackerRank => format!("https://www.hackerrank.com/profile/{handle}"),
            PlatformId::GitHub => format!("https://github.com/{handle}"),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform handles supplied by the caller.
///
/// Immutable input to the pipeline; an empty or whitespace-only handle
/// counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpHandles {
    pub leetcode: Option<String>,
    pub codechef: Option<String>,
    pub codeforces: Option<String>,
    pub atcoder: Option<String>,
    pub hackerrank: Option<String>,
    pub github: Option<String>,
}

impl CpHandles {
    /// Get the handle for a platform, if present and non-empty.
    #[must_use]
    pub fn handle_for(&self, platform: PlatformId) -> Option<&str> {
        let raw = match platform {
            PlatformId::LeetCode => self.leetcode.as_deref(),
            PlatformId::CodeChef => self.codechef.as_deref(),
            PlatformId::Codeforces => self.codeforces.as_deref(),
            PlatformId::AtCoder => self.atcoder.as_deref(),
            PlatformId::HackerRank => self.hackerrank.as_deref(),
            PlatformId::GitHub => self.github.as_deref(),
        };
        raw.map(str::trim).filter(|h| !h.is_empty())
    }
}

/// One rated contest in a user's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestEntry {
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub rank: Option<u32>,
    pub old_rating: Option<i64>,
    pub new_rating: Option<i64>,
    pub rating_change: Option<i64>,
}

/// One point on a rating-over-time graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    /// Contest name or date label, depending on what the source exposes.
    pub label: String,
    pub rating: i64,
}

/// A recently submitted solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub title: String,
    pub verdict: Option<String>,
    pub language: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A badge earned on a platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub name: String,
    pub stars: Option<u32>,
}

/// A pinned repository (GitHub only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedRepo {
    pub name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub url: String,
}

/// One day on a contribution heatmap. The date stays an ISO `YYYY-MM-DD`
/// string; month bucketing groups on its first 7 characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDay {
    pub date: String,
    pub count: u32,
}

/// Canonical, platform-agnostic profile statistics.
///
/// A superset record: every platform fills the fields it has and leaves the
/// rest at safe defaults. Several values are intentionally duplicated under
/// synonymous keys (`rating`/`contestRating`, `problemsSolved`/
/// `problemsSolvedTotal`, `contests`/`contestHistory`) so the scoring engine
/// reads a stable vocabulary regardless of which platform produced the data.
///
/// Invariants: `username` and `profile_url` are always non-empty; numeric
/// fields are `0` or `None`, never NaN; collections are empty, never omitted
/// from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub platform: PlatformId,
    pub username: String,
    pub profile_url: String,

    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub country: Option<String>,

    pub rating: Option<i64>,
    /// Alias of `rating`.
    pub contest_rating: Option<i64>,
    pub max_rating: Option<i64>,
    /// Textual rank or title ("expert", "3 Dan", "5★", ...).
    pub rank: Option<String>,
    pub global_rank: Option<u64>,
    pub country_rank: Option<u64>,
    pub stars: Option<String>,
    pub division: Option<String>,

    pub problems_solved: u32,
    /// Alias of `problems_solved`.
    pub problems_solved_total: u32,
    pub easy_solved: Option<u32>,
    pub medium_solved: Option<u32>,
    pub hard_solved: Option<u32>,
    /// Set when `problems_solved` was derived from a score heuristic rather
    /// than an explicit upstream count (HackerRank).
    pub solved_is_estimated: bool,
    /// Two-decimal percentage.
    pub acceptance_rate: Option<f64>,

    pub contests_attended: Option<u32>,
    pub contests: Vec<ContestEntry>,
    /// Alias of `contests`.
    pub contest_history: Vec<ContestEntry>,
    pub rating_graph: Vec<RatingPoint>,

    pub recent_submissions: Vec<RecentSubmission>,
    pub badges: Vec<Badge>,
    pub languages: BTreeMap<String, u32>,
    pub tags: BTreeMap<String, u32>,
    pub verdicts: BTreeMap<String, u32>,
    pub difficulty: BTreeMap<String, u32>,

    pub total_contributions: Option<u64>,
    pub current_streak: Option<u32>,
    pub longest_streak: Option<u32>,
    pub monthly_contributions: BTreeMap<String, u32>,
    pub contribution_calendar: Vec<HeatmapDay>,
    pub public_repos: Option<u32>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
    pub total_stars: Option<u32>,
    pub pinned_repos: Vec<PinnedRepo>,
}

impl PlatformStats {
    /// All-default record for a platform + handle.
    ///
    /// This is both the starting point for every normalizer and the
    /// degraded result for adapters that absorb a failed primary fetch.
    #[must_use]
    pub fn skeleton(platform: PlatformId, handle: &str) -> Self {
        Self {
            platform,
            username: handle.to_string(),
            profile_url: platform.profile_url(handle),
            display_name: None,
            avatar_url: None,
            country: None,
            rating: None,
            contest_rating: None,
            max_rating: None,
            rank: None,
            global_rank: None,
            country_rank: None,
            stars: None,
            division: None,
            problems_solved: 0,
            problems_solved_total: 0,
            easy_solved: None,
            medium_solved: None,
            hard_solved: None,
            solved_is_estimated: false,
            acceptance_rate: None,
            contests_attended: None,
            contests: Vec::new(),
            contest_history: Vec::new(),
            rating_graph: Vec::new(),
            recent_submissions: Vec::new(),
            badges: Vec::new(),
            languages: BTreeMap::new(),
            tags: BTreeMap::new(),
            verdicts: BTreeMap::new(),
            difficulty: BTreeMap::new(),
            total_contributions: None,
            current_streak: None,
            longest_streak: None,
            monthly_contributions: BTreeMap::new(),
            contribution_calendar: Vec::new(),
            public_repos: None,
            followers: None,
            following: None,
            total_stars: None,
            pinned_repos: Vec::new(),
        }
    }

    /// Write the alias keys from their primary fields. Every normalizer
    /// calls this last so the duplicated vocabulary never drifts.
    pub fn fill_aliases(&mut self) {
        self.contest_rating = self.rating;
        self.problems_solved_total = self.problems_solved;
        self.contest_history = self.contests.clone();
    }
}

/// Explicit adapter result.
///
/// `Complete` means the primary source answered; `Degraded` means a soft
/// failure was absorbed and the stats are a skeleton or partially defaulted.
/// Hard failures are `Err(ScrapeError)`. The aggregation layer treats all
/// three uniformly, so no caller needs per-platform knowledge of which
/// adapters fail hard and which degrade.
#[derive(Debug, Clone)]
pub enum ScrapeOutcome {
    Complete(PlatformStats),
    Degraded(PlatformStats),
}

impl ScrapeOutcome {
    #[must_use]
    pub fn into_stats(self) -> PlatformStats {
        match self {
            ScrapeOutcome::Complete(stats) | ScrapeOutcome::Degraded(stats) => stats,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &PlatformStats {
        match self {
            ScrapeOutcome::Complete(stats) | ScrapeOutcome::Degraded(stats) => stats,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScrapeOutcome::Degraded(_))
    }
}

/// Trait for platform scrape adapters.
///
/// Implementations are self-contained per invocation: no shared mutable
/// state, no cross-call memory, only the injected transport and static
/// configuration. `scrape` fetches the platform's raw stats and runs the
/// platform's pure normalizer over them.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// The platform this adapter scrapes.
    fn platform(&self) -> PlatformId;

    /// Fetch and normalize stats for a handle.
    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome>;
}
