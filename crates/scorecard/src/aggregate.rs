//! Aggregation orchestrator: fan-out over all configured platforms,
//! fan-in in fixed platform order.
//!
//! This is a stateless one-shot pipeline: no retries, no cancellation, no
//! cross-call memory. Every per-platform job absorbs its own failure into
//! `None`, so the join can never be aborted by a single platform; the only
//! observable failure signal to callers is a platform missing from the
//! output list.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::atcoder::AtCoderAdapter;
use crate::codechef::CodeChefAdapter;
use crate::codeforces::CodeforcesAdapter;
use crate::github::GitHubAdapter;
use crate::hackerrank::HackerRankAdapter;
use crate::http::HttpTransport;
use crate::leetcode::LeetCodeAdapter;
use crate::platform::{
    CpHandles, PlatformAdapter, PlatformId, PlatformStats, short_error_message,
};

/// The full adapter set behind one entry point.
///
/// Construction wires each adapter with its own production transport (only
/// HackerRank carries an explicit timeout); `with_transport` swaps in a
/// single shared transport, which is how tests drive the whole pipeline
/// through the in-memory mock.
#[derive(Clone)]
pub struct ProfileScraper {
    leetcode: LeetCodeAdapter,
    codechef: CodeChefAdapter,
    codeforces: CodeforcesAdapter,
    atcoder: AtCoderAdapter,
    hackerrank: HackerRankAdapter,
    github: GitHubAdapter,
}

impl ProfileScraper {
    /// Production scraper. `github_token` unlocks the GitHub GraphQL
    /// pinned-repo query and authenticated REST.
    #[must_use]
    pub fn new(github_token: Option<String>) -> Self {
        Self {
            leetcode: LeetCodeAdapter::new(),
            codechef: CodeChefAdapter::new(),
            codeforces: CodeforcesAdapter::new(),
            atcoder: AtCoderAdapter::new(),
            hackerrank: HackerRankAdapter::new(),
            github: GitHubAdapter::new(github_token),
        }
    }

    /// Build every adapter over one injected transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>, github_token: Option<String>) -> Self {
        Self {
            leetcode: LeetCodeAdapter::with_transport(Arc::clone(&transport)),
            codechef: CodeChefAdapter::with_transport(Arc::clone(&transport)),
            codeforces: CodeforcesAdapter::with_transport(Arc::clone(&transport)),
            atcoder: AtCoderAdapter::with_transport(Arc::clone(&transport)),
            hackerrank: HackerRankAdapter::with_transport(Arc::clone(&transport)),
            github: GitHubAdapter::with_transport(transport, github_token),
        }
    }

    fn adapter(&self, platform: PlatformId) -> &dyn PlatformAdapter {
        match platform {
            PlatformId::LeetCode => &self.leetcode,
            PlatformId::CodeChef => &self.codechef,
            PlatformId::Codeforces => &self.codeforces,
            PlatformId::AtCoder => &self.atcoder,
            PlatformId::HackerRank => &self.hackerrank,
            PlatformId::GitHub => &self.github,
        }
    }

    /// Scrape one platform. Never errors: any failure below this boundary
    /// is logged and absorbed into `None`.
    pub async fn scrape_platform_for_user(
        &self,
        platform: PlatformId,
        handle: &str,
    ) -> Option<PlatformStats> {
        match self.adapter(platform).scrape(handle).await {
            Ok(outcome) => {
                if outcome.is_degraded() {
                    tracing::debug!(%platform, handle, "scrape degraded to defaults");
                }
                Some(outcome.into_stats())
            }
            Err(e) => {
                tracing::warn!(
                    %platform,
                    handle,
                    error = short_error_message(&e),
                    "platform scrape failed"
                );
                None
            }
        }
    }

    /// Scrape every platform with a non-empty handle, concurrently.
    ///
    /// Platforms without a handle get no job at all (and no log line).
    /// Results come back in [`PlatformId::ALL`] order regardless of
    /// completion order, with failed platforms filtered out.
    pub async fn scrape_all_platforms_for_user(&self, handles: &CpHandles) -> Vec<PlatformStats> {
        let jobs: Vec<(usize, PlatformId, String)> = PlatformId::ALL
            .iter()
            .filter_map(|&platform| {
                handles
                    .handle_for(platform)
                    .map(|handle| (platform, handle.to_string()))
            })
            .enumerate()
            .map(|(slot, (platform, handle))| (slot, platform, handle))
            .collect();

        let mut slots: Vec<Option<PlatformStats>> = (0..jobs.len()).map(|_| None).collect();
        let mut join_set: JoinSet<(usize, Option<PlatformStats>)> = JoinSet::new();

        for (slot, platform, handle) in jobs {
            let scraper = self.clone();
            join_set.spawn(async move {
                (
                    slot,
                    scraper.scrape_platform_for_user(platform, &handle).await,
                )
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((slot, result)) => slots[slot] = result,
                Err(e) => {
                    tracing::warn!(error = %e, "scrape task panicked");
                }
            }
        }

        slots.into_iter().flatten().collect()
    }
}
