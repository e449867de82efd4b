//! LeetCode adapter: one mandatory GraphQL query plus optional ones issued
//! concurrently, each independently absorbed on failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::convert::to_platform_stats;
use super::types::{
    GqlResponse, LcAcceptance, LcAcceptanceData, LcContestData, LcLanguagesData, LcProfileData,
    LcRecentData, LcStatsData, LcStatsUser, LcTopicsData, LeetCodeStats,
};
use crate::fetch::{best_effort, post_json};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{PlatformAdapter, PlatformId, Result, ScrapeError, ScrapeOutcome};

/// Single GraphQL endpoint; operations differ by query body.
const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

const QUERY_STATS: &str = "query userStats($username: String!) { matchedUser(username: $username) { username submitStatsGlobal { acSubmissionNum { difficulty count } } } }";

const QUERY_PROFILE: &str = "query userProfile($username: String!) { matchedUser(username: $username) { profile { realName userAvatar countryName ranking reputation } } }";

const QUERY_LANGUAGES: &str = "query userLanguages($username: String!) { matchedUser(username: $username) { languageProblemCount { languageName problemsSolved } } }";

const QUERY_CONTEST: &str = "query userContest($username: String!) { userContestRanking(username: $username) { attendedContestsCount rating globalRanking topPercentage } userContestRankingHistory(username: $username) { attended rating ranking contest { title startTime } } }";

const QUERY_TOPICS: &str = "query userTopics($username: String!) { matchedUser(username: $username) { tagProblemCounts { advanced { tagName problemsSolved } intermediate { tagName problemsSolved } fundamental { tagName problemsSolved } } } }";

const QUERY_RECENT: &str = "query recentAc($username: String!) { recentAcSubmissionList(username: $username, limit: 15) { title timestamp } }";

const QUERY_ACCEPTANCE: &str = "query userAcceptance($username: String!) { matchedUser(username: $username) { submitStatsGlobal { acSubmissionNum { difficulty count submissions } totalSubmissionNum { difficulty count submissions } } } }";

/// LeetCode scrape adapter.
#[derive(Clone)]
pub struct LeetCodeAdapter {
    transport: Arc<dyn HttpTransport>,
}

impl Default for LeetCodeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LeetCodeAdapter {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    async fn query<T: DeserializeOwned>(&self, query: &str, username: &str) -> Result<T> {
        let body = json!({
            "query": query,
            "variables": { "username": username },
        });
        let response: GqlResponse<T> =
            post_json(self.transport.as_ref(), GRAPHQL_URL, &body, &[]).await?;
        response
            .data
            .ok_or_else(|| ScrapeError::parse("GraphQL response without data"))
    }

    /// The mandatory global-stats query. A null `matchedUser` means the
    /// profile does not exist: hard failure.
    async fn fetch_stats(&self, username: &str) -> Result<LcStatsUser> {
        let data: LcStatsData = self.query(QUERY_STATS, username).await?;
        data.matched_user
            .ok_or_else(|| ScrapeError::not_found(format!("leetcode user {username}")))
    }

    async fn fetch_acceptance(&self, username: &str) -> Result<Option<LcAcceptance>> {
        let data: LcAcceptanceData = self.query(QUERY_ACCEPTANCE, username).await?;
        let user = data
            .matched_user
            .ok_or_else(|| ScrapeError::parse("acceptance query without matchedUser"))?;

        let total_of = |rows: &[super::types::LcDifficultyCount]| {
            rows.iter()
                .find(|r| r.difficulty == "All")
                .and_then(|r| r.submissions)
        };
        let accepted = total_of(&user.submit_stats_global.ac_submission_num);
        let submitted = total_of(&user.submit_stats_global.total_submission_num);
        Ok(match (accepted, submitted) {
            (Some(accepted), Some(submitted)) => Some(LcAcceptance {
                accepted,
                submitted,
            }),
            _ => None,
        })
    }

    /// Fetch raw stats: the mandatory query first, then the optional ones
    /// concurrently. Each optional query is individually best-effort, so
    /// one failing cannot abort the others.
    async fn fetch_raw(&self, username: &str) -> Result<LeetCodeStats> {
        let stats = self.fetch_stats(username).await?;

        let (profile, languages, contest, topics, recent, acceptance) = tokio::join!(
            best_effort("leetcode profile", None, async {
                let data: LcProfileData = self.query(QUERY_PROFILE, username).await?;
                Ok(data.matched_user.map(|u| u.profile))
            }),
            best_effort("leetcode languages", None, async {
                let data: LcLanguagesData = self.query(QUERY_LANGUAGES, username).await?;
                Ok(data.matched_user.map(|u| u.language_problem_count))
            }),
            best_effort("leetcode contest", None, async {
                let data: LcContestData = self.query(QUERY_CONTEST, username).await?;
                Ok(Some(data))
            }),
            best_effort("leetcode topics", None, async {
                let data: LcTopicsData = self.query(QUERY_TOPICS, username).await?;
                Ok(data.matched_user.map(|u| u.tag_problem_counts))
            }),
            best_effort("leetcode submissions", None, async {
                let data: LcRecentData = self.query(QUERY_RECENT, username).await?;
                Ok(Some(data.recent_ac_submission_list))
            }),
            best_effort("leetcode acceptance", None, async {
                self.fetch_acceptance(username).await
            }),
        );

        Ok(LeetCodeStats {
            username: stats.username,
            solved: stats.submit_stats_global,
            profile,
            languages,
            contest,
            topics,
            recent,
            acceptance,
        })
    }
}

#[async_trait]
impl PlatformAdapter for LeetCodeAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::LeetCode
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        if handle.trim().is_empty() {
            return Err(ScrapeError::InvalidHandle(handle.to_string()));
        }

        let raw = self.fetch_raw(handle.trim()).await?;
        Ok(ScrapeOutcome::Complete(to_platform_stats(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, MockTransport};

    fn adapter(transport: &MockTransport) -> LeetCodeAdapter {
        LeetCodeAdapter::with_transport(Arc::new(transport.clone()))
    }

    const STATS_OK: &str = r#"{"data":{"matchedUser":{
        "username":"neal",
        "submitStatsGlobal":{"acSubmissionNum":[
            {"difficulty":"All","count":900},
            {"difficulty":"Easy","count":300},
            {"difficulty":"Medium","count":400},
            {"difficulty":"Hard","count":200}
        ]}
    }}}"#;

    #[tokio::test]
    async fn empty_handle_is_rejected_before_any_request() {
        let transport = MockTransport::new();
        let err = adapter(&transport)
            .scrape("")
            .await
            .expect_err("should reject");
        assert!(matches!(err, ScrapeError::InvalidHandle(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn null_matched_user_is_a_hard_failure() {
        let transport = MockTransport::new();
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"matchedUser":null}}"#,
        );

        let err = adapter(&transport)
            .scrape("ghost")
            .await
            .expect_err("should fail hard");
        assert!(matches!(err, ScrapeError::NotFound { .. }));
        // The optional queries never run after a failed mandatory query.
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn optional_query_failures_degrade_to_none_without_aborting() {
        let transport = MockTransport::new();
        // Only the mandatory stats query has a response; all six optional
        // queries hit "no mock response" and are individually absorbed.
        transport.push_ok(HttpMethod::Post, GRAPHQL_URL, STATS_OK);

        let outcome = adapter(&transport)
            .scrape("neal")
            .await
            .expect("mandatory data is enough");
        let stats = outcome.into_stats();

        assert_eq!(stats.username, "neal");
        assert_eq!(stats.problems_solved, 900);
        assert_eq!(stats.easy_solved, Some(300));
        assert_eq!(stats.medium_solved, Some(400));
        assert_eq!(stats.hard_solved, Some(200));
        // Optional sections defaulted, not missing keys.
        assert!(stats.rating.is_none());
        assert!(stats.languages.is_empty());
        assert!(stats.recent_submissions.is_empty());
        assert!(stats.acceptance_rate.is_none());
        // 1 mandatory + 6 optional requests were attempted.
        assert_eq!(transport.requests().len(), 7);
    }

    #[tokio::test]
    async fn full_scrape_fills_optional_sections() {
        let transport = MockTransport::new();
        // MockTransport replays per-URL responses FIFO; the adapter issues
        // the mandatory query first, then the optional ones in declaration
        // order (profile, languages, contest, topics, recent, acceptance).
        transport.push_ok(HttpMethod::Post, GRAPHQL_URL, STATS_OK);
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"matchedUser":{"profile":{
                "realName":"Neal Wu","userAvatar":"https://a/neal.png",
                "countryName":"United States","ranking":44,"reputation":2000
            }}}}"#,
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"matchedUser":{"languageProblemCount":[
                {"languageName":"C++","problemsSolved":850},
                {"languageName":"Python3","problemsSolved":50}
            ]}}}"#,
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{
                "userContestRanking":{"attendedContestsCount":3,"rating":2205.5,"globalRanking":120,"topPercentage":0.5},
                "userContestRankingHistory":[
                    {"attended":true,"rating":1200.0,"ranking":500,"contest":{"title":"Weekly 1","startTime":1700000000}},
                    {"attended":false,"rating":1200.0,"ranking":0,"contest":{"title":"Weekly 2","startTime":1700600000}},
                    {"attended":true,"rating":1350.0,"ranking":400,"contest":{"title":"Weekly 3","startTime":1701200000}},
                    {"attended":true,"rating":1300.0,"ranking":450,"contest":{"title":"Weekly 4","startTime":1701800000}}
                ]
            }}"#,
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"matchedUser":{"tagProblemCounts":{
                "advanced":[{"tagName":"Dynamic Programming","problemsSolved":120}],
                "intermediate":[{"tagName":"Hash Table","problemsSolved":95}],
                "fundamental":[{"tagName":"Array","problemsSolved":220}]
            }}}}"#,
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"recentAcSubmissionList":[
                {"title":"Two Sum","timestamp":"1701900000"}
            ]}}"#,
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"matchedUser":{"submitStatsGlobal":{
                "acSubmissionNum":[{"difficulty":"All","count":900,"submissions":1234}],
                "totalSubmissionNum":[{"difficulty":"All","count":980,"submissions":2000}]
            }}}}"#,
        );

        let stats = adapter(&transport)
            .scrape("neal")
            .await
            .expect("scrape")
            .into_stats();

        assert_eq!(stats.display_name.as_deref(), Some("Neal Wu"));
        assert_eq!(stats.global_rank, Some(44));
        assert_eq!(stats.languages.get("C++"), Some(&850));
        assert_eq!(stats.rating, Some(2206));
        assert_eq!(stats.contest_rating, Some(2206));
        assert_eq!(stats.contests_attended, Some(3));
        // Rating deltas over attended contests only: [1200, 1350, 1300].
        let changes: Vec<Option<i64>> =
            stats.contests.iter().map(|c| c.rating_change).collect();
        assert_eq!(changes, vec![Some(0), Some(150), Some(-50)]);
        assert_eq!(stats.tags.get("Array"), Some(&220));
        assert_eq!(stats.recent_submissions.len(), 1);
        assert_eq!(stats.recent_submissions[0].title, "Two Sum");
        // 1234 / 2000 => 61.7%
        assert_eq!(stats.acceptance_rate, Some(61.7));
    }
}
