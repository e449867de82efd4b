//! Codeforces API data types.

use serde::Deserialize;

/// Standard Codeforces API envelope.
///
/// Every endpoint wraps its payload in `{"status": "OK", "result": ...}`;
/// failures carry `"status": "FAILED"` and a `comment`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CfEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

/// User record from `user.info` - fields we need from the response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfUser {
    pub handle: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub max_rating: Option<i64>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub max_rank: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub contribution: Option<i64>,
    #[serde(default)]
    pub friend_of_count: Option<u32>,
}

/// One entry from `user.rating` (a rated contest).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfRatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub rank: u32,
    pub rating_update_time_seconds: i64,
    pub old_rating: i64,
    pub new_rating: i64,
}

/// Problem reference inside a submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfProblem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub index: Option<String>,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One entry from `user.status` (a submission).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfSubmission {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub problem: CfProblem,
    #[serde(default)]
    pub verdict: Option<String>,
    pub programming_language: String,
}

/// Raw Codeforces stats: the three endpoint payloads, created fresh per
/// scrape and discarded after mapping.
#[derive(Debug, Clone)]
pub struct CodeforcesStats {
    pub user: CfUser,
    pub ratings: Vec<CfRatingChange>,
    pub submissions: Vec<CfSubmission>,
}
