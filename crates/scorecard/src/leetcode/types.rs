//! LeetCode GraphQL data types.

use serde::Deserialize;

/// GraphQL response wrapper. Errors surface as a missing/partial `data`
/// object; we never need the `errors` array itself.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// One row of a per-difficulty submission counter.
#[derive(Debug, Clone, Deserialize)]
pub struct LcDifficultyCount {
    pub difficulty: String,
    pub count: u32,
    #[serde(default)]
    pub submissions: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcSubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<LcDifficultyCount>,
    #[serde(default)]
    pub total_submission_num: Vec<LcDifficultyCount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcStatsData {
    pub matched_user: Option<LcStatsUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcStatsUser {
    pub username: String,
    pub submit_stats_global: LcSubmitStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcAcceptanceData {
    pub matched_user: Option<LcAcceptanceUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcAcceptanceUser {
    pub submit_stats_global: LcSubmitStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcProfileData {
    pub matched_user: Option<LcProfileUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcProfileUser {
    pub profile: LcProfile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcProfile {
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub ranking: Option<u64>,
    #[serde(default)]
    pub reputation: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcLanguagesData {
    pub matched_user: Option<LcLanguagesUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcLanguagesUser {
    #[serde(default)]
    pub language_problem_count: Vec<LcLanguageCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcLanguageCount {
    pub language_name: String,
    pub problems_solved: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcContestData {
    #[serde(default)]
    pub user_contest_ranking: Option<LcContestRanking>,
    #[serde(default)]
    pub user_contest_ranking_history: Vec<LcContestHistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcContestRanking {
    #[serde(default)]
    pub attended_contests_count: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub global_ranking: Option<u64>,
    #[serde(default)]
    pub top_percentage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcContestHistoryEntry {
    pub attended: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ranking: Option<u32>,
    pub contest: LcContestRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcContestRef {
    pub title: String,
    #[serde(default)]
    pub start_time: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcTopicsData {
    pub matched_user: Option<LcTopicsUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcTopicsUser {
    pub tag_problem_counts: LcTagProblemCounts,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LcTagProblemCounts {
    #[serde(default)]
    pub advanced: Vec<LcTagCount>,
    #[serde(default)]
    pub intermediate: Vec<LcTagCount>,
    #[serde(default)]
    pub fundamental: Vec<LcTagCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcTagCount {
    pub tag_name: String,
    pub problems_solved: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcRecentData {
    #[serde(default)]
    pub recent_ac_submission_list: Vec<LcRecentSubmission>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcRecentSubmission {
    pub title: String,
    /// Epoch seconds, serialized by LeetCode as a string.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Accepted vs submitted totals, reduced from the "All" difficulty rows.
#[derive(Debug, Clone, Copy)]
pub struct LcAcceptance {
    pub accepted: u64,
    pub submitted: u64,
}

/// Raw LeetCode stats: the mandatory global counters plus whatever optional
/// sections survived their individual fetches.
#[derive(Debug)]
pub struct LeetCodeStats {
    pub username: String,
    pub solved: LcSubmitStats,
    pub profile: Option<LcProfile>,
    pub languages: Option<Vec<LcLanguageCount>>,
    pub contest: Option<LcContestData>,
    pub topics: Option<LcTagProblemCounts>,
    pub recent: Option<Vec<LcRecentSubmission>>,
    pub acceptance: Option<LcAcceptance>,
}
