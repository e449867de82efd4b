//! CodeChef scraped data types.

use serde::Deserialize;

/// One entry of the embedded `var all_rating = [...]` array on the profile
/// page. CodeChef serializes its numbers as strings; parsing to integers
/// happens during normalization.
///
/// Entries that fail to deserialize against this schema are dropped
/// individually; one malformed entry never discards the whole array.
#[derive(Debug, Clone, Deserialize)]
pub struct CcRatingEntry {
    pub code: String,
    pub name: String,
    pub rating: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Raw CodeChef stats scraped from profile HTML.
#[derive(Debug, Clone, Default)]
pub struct CodeChefStats {
    pub username: String,
    pub display_name: Option<String>,
    pub country: Option<String>,
    pub rating: Option<i64>,
    pub highest_rating: Option<i64>,
    pub stars: Option<String>,
    pub division: Option<String>,
    pub global_rank: Option<u64>,
    pub country_rank: Option<u64>,
    pub solved: Option<u32>,
    pub rating_history: Vec<CcRatingEntry>,
    /// Problem codes from the recent-activity tab, newest first.
    pub recent_problems: Vec<String>,
}
