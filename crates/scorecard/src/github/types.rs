//! GitHub API and scraped data types.

use serde::Deserialize;

/// User record from `/users/{handle}` - fields we need from the response.
#[derive(Debug, Clone, Deserialize)]
pub struct GhUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u32>,
    #[serde(default)]
    pub followers: Option<u32>,
    #[serde(default)]
    pub following: Option<u32>,
}

/// Repository record from `/users/{handle}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct GhRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub html_url: String,
}

/// One day parsed off the public contribution-graph markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionDay {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
}

// GraphQL pinned-items response shape.

#[derive(Debug, Deserialize)]
pub struct GhGraphQlResponse {
    #[serde(default)]
    pub data: Option<GhPinnedData>,
}

#[derive(Debug, Deserialize)]
pub struct GhPinnedData {
    pub user: Option<GhPinnedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhPinnedUser {
    pub pinned_items: GhPinnedItems,
}

#[derive(Debug, Deserialize)]
pub struct GhPinnedItems {
    #[serde(default)]
    pub nodes: Vec<GhPinnedNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhPinnedNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazer_count: u32,
    #[serde(default)]
    pub fork_count: u32,
    #[serde(default)]
    pub primary_language: Option<GhLanguage>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GhLanguage {
    pub name: String,
}

/// Raw GitHub stats: REST profile + repo list, the scraped contribution
/// calendar, and (token-only) pinned repositories.
#[derive(Debug, Clone, Default)]
pub struct GitHubStats {
    pub username: String,
    pub user: Option<GhUser>,
    pub repos: Vec<GhRepo>,
    pub calendar: Vec<ContributionDay>,
    pub pinned: Vec<GhPinnedNode>,
}
