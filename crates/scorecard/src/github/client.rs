//! GitHub adapter: token-aware REST, contribution-graph HTML scraping, and
//! optional GraphQL for pinned repositories.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::json;

use super::convert::to_platform_stats;
use super::types::{
    ContributionDay, GhGraphQlResponse, GhPinnedNode, GhRepo, GhUser, GitHubStats,
};
use crate::fetch::{best_effort, get_json, get_text, post_json};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{PlatformAdapter, PlatformId, Result, ScrapeError, ScrapeOutcome};

const API_HOST: &str = "https://api.github.com";
const WEB_HOST: &str = "https://github.com";
const GRAPHQL_URL: &str = "https://api.github.com/graphql";

const PINNED_QUERY: &str = "query pinned($login: String!) { user(login: $login) { pinnedItems(first: 6, types: REPOSITORY) { nodes { ... on Repository { name description stargazerCount forkCount primaryLanguage { name } url } } } } }";

/// GitHub scrape adapter.
///
/// A configured token raises REST rate limits and unlocks the pinned-repo
/// GraphQL query; without one the pinned list is empty and no GraphQL call
/// is attempted. The contribution graph is always scraped unauthenticated
/// from the public profile markup.
#[derive(Clone)]
pub struct GitHubAdapter {
    transport: Arc<dyn HttpTransport>,
    token: Option<String>,
}

impl GitHubAdapter {
    pub fn new(token: Option<String>) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()), token)
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>, token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { transport, token }
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        match &self.token {
            Some(token) => vec![("Authorization".to_string(), format!("Bearer {token}"))],
            None => Vec::new(),
        }
    }

    async fn fetch_user(&self, handle: &str) -> Result<GhUser> {
        let headers = self.auth_headers();
        let borrowed: Vec<(&str, &str)> = headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        get_json(
            self.transport.as_ref(),
            &format!("{API_HOST}/users/{handle}"),
            &borrowed,
        )
        .await
    }

    async fn fetch_repos(&self, handle: &str) -> Result<Vec<GhRepo>> {
        let headers = self.auth_headers();
        let borrowed: Vec<(&str, &str)> = headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        get_json(
            self.transport.as_ref(),
            &format!("{API_HOST}/users/{handle}/repos?per_page=100&sort=updated"),
            &borrowed,
        )
        .await
    }

    /// Scrape the public contribution calendar.
    ///
    /// The rendered markup carries one element per day with `data-date` and
    /// `data-count` attributes; days come back sorted by date.
    async fn fetch_calendar(&self, handle: &str) -> Result<Vec<ContributionDay>> {
        let html = get_text(
            self.transport.as_ref(),
            &format!("{WEB_HOST}/users/{handle}/contributions"),
            &[],
        )
        .await?;
        Ok(parse_contribution_calendar(&html))
    }

    /// Pinned repositories via GraphQL; only callable with a token.
    async fn fetch_pinned(&self, handle: &str, token: &str) -> Result<Vec<GhPinnedNode>> {
        let body = json!({
            "query": PINNED_QUERY,
            "variables": { "login": handle },
        });
        let auth = format!("Bearer {token}");
        let response: GhGraphQlResponse = post_json(
            self.transport.as_ref(),
            GRAPHQL_URL,
            &body,
            &[("Authorization", auth.as_str())],
        )
        .await?;
        let data = response
            .data
            .ok_or_else(|| ScrapeError::parse("GraphQL response without data"))?;
        Ok(data
            .user
            .map(|user| user.pinned_items.nodes)
            .unwrap_or_default())
    }

    async fn fetch_raw(&self, handle: &str) -> GitHubStats {
        let (user, repos, calendar) = tokio::join!(
            best_effort("github profile", None, async {
                self.fetch_user(handle).await.map(Some)
            }),
            best_effort("github repos", Vec::new(), self.fetch_repos(handle)),
            best_effort("github contributions", Vec::new(), self.fetch_calendar(handle)),
        );

        // No token: empty pinned list without attempting the call.
        let pinned = match &self.token {
            Some(token) => {
                best_effort("github pinned", Vec::new(), self.fetch_pinned(handle, token)).await
            }
            None => Vec::new(),
        };

        GitHubStats {
            username: handle.to_string(),
            user,
            repos,
            calendar,
            pinned,
        }
    }
}

/// Parse `data-date`/`data-count` attributes off the calendar markup.
fn parse_contribution_calendar(html: &str) -> Vec<ContributionDay> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("[data-date]").expect("selector should parse");

    let mut days: Vec<ContributionDay> = document
        .select(&selector)
        .filter_map(|element| {
            let date = element.value().attr("data-date")?.to_string();
            let count = element
                .value()
                .attr("data-count")
                .and_then(|c| c.parse().ok())
                .unwrap_or(0);
            Some(ContributionDay { date, count })
        })
        .collect();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

#[async_trait]
impl PlatformAdapter for GitHubAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::GitHub
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        let handle = handle.trim();
        let raw = self.fetch_raw(handle).await;

        let stats = to_platform_stats(&raw);
        if raw.user.is_none() {
            Ok(ScrapeOutcome::Degraded(stats))
        } else {
            Ok(ScrapeOutcome::Complete(stats))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, MockTransport};

    fn adapter(transport: &MockTransport, token: Option<&str>) -> GitHubAdapter {
        GitHubAdapter::with_transport(Arc::new(transport.clone()), token.map(str::to_string))
    }

    fn user_url(handle: &str) -> String {
        format!("{API_HOST}/users/{handle}")
    }

    fn repos_url(handle: &str) -> String {
        format!("{API_HOST}/users/{handle}/repos?per_page=100&sort=updated")
    }

    fn contributions_url(handle: &str) -> String {
        format!("{WEB_HOST}/users/{handle}/contributions")
    }

    const USER: &str = r#"{
        "login":"octocat","name":"The Octocat","avatar_url":"https://a/o.png",
        "location":"San Francisco","public_repos":8,"followers":4000,"following":9
    }"#;

    fn calendar_html(days: &[(&str, u32)]) -> String {
        let cells: String = days
            .iter()
            .map(|(date, count)| {
                format!(r#"<td class="ContributionCalendar-day" data-date="{date}" data-count="{count}"></td>"#)
            })
            .collect();
        format!("<html><body><table>{cells}</table></body></html>")
    }

    #[tokio::test]
    async fn without_token_no_graphql_request_is_issued() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Get, user_url("octocat"), USER);
        transport.push_ok(HttpMethod::Get, repos_url("octocat"), "[]");
        transport.push_ok(
            HttpMethod::Get,
            contributions_url("octocat"),
            &calendar_html(&[("2024-01-01", 2)]),
        );

        let outcome = adapter(&transport, None)
            .scrape("octocat")
            .await
            .expect("scrape");
        assert!(!outcome.is_degraded());

        let requests = transport.requests();
        assert!(requests.iter().all(|r| r.url != GRAPHQL_URL));
        assert_eq!(outcome.stats().pinned_repos.len(), 0);
    }

    #[tokio::test]
    async fn with_token_pinned_repos_come_from_graphql() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Get, user_url("octocat"), USER);
        transport.push_ok(HttpMethod::Get, repos_url("octocat"), "[]");
        transport.push_ok(
            HttpMethod::Get,
            contributions_url("octocat"),
            &calendar_html(&[]),
        );
        transport.push_ok(
            HttpMethod::Post,
            GRAPHQL_URL,
            r#"{"data":{"user":{"pinnedItems":{"nodes":[
                {"name":"Spoon-Knife","description":"Fork me","stargazerCount":12000,
                 "forkCount":140000,"primaryLanguage":{"name":"HTML"},
                 "url":"https://github.com/octocat/Spoon-Knife"}
            ]}}}}"#,
        );

        let stats = adapter(&transport, Some("gho_token"))
            .scrape("octocat")
            .await
            .expect("scrape")
            .into_stats();

        assert_eq!(stats.pinned_repos.len(), 1);
        assert_eq!(stats.pinned_repos[0].name, "Spoon-Knife");
        assert_eq!(stats.pinned_repos[0].language.as_deref(), Some("HTML"));

        // REST requests carried the token; the GraphQL call exists.
        let requests = transport.requests();
        let rest = requests.iter().find(|r| r.url == user_url("octocat")).unwrap();
        assert!(
            rest.headers
                .iter()
                .any(|(k, v)| k == "Authorization" && v == "Bearer gho_token")
        );
        assert!(requests.iter().any(|r| r.url == GRAPHQL_URL));
    }

    #[tokio::test]
    async fn failed_profile_fetch_degrades_to_skeleton() {
        let transport = MockTransport::new();
        transport.push_status(HttpMethod::Get, user_url("ghost"), 404);
        transport.push_status(HttpMethod::Get, repos_url("ghost"), 404);
        transport.push_status(HttpMethod::Get, contributions_url("ghost"), 404);

        let outcome = adapter(&transport, None)
            .scrape("ghost")
            .await
            .expect("never fails hard");
        assert!(outcome.is_degraded());

        let stats = outcome.into_stats();
        assert_eq!(stats.username, "ghost");
        assert_eq!(stats.profile_url, "https://github.com/ghost");
        assert!(stats.total_contributions.is_none());
    }

    #[tokio::test]
    async fn calendar_is_scraped_and_summarized() {
        let transport = MockTransport::new();
        transport.push_ok(HttpMethod::Get, user_url("octocat"), USER);
        transport.push_ok(HttpMethod::Get, repos_url("octocat"), "[]");
        transport.push_ok(
            HttpMethod::Get,
            contributions_url("octocat"),
            &calendar_html(&[
                ("2024-01-01", 1),
                ("2024-01-02", 2),
                ("2024-01-03", 0),
                ("2024-01-04", 3),
                ("2024-01-05", 3),
            ]),
        );

        let stats = adapter(&transport, None)
            .scrape("octocat")
            .await
            .expect("scrape")
            .into_stats();

        assert_eq!(stats.total_contributions, Some(9));
        assert_eq!(stats.longest_streak, Some(2));
        assert_eq!(stats.current_streak, Some(2));
        assert_eq!(stats.monthly_contributions.get("2024-01"), Some(&9));
        assert_eq!(stats.contribution_calendar.len(), 5);
    }

    #[test]
    fn calendar_parser_sorts_by_date_and_defaults_missing_counts() {
        let html = r#"
            <td data-date="2024-02-02" data-count="4"></td>
            <td data-date="2024-02-01"></td>
        "#;
        let days = parse_contribution_calendar(html);
        assert_eq!(
            days,
            vec![
                ContributionDay {
                    date: "2024-02-01".to_string(),
                    count: 0
                },
                ContributionDay {
                    date: "2024-02-02".to_string(),
                    count: 4
                },
            ]
        );
    }
}
