//! AtCoder adapter: profile HTML, CSV history export, submissions HTML.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use super::convert::to_platform_stats;
use super::types::{AcContestRow, AcSubmissionRow, AtCoderStats};
use crate::extract::{Extractor, strip_tags};
use crate::fetch::{best_effort, get_text};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{
    PlatformAdapter, PlatformId, PlatformStats, Result, ScrapeOutcome, short_error_message,
};

const HOST: &str = "https://atcoder.jp";

/// Maximum rows parsed from the submissions table.
const SUBMISSION_ROW_LIMIT: usize = 20;

/// CSV export column layout, read positionally.
const COL_DATE: usize = 0;
const COL_CONTEST: usize = 1;
const COL_RANK: usize = 2;
const COL_PERFORMANCE: usize = 3;
const COL_NEW_RATING: usize = 4;
const COL_DIFF: usize = 5;

struct AcPatterns {
    rating: Extractor,
    highest_rating: Extractor,
    rank: Extractor,
    /// Grandmaster-style named titles.
    title_named: Extractor,
    /// Dan/Kyu titles ("2 Dan", "8 Kyu").
    title_dan_kyu: Extractor,
    table_row: Regex,
    table_cell: Regex,
}

impl AcPatterns {
    fn new() -> Self {
        Self {
            rating: Extractor::new(&[
                r"Rating</th>\s*<td[^>]*>\s*<span[^>]*>(\d+)</span>",
                r"Rating</th>\s*<td[^>]*>(\d+)",
            ]),
            highest_rating: Extractor::new(&[
                r"Highest Rating</th>\s*<td[^>]*>\s*<span[^>]*>(\d+)</span>",
                r"Highest Rating</th>\s*<td[^>]*>(\d+)",
            ]),
            rank: Extractor::new(&[r"Rank</th>\s*<td[^>]*>(\d+)"]),
            title_named: Extractor::new(&[
                r"\b((?:Legendary )?Grandmaster)\b",
                r"\b(Master|Expert)\b",
            ]),
            title_dan_kyu: Extractor::new(&[r"(\d+\s*(?:Dan|Kyu))\b"]),
            table_row: Regex::new(r"(?s)<tr[^>]*>(.*?)</tr>").expect("row pattern should compile"),
            table_cell: Regex::new(r"(?s)<td[^>]*>(.*?)</td>")
                .expect("cell pattern should compile"),
        }
    }
}

/// AtCoder scrape adapter.
///
/// This adapter never fails hard: any failure, the primary profile fetch
/// included, is absorbed and an all-default skeleton comes back as a
/// degraded result.
#[derive(Clone)]
pub struct AtCoderAdapter {
    transport: Arc<dyn HttpTransport>,
    patterns: Arc<AcPatterns>,
}

impl Default for AtCoderAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AtCoderAdapter {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            patterns: Arc::new(AcPatterns::new()),
        }
    }

    fn parse_profile(&self, handle: &str, html: &str) -> AtCoderStats {
        let p = &self.patterns;
        AtCoderStats {
            username: handle.to_string(),
            rating: p.rating.capture_as(html),
            highest_rating: p.highest_rating.capture_as(html),
            rank: p.rank.capture_as(html),
            title: p
                .title_named
                .capture(html)
                .or_else(|| p.title_dan_kyu.capture(html))
                .map(str::to_string),
            contests: Vec::new(),
            submissions: Vec::new(),
        }
    }

    /// Parse the history CSV positionally by column index.
    fn parse_history_csv(csv: &str) -> Vec<AcContestRow> {
        csv.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let columns: Vec<&str> = line.split(',').map(str::trim).collect();
                if columns.len() <= COL_NEW_RATING {
                    return None;
                }
                // Header row: the rank column is not numeric.
                if columns[COL_RANK].parse::<u32>().is_err()
                    && !columns[COL_RANK].is_empty()
                {
                    return None;
                }
                Some(AcContestRow {
                    date: Some(columns[COL_DATE].to_string()).filter(|s| !s.is_empty()),
                    contest: columns[COL_CONTEST].to_string(),
                    rank: columns[COL_RANK].parse().ok(),
                    performance: columns[COL_PERFORMANCE].parse().ok(),
                    new_rating: columns[COL_NEW_RATING].parse().ok(),
                    diff: columns.get(COL_DIFF).and_then(|c| c.parse().ok()),
                })
            })
            .collect()
    }

    /// Parse the submissions table via nested row/cell regexes.
    fn parse_submissions(&self, html: &str) -> Vec<AcSubmissionRow> {
        let p = &self.patterns;
        p.table_row
            .captures_iter(html)
            .filter_map(|row| {
                let cells: Vec<String> = p
                    .table_cell
                    .captures_iter(row.get(1)?.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|c| strip_tags(c.as_str()))
                    .collect();
                // Submission Time, Task, User, Language, Score, Size, Status.
                if cells.len() < 7 {
                    return None;
                }
                Some(AcSubmissionRow {
                    submitted_at: Some(cells[0].clone()).filter(|s| !s.is_empty()),
                    task: cells[1].clone(),
                    language: Some(cells[3].clone()).filter(|s| !s.is_empty()),
                    status: Some(cells[6].clone()).filter(|s| !s.is_empty()),
                })
            })
            .take(SUBMISSION_ROW_LIMIT)
            .collect()
    }

    async fn fetch_raw(&self, handle: &str) -> Result<AtCoderStats> {
        let profile_html =
            get_text(self.transport.as_ref(), &format!("{HOST}/users/{handle}"), &[]).await?;
        let mut raw = self.parse_profile(handle, &profile_html);

        let csv = best_effort(
            "atcoder history csv",
            String::new(),
            get_text(
                self.transport.as_ref(),
                &format!("{HOST}/users/{handle}/history/csv"),
                &[],
            ),
        )
        .await;
        raw.contests = Self::parse_history_csv(&csv);

        let submissions_html = best_effort(
            "atcoder submissions",
            String::new(),
            get_text(
                self.transport.as_ref(),
                &format!("{HOST}/users/{handle}/submissions"),
                &[],
            ),
        )
        .await;
        raw.submissions = self.parse_submissions(&submissions_html);

        Ok(raw)
    }
}

#[async_trait]
impl PlatformAdapter for AtCoderAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::AtCoder
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        let handle = handle.trim();
        match self.fetch_raw(handle).await {
            Ok(raw) => Ok(ScrapeOutcome::Complete(to_platform_stats(&raw))),
            Err(e) => {
                tracing::warn!(
                    handle,
                    error = short_error_message(&e),
                    "atcoder profile fetch failed; returning empty stats"
                );
                Ok(ScrapeOutcome::Degraded(PlatformStats::skeleton(
                    PlatformId::AtCoder,
                    handle,
                )))
            }
        }
    }
}
