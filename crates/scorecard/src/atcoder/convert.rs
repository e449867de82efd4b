//! Normalization of raw AtCoder stats into the canonical schema.

use chrono::DateTime;

use super::types::AtCoderStats;
use crate::platform::{ContestEntry, PlatformId, PlatformStats, RatingPoint, RecentSubmission};

fn parse_history_date(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z")
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc))
}

/// Pure, total mapper: raw AtCoder stats -> canonical stats.
///
/// Every contest row is kept in `contests`; only rows with a rated result
/// (a non-empty new-rating column) contribute a point to `rating_graph`.
#[must_use]
pub fn to_platform_stats(raw: &AtCoderStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::AtCoder, &raw.username);

    stats.rating = raw.rating;
    stats.max_rating = raw.highest_rating;
    stats.global_rank = raw.rank;
    stats.rank = raw.title.clone();

    stats.contests_attended = Some(raw.contests.len() as u32);
    for row in &raw.contests {
        stats.contests.push(ContestEntry {
            name: row.contest.clone(),
            date: row.date.as_deref().and_then(parse_history_date),
            rank: row.rank,
            old_rating: match (row.new_rating, row.diff) {
                (Some(new), Some(diff)) => Some(new - diff),
                _ => None,
            },
            new_rating: row.new_rating,
            rating_change: row.diff,
        });
        if let Some(rating) = row.new_rating {
            stats.rating_graph.push(RatingPoint {
                label: row.contest.clone(),
                rating,
            });
        }
    }

    for row in &raw.submissions {
        if let Some(status) = &row.status {
            *stats.verdicts.entry(status.clone()).or_insert(0) += 1;
        }
        if let Some(language) = &row.language {
            *stats.languages.entry(language.clone()).or_insert(0) += 1;
        }
        stats.recent_submissions.push(RecentSubmission {
            title: row.task.clone(),
            verdict: row.status.clone(),
            language: row.language.clone(),
            submitted_at: row.submitted_at.as_deref().and_then(|raw| {
                parse_history_date(raw).or_else(|| {
                    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                        .ok()
                        .map(|dt| dt.and_utc())
                })
            }),
        });
    }

    stats.fill_aliases();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atcoder::types::{AcContestRow, AcSubmissionRow};

    #[test]
    fn unrated_rows_stay_in_contests_but_not_in_rating_graph() {
        let raw = AtCoderStats {
            username: "rng".to_string(),
            contests: vec![
                AcContestRow {
                    date: Some("2023-06-10 22:40:00+0900".to_string()),
                    contest: "ABC 305".to_string(),
                    rank: Some(120),
                    performance: Some(1650),
                    new_rating: Some(1500),
                    diff: Some(40),
                },
                AcContestRow {
                    date: Some("2023-06-17 22:40:00+0900".to_string()),
                    contest: "AGC 063".to_string(),
                    rank: Some(80),
                    performance: None,
                    new_rating: None,
                    diff: None,
                },
            ],
            ..AtCoderStats::default()
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.contests.len(), 2);
        assert_eq!(stats.rating_graph.len(), 1);
        assert_eq!(stats.rating_graph[0].rating, 1500);
        assert_eq!(stats.contests[0].old_rating, Some(1460));
        assert_eq!(stats.contests[1].new_rating, None);
        assert_eq!(stats.contests_attended, Some(2));
        assert!(stats.contests[0].date.is_some());
    }

    #[test]
    fn submissions_feed_recent_list_and_histograms() {
        let raw = AtCoderStats {
            username: "coder".to_string(),
            submissions: vec![
                AcSubmissionRow {
                    submitted_at: Some("2023-06-10 22:41:00".to_string()),
                    task: "A - Water Station".to_string(),
                    language: Some("Rust (1.70)".to_string()),
                    status: Some("AC".to_string()),
                },
                AcSubmissionRow {
                    submitted_at: None,
                    task: "B - ABCDEF".to_string(),
                    language: Some("Rust (1.70)".to_string()),
                    status: Some("WA".to_string()),
                },
            ],
            ..AtCoderStats::default()
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.recent_submissions.len(), 2);
        assert_eq!(stats.verdicts.get("AC"), Some(&1));
        assert_eq!(stats.verdicts.get("WA"), Some(&1));
        assert_eq!(stats.languages.get("Rust (1.70)"), Some(&2));
        assert!(stats.recent_submissions[0].submitted_at.is_some());
    }

    #[test]
    fn mapper_is_total_over_an_empty_raw() {
        let raw = AtCoderStats {
            username: "empty".to_string(),
            ..AtCoderStats::default()
        };
        let stats = to_platform_stats(&raw);
        assert_eq!(stats.username, "empty");
        assert_eq!(stats.problems_solved, 0);
        assert_eq!(stats.contests_attended, Some(0));
    }
}
