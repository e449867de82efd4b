//! Normalization of raw Codeforces stats into the canonical schema.

use std::collections::HashSet;

use chrono::DateTime;

use super::types::{CfProblem, CodeforcesStats};
use crate::platform::{ContestEntry, PlatformId, PlatformStats, RatingPoint, RecentSubmission};

/// How many submissions to surface as "recent" in the canonical record.
const RECENT_LIMIT: usize = 10;

/// Composite dedup key for a problem.
///
/// `contestId-index` when both are present; problems from gyms or archives
/// without an index fall back to `name-<problem name>`.
#[must_use]
pub fn problem_key(problem: &CfProblem) -> String {
    match (problem.contest_id, problem.index.as_deref()) {
        (Some(contest_id), Some(index)) if !index.is_empty() => {
            format!("{contest_id}-{index}")
        }
        _ => format!("name-{}", problem.name),
    }
}

/// Bucket a problem rating into the conventional 400-point difficulty bands.
#[must_use]
pub fn difficulty_bucket(rating: Option<i64>) -> &'static str {
    match rating {
        None => "unrated",
        Some(r) if r < 1200 => "800-1199",
        Some(r) if r < 1600 => "1200-1599",
        Some(r) if r < 2000 => "1600-1999",
        Some(r) if r < 2400 => "2000-2399",
        Some(_) => "2400+",
    }
}

/// Pure, total mapper: raw Codeforces stats -> canonical stats.
///
/// One linear pass over submissions computes the solved count (deduplicated
/// on [`problem_key`]) and the language/difficulty/tag histograms from the
/// first-seen accepted instance of each unique problem; the verdict
/// histogram counts every submission.
#[must_use]
pub fn to_platform_stats(raw: &CodeforcesStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::Codeforces, &raw.user.handle);

    stats.rating = raw.user.rating;
    stats.max_rating = raw.user.max_rating;
    stats.rank = raw.user.rank.clone();
    stats.country = raw.user.country.clone();
    stats.avatar_url = raw.user.avatar.clone();

    stats.contests_attended = Some(raw.ratings.len() as u32);
    for change in &raw.ratings {
        stats.contests.push(ContestEntry {
            name: change.contest_name.clone(),
            date: DateTime::from_timestamp(change.rating_update_time_seconds, 0),
            rank: Some(change.rank),
            old_rating: Some(change.old_rating),
            new_rating: Some(change.new_rating),
            rating_change: Some(change.new_rating - change.old_rating),
        });
        stats.rating_graph.push(RatingPoint {
            label: change.contest_name.clone(),
            rating: change.new_rating,
        });
    }

    let mut seen: HashSet<String> = HashSet::new();
    for submission in &raw.submissions {
        let verdict = submission.verdict.as_deref().unwrap_or("UNKNOWN");
        *stats.verdicts.entry(verdict.to_string()).or_insert(0) += 1;

        if verdict == "OK" && seen.insert(problem_key(&submission.problem)) {
            stats.problems_solved += 1;
            *stats
                .languages
                .entry(submission.programming_language.clone())
                .or_insert(0) += 1;
            *stats
                .difficulty
                .entry(difficulty_bucket(submission.problem.rating).to_string())
                .or_insert(0) += 1;
            for tag in &submission.problem.tags {
                *stats.tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }

    // user.status returns newest submissions first.
    stats.recent_submissions = raw
        .submissions
        .iter()
        .take(RECENT_LIMIT)
        .map(|s| RecentSubmission {
            title: s.problem.name.clone(),
            verdict: s.verdict.clone(),
            language: Some(s.programming_language.clone()),
            submitted_at: DateTime::from_timestamp(s.creation_time_seconds, 0),
        })
        .collect();

    stats.fill_aliases();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::types::{CfSubmission, CfUser};

    fn user(handle: &str) -> CfUser {
        CfUser {
            handle: handle.to_string(),
            rating: Some(1900),
            max_rating: Some(2100),
            rank: Some("candidate master".to_string()),
            max_rank: Some("master".to_string()),
            country: None,
            avatar: None,
            contribution: None,
            friend_of_count: None,
        }
    }

    fn submission(
        id: i64,
        contest_id: Option<i64>,
        index: Option<&str>,
        name: &str,
        verdict: &str,
        language: &str,
        rating: Option<i64>,
        tags: &[&str],
    ) -> CfSubmission {
        CfSubmission {
            id,
            creation_time_seconds: 1_600_000_000 + id,
            problem: CfProblem {
                contest_id,
                index: index.map(str::to_string),
                name: name.to_string(),
                rating,
                tags: tags.iter().map(|t| (*t).to_string()).collect(),
            },
            verdict: Some(verdict.to_string()),
            programming_language: language.to_string(),
        }
    }

    #[test]
    fn problem_key_prefers_contest_and_index() {
        let problem = CfProblem {
            contest_id: Some(4),
            index: Some("A".to_string()),
            name: "Watermelon".to_string(),
            rating: Some(800),
            tags: vec![],
        };
        assert_eq!(problem_key(&problem), "4-A");
    }

    #[test]
    fn problem_key_falls_back_to_name() {
        let problem = CfProblem {
            contest_id: Some(4),
            index: None,
            name: "Watermelon".to_string(),
            rating: None,
            tags: vec![],
        };
        assert_eq!(problem_key(&problem), "name-Watermelon");

        let no_contest = CfProblem {
            contest_id: None,
            index: Some("A".to_string()),
            name: "Archive Problem".to_string(),
            rating: None,
            tags: vec![],
        };
        assert_eq!(problem_key(&no_contest), "name-Archive Problem");
    }

    #[test]
    fn difficulty_buckets_cover_the_bands() {
        assert_eq!(difficulty_bucket(None), "unrated");
        assert_eq!(difficulty_bucket(Some(800)), "800-1199");
        assert_eq!(difficulty_bucket(Some(1199)), "800-1199");
        assert_eq!(difficulty_bucket(Some(1200)), "1200-1599");
        assert_eq!(difficulty_bucket(Some(1999)), "1600-1999");
        assert_eq!(difficulty_bucket(Some(2400)), "2400+");
        assert_eq!(difficulty_bucket(Some(3500)), "2400+");
    }

    #[test]
    fn duplicate_accepted_submissions_count_once() {
        let raw = CodeforcesStats {
            user: user("dup"),
            ratings: vec![],
            submissions: vec![
                submission(2, Some(4), Some("A"), "Watermelon", "OK", "Rust", Some(800), &["math"]),
                submission(1, Some(4), Some("A"), "Watermelon", "OK", "Rust", Some(800), &["math"]),
            ],
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.problems_solved, 1);
        assert_eq!(stats.problems_solved_total, 1);
        assert_eq!(stats.languages.get("Rust"), Some(&1));
        assert_eq!(stats.tags.get("math"), Some(&1));
        assert_eq!(stats.difficulty.get("800-1199"), Some(&1));
        // Verdicts count every submission, including the duplicate.
        assert_eq!(stats.verdicts.get("OK"), Some(&2));
    }

    #[test]
    fn rejected_submissions_do_not_count_as_solved() {
        let raw = CodeforcesStats {
            user: user("wa"),
            ratings: vec![],
            submissions: vec![
                submission(1, Some(10), Some("B"), "B", "WRONG_ANSWER", "C++", Some(1500), &[]),
                submission(2, Some(10), Some("B"), "B", "OK", "C++", Some(1500), &[]),
            ],
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.problems_solved, 1);
        assert_eq!(stats.verdicts.get("WRONG_ANSWER"), Some(&1));
        assert_eq!(stats.verdicts.get("OK"), Some(&1));
    }

    #[test]
    fn histograms_come_from_first_seen_accepted_instance() {
        // Same problem solved twice in different languages: only the
        // first-seen accepted instance feeds the language histogram.
        let raw = CodeforcesStats {
            user: user("relang"),
            ratings: vec![],
            submissions: vec![
                submission(1, Some(7), Some("C"), "C", "OK", "Rust", Some(2000), &["dp"]),
                submission(2, Some(7), Some("C"), "C", "OK", "Python", Some(2000), &["dp"]),
            ],
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.languages.get("Rust"), Some(&1));
        assert_eq!(stats.languages.get("Python"), None);
        assert_eq!(stats.tags.get("dp"), Some(&1));
    }

    #[test]
    fn contest_history_carries_deltas_and_graph() {
        let raw = CodeforcesStats {
            user: user("climber"),
            ratings: vec![
                crate::codeforces::types::CfRatingChange {
                    contest_id: 1,
                    contest_name: "Round 1".to_string(),
                    rank: 120,
                    rating_update_time_seconds: 1_600_000_000,
                    old_rating: 1500,
                    new_rating: 1602,
                },
                crate::codeforces::types::CfRatingChange {
                    contest_id: 2,
                    contest_name: "Round 2".to_string(),
                    rank: 300,
                    rating_update_time_seconds: 1_600_100_000,
                    old_rating: 1602,
                    new_rating: 1580,
                },
            ],
            submissions: vec![],
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.contests_attended, Some(2));
        assert_eq!(stats.contests[0].rating_change, Some(102));
        assert_eq!(stats.contests[1].rating_change, Some(-22));
        assert_eq!(stats.rating_graph.len(), 2);
        assert_eq!(stats.rating_graph[1].rating, 1580);
        assert_eq!(stats.contest_history, stats.contests);
    }
}
