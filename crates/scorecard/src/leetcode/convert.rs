//! Normalization of raw LeetCode stats into the canonical schema.

use chrono::DateTime;

use super::types::{LcAcceptance, LeetCodeStats};
use crate::platform::{ContestEntry, PlatformId, PlatformStats, RatingPoint, RecentSubmission};

/// Per-contest rating deltas reconstructed as a running difference.
///
/// The source only exposes absolute ratings per attended contest, so the
/// change is `rating[i] - rating[i-1]`, with the first entry forced to `0`
/// (no prior baseline exists).
#[must_use]
pub fn rating_changes(ratings: &[i64]) -> Vec<i64> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| if i == 0 { 0 } else { rating - ratings[i - 1] })
        .collect()
}

/// Acceptance percentage with two decimals: `round(a/s * 10000) / 100`.
#[must_use]
pub fn acceptance_rate(acceptance: &LcAcceptance) -> Option<f64> {
    if acceptance.submitted == 0 {
        return None;
    }
    let ratio = acceptance.accepted as f64 / acceptance.submitted as f64;
    Some((ratio * 10_000.0).round() / 100.0)
}

/// Pure, total mapper: raw LeetCode stats -> canonical stats.
#[must_use]
pub fn to_platform_stats(raw: &LeetCodeStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::LeetCode, &raw.username);

    for row in &raw.solved.ac_submission_num {
        match row.difficulty.as_str() {
            "All" => stats.problems_solved = row.count,
            "Easy" => stats.easy_solved = Some(row.count),
            "Medium" => stats.medium_solved = Some(row.count),
            "Hard" => stats.hard_solved = Some(row.count),
            _ => {}
        }
        if row.difficulty != "All" {
            stats.difficulty.insert(row.difficulty.clone(), row.count);
        }
    }

    if let Some(profile) = &raw.profile {
        stats.display_name = profile.real_name.clone();
        stats.avatar_url = profile.user_avatar.clone();
        stats.country = profile.country_name.clone();
        stats.global_rank = profile.ranking;
    }

    if let Some(languages) = &raw.languages {
        for lang in languages {
            stats
                .languages
                .insert(lang.language_name.clone(), lang.problems_solved);
        }
    }

    if let Some(contest) = &raw.contest {
        if let Some(ranking) = &contest.user_contest_ranking {
            stats.rating = ranking.rating.map(|r| r.round() as i64);
            stats.contests_attended = ranking.attended_contests_count;
        }

        let attended: Vec<_> = contest
            .user_contest_ranking_history
            .iter()
            .filter(|entry| entry.attended)
            .collect();
        let ratings: Vec<i64> = attended
            .iter()
            .map(|entry| entry.rating.unwrap_or(0.0).round() as i64)
            .collect();
        let changes = rating_changes(&ratings);

        for (i, entry) in attended.iter().enumerate() {
            let new_rating = ratings[i];
            stats.contests.push(ContestEntry {
                name: entry.contest.title.clone(),
                date: entry
                    .contest
                    .start_time
                    .and_then(|t| DateTime::from_timestamp(t, 0)),
                rank: entry.ranking,
                old_rating: Some(new_rating - changes[i]),
                new_rating: Some(new_rating),
                rating_change: Some(changes[i]),
            });
            stats.rating_graph.push(RatingPoint {
                label: entry.contest.title.clone(),
                rating: new_rating,
            });
        }
    }

    if let Some(topics) = &raw.topics {
        for tag in topics
            .advanced
            .iter()
            .chain(&topics.intermediate)
            .chain(&topics.fundamental)
        {
            *stats.tags.entry(tag.tag_name.clone()).or_insert(0) += tag.problems_solved;
        }
    }

    if let Some(recent) = &raw.recent {
        stats.recent_submissions = recent
            .iter()
            .map(|s| RecentSubmission {
                title: s.title.clone(),
                verdict: Some("Accepted".to_string()),
                language: None,
                submitted_at: s
                    .timestamp
                    .as_deref()
                    .and_then(|t| t.parse::<i64>().ok())
                    .and_then(|t| DateTime::from_timestamp(t, 0)),
            })
            .collect();
    }

    if let Some(acceptance) = &raw.acceptance {
        stats.acceptance_rate = acceptance_rate(acceptance);
    }

    stats.fill_aliases();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leetcode::types::{LcDifficultyCount, LcSubmitStats};

    #[test]
    fn rating_changes_first_entry_is_zero() {
        assert_eq!(rating_changes(&[1200, 1350, 1300]), vec![0, 150, -50]);
    }

    #[test]
    fn rating_changes_handles_empty_and_single() {
        assert_eq!(rating_changes(&[]), Vec::<i64>::new());
        assert_eq!(rating_changes(&[1500]), vec![0]);
    }

    #[test]
    fn acceptance_rate_rounds_to_two_decimals() {
        let rate = acceptance_rate(&LcAcceptance {
            accepted: 1,
            submitted: 3,
        });
        assert_eq!(rate, Some(33.33));
    }

    #[test]
    fn acceptance_rate_with_zero_submissions_is_none() {
        let rate = acceptance_rate(&LcAcceptance {
            accepted: 0,
            submitted: 0,
        });
        assert_eq!(rate, None);
    }

    #[test]
    fn mapper_fills_defaults_when_optional_sections_are_missing() {
        let raw = LeetCodeStats {
            username: "solo".to_string(),
            solved: LcSubmitStats {
                ac_submission_num: vec![LcDifficultyCount {
                    difficulty: "All".to_string(),
                    count: 10,
                    submissions: None,
                }],
                total_submission_num: vec![],
            },
            profile: None,
            languages: None,
            contest: None,
            topics: None,
            recent: None,
            acceptance: None,
        };

        let stats = to_platform_stats(&raw);
        assert_eq!(stats.username, "solo");
        assert_eq!(stats.profile_url, "https://leetcode.com/u/solo/");
        assert_eq!(stats.problems_solved, 10);
        assert_eq!(stats.problems_solved_total, 10);
        assert!(stats.rating.is_none());
        assert!(stats.contests.is_empty());
        assert!(stats.tags.is_empty());
        assert!(stats.acceptance_rate.is_none());
    }
}
