//! Normalization of raw CodeChef stats into the canonical schema.

use chrono::NaiveDateTime;

use super::types::CodeChefStats;
use crate::platform::{ContestEntry, PlatformId, PlatformStats, RatingPoint, RecentSubmission};

fn parse_end_date(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Pure, total mapper: raw CodeChef stats -> canonical stats.
#[must_use]
pub fn to_platform_stats(raw: &CodeChefStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::CodeChef, &raw.username);

    stats.display_name = raw.display_name.clone();
    stats.country = raw.country.clone();
    stats.rating = raw.rating;
    stats.max_rating = raw.highest_rating;
    stats.stars = raw.stars.clone();
    stats.rank = raw.stars.clone();
    stats.division = raw.division.clone();
    stats.global_rank = raw.global_rank;
    stats.country_rank = raw.country_rank;
    stats.problems_solved = raw.solved.unwrap_or(0);

    stats.contests_attended = Some(raw.rating_history.len() as u32);
    for entry in &raw.rating_history {
        let rating = entry.rating.trim().parse::<i64>().ok();
        let rank = entry
            .rank
            .as_deref()
            .and_then(|r| r.trim().parse::<u32>().ok());

        stats.contests.push(ContestEntry {
            name: entry.name.clone(),
            date: entry.end_date.as_deref().and_then(parse_end_date),
            rank,
            old_rating: None,
            new_rating: rating,
            rating_change: None,
        });
        if let Some(rating) = rating {
            stats.rating_graph.push(RatingPoint {
                label: entry.code.clone(),
                rating,
            });
        }
    }

    stats.recent_submissions = raw
        .recent_problems
        .iter()
        .map(|code| RecentSubmission {
            title: code.clone(),
            verdict: None,
            language: None,
            submitted_at: None,
        })
        .collect();

    stats.fill_aliases();
    stats
}
