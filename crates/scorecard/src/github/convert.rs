//! Normalization of raw GitHub stats into the canonical schema.

use super::types::{ContributionDay, GitHubStats};
use crate::platform::{HeatmapDay, PinnedRepo, PlatformId, PlatformStats};

/// Contribution summary computed in one forward pass over date-sorted days.
///
/// Returns `(total, current_streak, longest_streak)`: the current streak is
/// the trailing run of consecutive non-zero days, the longest streak is the
/// maximum run observed anywhere in the series.
#[must_use]
pub fn contribution_summary(days: &[ContributionDay]) -> (u64, u32, u32) {
    let mut total: u64 = 0;
    let mut run: u32 = 0;
    let mut longest: u32 = 0;

    for day in days {
        total += u64::from(day.count);
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    (total, run, longest)
}

/// Pure, total mapper: raw GitHub stats -> canonical stats.
#[must_use]
pub fn to_platform_stats(raw: &GitHubStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::GitHub, &raw.username);

    if let Some(user) = &raw.user {
        stats.display_name = user.name.clone();
        stats.avatar_url = user.avatar_url.clone();
        stats.country = user.location.clone();
        stats.public_repos = user.public_repos;
        stats.followers = user.followers;
        stats.following = user.following;
    }

    if !raw.repos.is_empty() {
        let mut total_stars: u32 = 0;
        for repo in &raw.repos {
            total_stars += repo.stargazers_count;
            if let Some(language) = &repo.language {
                *stats.languages.entry(language.clone()).or_insert(0) += 1;
            }
        }
        stats.total_stars = Some(total_stars);
    }

    if !raw.calendar.is_empty() {
        let (total, current, longest) = contribution_summary(&raw.calendar);
        stats.total_contributions = Some(total);
        stats.current_streak = Some(current);
        stats.longest_streak = Some(longest);

        for day in &raw.calendar {
            if day.date.len() >= 7 {
                // Month bucket: the first 7 chars of the ISO date.
                let month = day.date[..7].to_string();
                *stats.monthly_contributions.entry(month).or_insert(0) += day.count;
            }
            stats.contribution_calendar.push(HeatmapDay {
                date: day.date.clone(),
                count: day.count,
            });
        }
    }

    stats.pinned_repos = raw
        .pinned
        .iter()
        .map(|node| PinnedRepo {
            name: node.name.clone(),
            description: node.description.clone(),
            stars: node.stargazer_count,
            forks: node.fork_count,
            language: node.primary_language.as_ref().map(|l| l.name.clone()),
            url: node.url.clone(),
        })
        .collect();

    stats.fill_aliases();
    stats
}
