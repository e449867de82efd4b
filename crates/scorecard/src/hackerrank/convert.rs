//! Normalization of raw HackerRank stats into the canonical schema.

use super::types::{HackerRankStats, HrDomainScore};
use crate::platform::{Badge, ContestEntry, PlatformId, PlatformStats};

/// Solved count for one practice domain.
///
/// Returns the explicit count when the endpoint supplied one; otherwise
/// falls back to `round(score / 10)` - an approximation inherited from the
/// upstream behavior, surfaced to callers through the estimate flag.
#[must_use]
pub fn domain_solved(entry: &HrDomainScore) -> (u32, bool) {
    if let Some(solved) = entry.solved {
        return (solved, false);
    }
    let score = entry
        .score
        .or_else(|| entry.practice.as_ref().and_then(|p| p.score))
        .unwrap_or(0.0);
    ((score / 10.0).round().max(0.0) as u32, true)
}

/// Pure, total mapper: raw HackerRank stats -> canonical stats.
#[must_use]
pub fn to_platform_stats(raw: &HackerRankStats) -> PlatformStats {
    let mut stats = PlatformStats::skeleton(PlatformId::HackerRank, &raw.username);

    if let Some(profile) = &raw.profile {
        stats.display_name = profile.name.clone();
        stats.country = profile.country.clone();
        stats.avatar_url = profile.avatar.clone();
    }

    for entry in &raw.scores {
        let (solved, estimated) = domain_solved(entry);
        stats.problems_solved += solved;
        if estimated && solved > 0 {
            stats.solved_is_estimated = true;
        }
        if let Some(name) = &entry.name {
            stats.tags.insert(name.clone(), solved);
        }
    }

    stats.badges = raw
        .badges
        .iter()
        .filter_map(|badge| {
            badge.badge_name.as_ref().map(|name| Badge {
                name: name.clone(),
                stars: badge.stars,
            })
        })
        .collect();

    // Passed certificates count toward badges as well; a certificate is a
    // credential, not a problem count.
    for certificate in &raw.certificates {
        let attributes = &certificate.attributes;
        if attributes.status.as_deref() == Some("test_passed")
            && let Some(name) = &attributes.certificate_name
        {
            stats.badges.push(Badge {
                name: name.clone(),
                stars: None,
            });
        }
    }

    stats.contests_attended = Some(raw.contests.len() as u32);
    for contest in &raw.contests {
        stats.contests.push(ContestEntry {
            name: contest
                .contest_name
                .clone()
                .unwrap_or_else(|| "unnamed contest".to_string()),
            date: None,
            rank: contest.rank,
            old_rating: None,
            new_rating: None,
            rating_change: None,
        });
    }

    stats.fill_aliases();
    stats
}
