//! HackerRank REST data types.

use serde::Deserialize;

/// Single-model envelope (`{"model": {...}}`).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HrModelResponse<T> {
    #[serde(default)]
    pub model: Option<T>,
}

/// Multi-model envelope (`{"models": [...]}`).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HrModelsResponse<T> {
    #[serde(default)]
    pub models: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrBadge {
    #[serde(default)]
    pub badge_name: Option<String>,
    #[serde(default)]
    pub stars: Option<u32>,
    #[serde(default)]
    pub solved: Option<u32>,
}

/// Certificates ride a JSON:API-style `data` array.
#[derive(Debug, Deserialize)]
pub struct HrCertificatesResponse {
    #[serde(default)]
    pub data: Vec<HrCertificate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrCertificate {
    #[serde(default)]
    pub attributes: HrCertificateAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrCertificateAttributes {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub certificate_name: Option<String>,
}

/// One practice-domain score entry. Depending on endpoint vintage the
/// score sits at the top level or under `practice`; the explicit solved
/// count is frequently absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrDomainScore {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub practice: Option<HrPracticeScore>,
    #[serde(default)]
    pub solved: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrPracticeScore {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrContestParticipation {
    #[serde(default)]
    pub contest_name: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Raw HackerRank stats: whatever subset of the five endpoints answered.
#[derive(Debug, Clone, Default)]
pub struct HackerRankStats {
    pub username: String,
    pub profile: Option<HrProfile>,
    pub badges: Vec<HrBadge>,
    pub certificates: Vec<HrCertificate>,
    pub scores: Vec<HrDomainScore>,
    pub contests: Vec<HrContestParticipation>,
}
