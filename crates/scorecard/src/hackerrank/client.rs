//! HackerRank adapter: five REST endpoints behind a settle-all fan-out.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;

use super::convert::to_platform_stats;
use super::types::{
    HackerRankStats, HrBadge, HrCertificatesResponse, HrContestParticipation, HrDomainScore,
    HrModelResponse, HrModelsResponse, HrProfile,
};
use crate::fetch::{best_effort, get_json};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{PlatformAdapter, PlatformId, Result, ScrapeOutcome};

const API_BASE: &str = "https://www.hackerrank.com/rest/hackers";

/// The one explicit request timeout in the pipeline; HackerRank's REST
/// surface is prone to hanging connections.
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(12);

/// HackerRank scrape adapter.
///
/// Every endpoint is fetched best-effort and the results are settled
/// together: a failed endpoint leaves its fields at default, and the
/// adapter itself never fails hard.
#[derive(Clone)]
pub struct HackerRankAdapter {
    transport: Arc<dyn HttpTransport>,
}

impl Default for HackerRankAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HackerRankAdapter {
    pub fn new() -> Self {
        // Builder failure falls back to the default client (no timeout).
        let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT).unwrap_or_default();
        Self::with_transport(Arc::new(transport))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    async fn fetch_profile(&self, handle: &str) -> Result<Option<HrProfile>> {
        let response: HrModelResponse<HrProfile> =
            get_json(self.transport.as_ref(), &format!("{API_BASE}/{handle}"), &[]).await?;
        Ok(response.model)
    }

    async fn fetch_models<T: serde::de::DeserializeOwned>(
        &self,
        handle: &str,
        path: &str,
    ) -> Result<Vec<T>> {
        let response: HrModelsResponse<T> = get_json(
            self.transport.as_ref(),
            &format!("{API_BASE}/{handle}/{path}"),
            &[],
        )
        .await?;
        Ok(response.models)
    }

    async fn fetch_certificates(&self, handle: &str) -> Result<Vec<super::types::HrCertificate>> {
        let response: HrCertificatesResponse = get_json(
            self.transport.as_ref(),
            &format!("{API_BASE}/{handle}/certificates"),
            &[],
        )
        .await?;
        Ok(response.data)
    }

    /// Settle-all fan-out over the five endpoints; never fails.
    async fn fetch_raw(&self, handle: &str) -> HackerRankStats {
        let (profile, badges, certificates, scores, contests) = tokio::join!(
            best_effort("hackerrank profile", None, self.fetch_profile(handle)),
            best_effort(
                "hackerrank badges",
                Vec::new(),
                self.fetch_models::<HrBadge>(handle, "badges"),
            ),
            best_effort(
                "hackerrank certificates",
                Vec::new(),
                self.fetch_certificates(handle),
            ),
            best_effort(
                "hackerrank scores",
                Vec::new(),
                self.fetch_models::<HrDomainScore>(handle, "scores"),
            ),
            best_effort(
                "hackerrank contests",
                Vec::new(),
                self.fetch_models::<HrContestParticipation>(handle, "contest_participation"),
            ),
        );

        HackerRankStats {
            username: handle.to_string(),
            profile,
            badges,
            certificates,
            scores,
            contests,
        }
    }
}

#[async_trait]
impl PlatformAdapter for HackerRankAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::HackerRank
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        let handle = handle.trim();
        let raw = self.fetch_raw(handle).await;

        let stats = to_platform_stats(&raw);
        if raw.profile.is_none() {
            Ok(ScrapeOutcome::Degraded(stats))
        } else {
            Ok(ScrapeOutcome::Complete(stats))
        }
    }
}
