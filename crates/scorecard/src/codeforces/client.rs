//! Codeforces adapter: three sequential REST calls against the public API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::convert::to_platform_stats;
use super::types::{CfEnvelope, CfRatingChange, CfSubmission, CfUser, CodeforcesStats};
use crate::fetch::get_json;
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::platform::{PlatformAdapter, PlatformId, Result, ScrapeError, ScrapeOutcome};

/// Codeforces API host.
const API_HOST: &str = "https://codeforces.com/api";

/// Maximum submissions fetched from `user.status` in one call.
const SUBMISSION_COUNT: u32 = 10_000;

/// Codeforces scrape adapter.
///
/// A non-"OK" envelope from any of the three endpoints is a hard failure;
/// this adapter never returns a partial object.
#[derive(Clone)]
pub struct CodeforcesAdapter {
    transport: Arc<dyn HttpTransport>,
}

impl Default for CodeforcesAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeforcesAdapter {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Call one API method and unwrap the standard envelope.
    async fn call<T: DeserializeOwned>(&self, method: &str, query: &str) -> Result<T> {
        let url = format!("{API_HOST}/{method}?{query}");
        let envelope: CfEnvelope<T> = get_json(self.transport.as_ref(), &url, &[]).await?;

        if envelope.status != "OK" {
            let comment = envelope
                .comment
                .unwrap_or_else(|| "no comment in response".to_string());
            return Err(ScrapeError::api(200, format!("{method}: {comment}")));
        }
        envelope
            .result
            .ok_or_else(|| ScrapeError::parse(format!("{method}: OK envelope without result")))
    }

    /// Fetch the raw stats: user.info, user.rating, user.status in order.
    async fn fetch_raw(&self, handle: &str) -> Result<CodeforcesStats> {
        let users: Vec<CfUser> = self
            .call("user.info", &format!("handles={handle}"))
            .await?;
        let user = users
            .into_iter()
            .next()
            .ok_or_else(|| ScrapeError::not_found(format!("codeforces user {handle}")))?;

        let ratings: Vec<CfRatingChange> = self
            .call("user.rating", &format!("handle={handle}"))
            .await?;

        let submissions: Vec<CfSubmission> = self
            .call(
                "user.status",
                &format!("handle={handle}&from=1&count={SUBMISSION_COUNT}"),
            )
            .await?;

        Ok(CodeforcesStats {
            user,
            ratings,
            submissions,
        })
    }
}

#[async_trait]
impl PlatformAdapter for CodeforcesAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::Codeforces
    }

    async fn scrape(&self, handle: &str) -> Result<ScrapeOutcome> {
        if handle.trim().is_empty() {
            return Err(ScrapeError::InvalidHandle(handle.to_string()));
        }

        let raw = self.fetch_raw(handle.trim()).await?;
        Ok(ScrapeOutcome::Complete(to_platform_stats(&raw)))
    }
}
