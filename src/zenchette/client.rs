//! Zenchette lookup client.

use std::time::Duration;

use reqwest::Client;

use super::types::SiteProfile;
use crate::config::Config;
use crate::error::{SyncError, SyncResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const SERVICE: &str = "zenchette";

pub struct ZenchetteClient {
    http: Client,
    endpoint: String,
}

impl ZenchetteClient {
    pub fn new(config: &Config) -> SyncResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.zenchette_api_url.clone(),
        })
    }

    /// Look up the profile for one site. Exactly one request, no retries.
    ///
    /// Non-success statuses propagate as typed errors — "service is down"
    /// is not the same as "service has nothing for this site" and the
    /// orchestrator classifies the two differently. A 2xx response with an
    /// empty body deserializes to the unavailable sentinel.
    pub async fn lookup(&self, site: &str) -> SyncResult<SiteProfile> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("website", site)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::api(SERVICE, status, body));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(SiteProfile::default());
        }

        serde_json::from_str(&body).map_err(|e| SyncError::Malformed {
            service: SERVICE,
            detail: e.to_string(),
        })
    }
}
