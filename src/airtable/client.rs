//! Airtable records API client.
//!
//! The only place cursor-based pagination lives. Reads follow the `offset`
//! continuation cursor until the table is exhausted; writes PATCH exactly
//! the supplied fields onto one record.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use super::types::{Record, RecordPage};
use crate::config::Config;
use crate::error::{SyncError, SyncResult};
use crate::transform::UpdatePayload;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const SERVICE: &str = "airtable";

pub struct AirtableClient {
    http: Client,
    endpoint: String,
    api_key: String,
    fields: Vec<String>,
    filter: String,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    fields: &'a UpdatePayload,
}

impl AirtableClient {
    pub fn new(config: &Config) -> SyncResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.airtable_endpoint.clone(),
            api_key: config.airtable_api_key.clone(),
            fields: config.airtable_fields.clone(),
            filter: config.airtable_filter.clone(),
        })
    }

    /// Fetch every record matching the configured filter, following
    /// pagination offsets until a page carries no cursor.
    ///
    /// Records come back in source order, concatenated across pages. A
    /// non-success status on any page aborts the whole read; callers never
    /// see a partial result.
    pub async fn fetch_all(&self) -> SyncResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.fetch_page(offset.as_deref()).await?;
            for record in &page.records {
                if record.id.is_empty() {
                    return Err(SyncError::Malformed {
                        service: SERVICE,
                        detail: "record with empty id".to_string(),
                    });
                }
            }
            records.extend(page.records);

            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        Ok(records)
    }

    async fn fetch_page(&self, offset: Option<&str>) -> SyncResult<RecordPage> {
        let mut query: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|f| ("fields[]", f.as_str()))
            .collect();
        query.push(("filterByFormula", self.filter.as_str()));
        if let Some(cursor) = offset {
            query.push(("offset", cursor));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.api_key)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::api(SERVICE, status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SyncError::Malformed {
            service: SERVICE,
            detail: e.to_string(),
        })
    }

    /// PATCH the payload's fields onto one record. Fields not present in
    /// the payload are left untouched by Airtable. Returns the updated
    /// record as echoed by the API.
    pub async fn update_record(
        &self,
        record_id: &str,
        payload: &UpdatePayload,
    ) -> SyncResult<Record> {
        let url = format!("{}/{}", self.endpoint, record_id);

        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.api_key)
            .json(&UpdateRequest { fields: payload })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::api(SERVICE, status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SyncError::Malformed {
            service: SERVICE,
            detail: e.to_string(),
        })
    }
}
