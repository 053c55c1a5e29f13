//! Invocation configuration.
//!
//! Everything the pipeline needs is read from the environment exactly once
//! and carried in a [`Config`] value passed into each component, so the
//! components stay testable with injected endpoints.

use anyhow::{Context, Result};

/// Configuration for one sync invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full Airtable table endpoint (`<api url><base id>/<table>`).
    pub airtable_endpoint: String,
    pub airtable_api_key: String,
    /// Field names to request from Airtable (`fields[]` query parameters).
    pub airtable_fields: Vec<String>,
    /// `filterByFormula` expression selecting candidate records.
    pub airtable_filter: String,
    /// Zenchette lookup endpoint.
    pub zenchette_api_url: String,
    /// When set, payloads are computed and reported but never written.
    pub dry_run: bool,
}

impl Config {
    /// Build the configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = require("AIRTABLE_API_URL")?;
        let base_id = require("AIRTABLE_BASE_ID")?;
        let table = require("AIRTABLE_TABLE")?;

        Ok(Self {
            airtable_endpoint: format!("{api_url}{base_id}/{table}"),
            airtable_api_key: require("AIRTABLE_API_KEY")?,
            airtable_fields: require("AIRTABLE_FIELDS")?
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            airtable_filter: require("AIRTABLE_FILTER")?,
            zenchette_api_url: require("ZENCHETTE_API_URL")?,
            dry_run: std::env::var("DRY_RUN")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} environment variable not set"))
}
