//! Airtable records API response types.
//!
//! Reference: https://airtable.com/developers/web/api/list-records

use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the site identifier used as the Zenchette lookup key.
pub const SITE_NAME_FIELD: &str = "Site Name";

/// One Airtable record: an opaque id plus the selected field subset.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// The record's site name, if the field is present and a string.
    pub fn site_name(&self) -> Option<&str> {
        self.fields.get(SITE_NAME_FIELD).and_then(Value::as_str)
    }
}

/// One page of a table listing. `offset` is the continuation cursor and is
/// absent on the final page.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}
