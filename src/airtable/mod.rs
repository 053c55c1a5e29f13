//! Airtable integration.
//!
//! This module provides:
//! - Response types for the records API
//! - A client for paginated reads and partial-field writes

pub mod client;
pub mod types;

pub use client::AirtableClient;
pub use types::{Record, RecordPage, SITE_NAME_FIELD};
