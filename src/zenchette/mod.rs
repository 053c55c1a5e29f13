//! Zenchette integration.
//!
//! Zenchette is the enrichment source: given a site name it reports the
//! tooling and lifecycle attributes the Airtable fields are derived from.

pub mod client;
pub mod types;

pub use client::ZenchetteClient;
pub use types::SiteProfile;
