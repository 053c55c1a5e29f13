//! Airtable ⇄ Zenchette record sync.
//!
//! One invocation pulls every candidate record from an Airtable table,
//! looks up each record's site profile in Zenchette, derives a fixed set
//! of Airtable field updates from the profile, writes each record back,
//! and returns a summary of what happened. A failure on one record never
//! stops the rest of the batch; only a failure of the initial batch read
//! aborts the invocation.

pub mod airtable;
pub mod config;
pub mod error;
pub mod sync;
pub mod transform;
pub mod zenchette;

pub use config::Config;
pub use error::{SyncError, SyncResult};
pub use sync::{SyncReport, SyncService};
