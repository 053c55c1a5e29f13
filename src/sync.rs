//! Batch synchronization of Airtable records against Zenchette.
//!
//! The orchestrator pulls every candidate record, then walks them strictly
//! in source order: lookup, transform, write. Each record ends in exactly
//! one terminal outcome, and one bad record never stops the rest of the
//! batch. Only the initial batch read can fail the whole invocation.

use serde::Serialize;
use tracing::{info, warn};

use crate::airtable::{AirtableClient, Record};
use crate::config::Config;
use crate::error::SyncResult;
use crate::transform::{to_update_payload, UpdatePayload};
use crate::zenchette::ZenchetteClient;

/// Why a record was skipped, attributable to the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The Zenchette lookup failed at the transport/HTTP level.
    LookupFailed,
    /// Zenchette answered but had nothing usable for the site.
    NoData,
    /// The Airtable PATCH was rejected.
    WriteFailed,
}

/// Terminal state for one processed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Updated {
        id: String,
    },
    /// Dry-run stand-in for `Updated`: the payload was computed but the
    /// write was suppressed.
    WouldUpdate {
        id: String,
        payload: UpdatePayload,
    },
    Skipped {
        id: String,
        reason: SkipReason,
    },
}

/// A skipped record and the stage it failed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: SkipReason,
}

/// A record that would have been written in a live run, with the payload
/// it would have received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WouldUpdateRecord {
    pub id: String,
    pub payload: UpdatePayload,
}

/// Summary of one sync invocation.
///
/// Built by folding per-record outcomes, so the three sets are disjoint by
/// construction and `total` always equals their combined size. Never
/// mutated after `run` returns it.
#[derive(Debug, Default, Serialize)]
pub struct SyncReport {
    pub total: usize,
    pub updated: Vec<String>,
    pub would_update: Vec<WouldUpdateRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl SyncReport {
    /// JSON invocation result: total attempted plus counts and lists per
    /// outcome.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "total_records_processed": self.total,
            "updated_count": self.updated.len(),
            "updated_records": self.updated,
            "would_update_count": self.would_update.len(),
            "would_update_records": self.would_update,
            "skipped_count": self.skipped.len(),
            "skipped_records": self.skipped,
        })
    }
}

impl FromIterator<RecordOutcome> for SyncReport {
    fn from_iter<I: IntoIterator<Item = RecordOutcome>>(iter: I) -> Self {
        let mut report = SyncReport::default();
        for outcome in iter {
            report.total += 1;
            match outcome {
                RecordOutcome::Updated { id } => report.updated.push(id),
                RecordOutcome::WouldUpdate { id, payload } => {
                    report.would_update.push(WouldUpdateRecord { id, payload });
                }
                RecordOutcome::Skipped { id, reason } => {
                    report.skipped.push(SkippedRecord { id, reason });
                }
            }
        }
        report
    }
}

/// Orchestrates one full sync pass.
pub struct SyncService {
    airtable: AirtableClient,
    zenchette: ZenchetteClient,
    dry_run: bool,
}

impl SyncService {
    pub fn new(config: &Config) -> SyncResult<Self> {
        Ok(Self {
            airtable: AirtableClient::new(config)?,
            zenchette: ZenchetteClient::new(config)?,
            dry_run: config.dry_run,
        })
    }

    /// Run one sync pass over every candidate record.
    ///
    /// # Errors
    ///
    /// Only a failure of the initial batch read propagates. Per-record
    /// lookup, transform, and write failures are folded into the report as
    /// skips and the batch continues.
    pub async fn run(&self) -> SyncResult<SyncReport> {
        let candidates = self.airtable.fetch_all().await?;

        if candidates.is_empty() {
            info!("no candidate records in Airtable");
            return Ok(SyncReport::default());
        }

        let total = candidates.len();
        info!(total, dry_run = self.dry_run, "beginning record update");

        let mut outcomes = Vec::with_capacity(total);
        for (index, record) in candidates.iter().enumerate() {
            info!(
                record_id = %record.id,
                site = record.site_name().unwrap_or("<unset>"),
                "{}/{} fetching site profile",
                index + 1,
                total
            );
            outcomes.push(self.process_record(record).await);
        }

        let report: SyncReport = outcomes.into_iter().collect();
        info!(
            total = report.total,
            updated = report.updated.len(),
            would_update = report.would_update.len(),
            skipped = report.skipped.len(),
            "sync complete"
        );
        Ok(report)
    }

    /// Drive one record to its terminal outcome. Never returns an error;
    /// every failure is classified into a skip reason.
    async fn process_record(&self, record: &Record) -> RecordOutcome {
        let site = record.site_name().unwrap_or_default();

        let profile = match self.zenchette.lookup(site).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(record_id = %record.id, site, error = %e, "site profile lookup failed");
                return RecordOutcome::Skipped {
                    id: record.id.clone(),
                    reason: SkipReason::LookupFailed,
                };
            }
        };

        let payload = match to_update_payload(&profile) {
            Ok(payload) => payload,
            Err(_) => {
                warn!(record_id = %record.id, site, "no usable site data");
                return RecordOutcome::Skipped {
                    id: record.id.clone(),
                    reason: SkipReason::NoData,
                };
            }
        };

        if self.dry_run {
            info!(record_id = %record.id, ?payload, "dry run, write suppressed");
            return RecordOutcome::WouldUpdate {
                id: record.id.clone(),
                payload,
            };
        }

        match self.airtable.update_record(&record.id, &payload).await {
            Ok(updated) => {
                info!(record_id = %updated.id, "updated in Airtable");
                RecordOutcome::Updated {
                    id: record.id.clone(),
                }
            }
            Err(e) => {
                warn!(record_id = %record.id, error = %e, "Airtable update failed");
                RecordOutcome::Skipped {
                    id: record.id.clone(),
                    reason: SkipReason::WriteFailed,
                }
            }
        }
    }
}
