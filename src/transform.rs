//! Mapping from a Zenchette site profile to Airtable field updates.
//!
//! This is the single place where "what the profile means" is encoded.
//! Pure and deterministic: no I/O, and every payload carries the same
//! seven fields no matter which source attributes were present.

use serde::Serialize;

use crate::error::{SyncError, SyncResult};
use crate::zenchette::SiteProfile;

/// The fixed field set this sync maintains on a record. Serializes to the
/// Airtable column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePayload {
    #[serde(rename = "Seller Lead Tool")]
    pub seller_lead_tool: &'static str,
    #[serde(rename = "Site Live")]
    pub site_live: &'static str,
    #[serde(rename = "Facebook Tool")]
    pub facebook_tool: &'static str,
    #[serde(rename = "FB Managed")]
    pub fb_managed: &'static str,
    #[serde(rename = "PPC")]
    pub ppc: &'static str,
    /// Copied through verbatim; serializes as `null` when absent.
    #[serde(rename = "Start Date")]
    pub start_date: Option<String>,
    #[serde(rename = "CRM - DB Upload")]
    pub crm_db_upload: &'static str,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

/// Derive the field updates for one record from its site profile.
///
/// Fails with [`SyncError::DataUnavailable`] when the profile is the
/// unavailable sentinel. Absent boolean attributes render as `NO`.
/// `CRM - DB Upload` is the negation of `checkLeads`: when the leads check
/// already happened no manual DB upload is needed.
pub fn to_update_payload(profile: &SiteProfile) -> SyncResult<UpdatePayload> {
    if profile.is_unavailable() {
        return Err(SyncError::DataUnavailable);
    }

    Ok(UpdatePayload {
        seller_lead_tool: yes_no(profile.seller_tool_enabled.unwrap_or(false)),
        site_live: yes_no(profile.live.unwrap_or(false)),
        facebook_tool: yes_no(profile.fb_tool_enabled.unwrap_or(false)),
        fb_managed: yes_no(profile.fb_managed_client.unwrap_or(false)),
        ppc: yes_no(profile.real_leads_client.unwrap_or(false)),
        start_date: profile.company_started.clone(),
        crm_db_upload: yes_no(!profile.check_leads.unwrap_or(false)),
    })
}
