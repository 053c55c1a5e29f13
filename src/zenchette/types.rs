//! Zenchette site-profile response types.

use serde::Deserialize;

/// Attribute mapping returned by the Zenchette site lookup.
///
/// Every attribute is optional. A body with an explicit `error` key, or
/// with none of the known attributes at all (including an entirely empty
/// body), is the "unavailable" sentinel — Zenchette has nothing usable for
/// the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteProfile {
    pub seller_tool_enabled: Option<bool>,
    pub live: Option<bool>,
    pub fb_tool_enabled: Option<bool>,
    pub fb_managed_client: Option<bool>,
    pub real_leads_client: Option<bool>,
    pub company_started: Option<String>,
    pub check_leads: Option<bool>,
    /// Error marker; its value is not interpreted, only its presence.
    pub error: Option<serde_json::Value>,
}

impl SiteProfile {
    /// True when this profile is the "nothing usable" sentinel.
    pub fn is_unavailable(&self) -> bool {
        self.error.is_some()
            || (self.seller_tool_enabled.is_none()
                && self.live.is_none()
                && self.fb_tool_enabled.is_none()
                && self.fb_managed_client.is_none()
                && self.real_leads_client.is_none()
                && self.company_started.is_none()
                && self.check_leads.is_none())
    }
}
