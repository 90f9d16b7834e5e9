// src/domain/lead.rs

use crate::domain::schedule::CalendarDay;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source tag for leads coming out of the booking modal.
pub const BOOKING_MODAL_SOURCE: &str = "booking_modal";

/// Social platforms asked for in the contact step.
pub const SOCIAL_PLATFORMS: [(&str, &str); 4] = [
    ("instagram", "Instagram"),
    ("tiktok", "TikTok"),
    ("youtube", "YouTube"),
    ("twitter", "Twitter/X"),
];

/// Either free text (older clients post a single string) or a
/// platform → handle map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Socials {
    Text(String),
    Handles(BTreeMap<String, String>),
}

impl Socials {
    /// Flattened form used by the tabular store, one `platform: handle` per line.
    pub fn to_display(&self) -> String {
        match self {
            Socials::Text(s) => s.trim().to_string(),
            Socials::Handles(map) => map
                .iter()
                .filter(|(_, handle)| !handle.trim().is_empty())
                .map(|(platform, handle)| format!("{platform}: {}", handle.trim()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub business_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<CalendarDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}
