// src/domain/schedule.rs

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Hourly call slots offered in the scheduling step (EST).
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

/// How far ahead the calendar looks, and how many weekdays it shows.
pub const LOOKAHEAD_DAYS: i64 = 21;
pub const MAX_CALENDAR_DAYS: usize = 12;

pub fn parse_time_slot(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    TIME_SLOTS.iter().copied().find(|slot| *slot == raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    Podcaster,
    Streamer,
    ContentCreator,
    BusinessOwner,
    Influencer,
    CoachConsultant,
    Agency,
    EcommerceBrand,
    SaasCompany,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 10] = [
        BusinessType::Podcaster,
        BusinessType::Streamer,
        BusinessType::ContentCreator,
        BusinessType::BusinessOwner,
        BusinessType::Influencer,
        BusinessType::CoachConsultant,
        BusinessType::Agency,
        BusinessType::EcommerceBrand,
        BusinessType::SaasCompany,
        BusinessType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Podcaster => "Podcaster",
            BusinessType::Streamer => "Streamer",
            BusinessType::ContentCreator => "Content Creator",
            BusinessType::BusinessOwner => "Business Owner",
            BusinessType::Influencer => "Influencer",
            BusinessType::CoachConsultant => "Coach/Consultant",
            BusinessType::Agency => "Agency",
            BusinessType::EcommerceBrand => "E-commerce Brand",
            BusinessType::SaasCompany => "SaaS Company",
            BusinessType::Other => "Other",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|t| t.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueRange {
    UpTo1k,
    From1kTo5k,
    From5kTo10k,
    From10kTo25k,
    From25kTo50k,
    Over50k,
}

impl RevenueRange {
    pub const ALL: [RevenueRange; 6] = [
        RevenueRange::UpTo1k,
        RevenueRange::From1kTo5k,
        RevenueRange::From5kTo10k,
        RevenueRange::From10kTo25k,
        RevenueRange::From25kTo50k,
        RevenueRange::Over50k,
    ];

    /// Value stored with the lead.
    pub fn code(self) -> &'static str {
        match self {
            RevenueRange::UpTo1k => "0-1k",
            RevenueRange::From1kTo5k => "1k-5k",
            RevenueRange::From5kTo10k => "5k-10k",
            RevenueRange::From10kTo25k => "10k-25k",
            RevenueRange::From25kTo50k => "25k-50k",
            RevenueRange::Over50k => "50k+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RevenueRange::UpTo1k => "$0 - $1,000",
            RevenueRange::From1kTo5k => "$1,000 - $5,000",
            RevenueRange::From5kTo10k => "$5,000 - $10,000",
            RevenueRange::From10kTo25k => "$10,000 - $25,000",
            RevenueRange::From25kTo50k => "$25,000 - $50,000",
            RevenueRange::Over50k => "$50,000+",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|r| r.code() == raw)
    }
}

/// A bookable day as shown on the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    /// Short month label, e.g. "Jun".
    pub month: String,
    /// Short weekday label, e.g. "Mon".
    pub weekday: String,
    /// ISO `YYYY-MM-DD`.
    pub full_date: String,
}

impl CalendarDay {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            month: date.format("%b").to_string(),
            weekday: date.format("%a").to_string(),
            full_date: date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn parse_iso(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(Self::from_date)
    }
}

/// Upcoming weekdays starting tomorrow, capped at [`MAX_CALENDAR_DAYS`].
pub fn upcoming_business_days(today: NaiveDate) -> Vec<CalendarDay> {
    (1..=LOOKAHEAD_DAYS)
        .map(|offset| today + Duration::days(offset))
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .take(MAX_CALENDAR_DAYS)
        .map(CalendarDay::from_date)
        .collect()
}
