// src/booking/session.rs

use crate::booking::validation::{
    email_error, Field, FieldErrors, BUSINESS_TYPE_REQUIRED, DATE_FIRST, DATE_REQUIRED,
    TIME_REQUIRED,
};
use crate::domain::lead::{LeadRecord, Socials, BOOKING_MODAL_SOURCE};
use crate::domain::schedule::{parse_time_slot, BusinessType, CalendarDay, RevenueRange};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ContactInfo,
    Scheduling,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::ContactInfo => 1,
            Step::Scheduling => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::ContactInfo),
            2 => Some(Step::Scheduling),
            _ => None,
        }
    }
}

/// Everything entered in the contact step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub business_type: Option<BusinessType>,
    /// platform key → handle or URL
    pub socials: BTreeMap<String, String>,
    pub revenue: Option<RevenueRange>,
    pub goals: String,
}

/// One open booking modal. Every transition takes the session by value and
/// hands back the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    step: Step,
    contact: ContactDetails,
    selected_date: Option<CalendarDay>,
    selected_time: Option<&'static str>,
    errors: FieldErrors,
    submission_error: Option<String>,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            step: Step::ContactInfo,
            contact: ContactDetails::default(),
            selected_date: None,
            selected_time: None,
            errors: FieldErrors::new(),
            submission_error: None,
        }
    }

    /// Rebuilds a session from values carried by the modal's form.
    /// Errors are never carried over; a time without a date is dropped.
    pub fn restore(
        step: Step,
        contact: ContactDetails,
        selected_date: Option<CalendarDay>,
        selected_time: Option<&str>,
    ) -> Self {
        let selected_time = selected_date
            .as_ref()
            .and(selected_time)
            .and_then(parse_time_slot);
        Self {
            step,
            contact,
            selected_date,
            selected_time,
            errors: FieldErrors::new(),
            submission_error: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn selected_date(&self) -> Option<&CalendarDay> {
        self.selected_date.as_ref()
    }

    pub fn selected_time(&self) -> Option<&'static str> {
        self.selected_time
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    // --- field edits -------------------------------------------------------

    pub fn with_name(mut self, name: &str) -> Self {
        self.contact.name = name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.contact.email = email.to_string();
        self.errors.remove(&Field::Email);
        self
    }

    /// Unknown labels leave the business type unset.
    pub fn with_business_type(mut self, label: &str) -> Self {
        self.contact.business_type = BusinessType::from_label(label);
        self.errors.remove(&Field::BusinessType);
        self
    }

    pub fn with_social(mut self, platform: &str, handle: &str) -> Self {
        let handle = handle.trim();
        if handle.is_empty() {
            self.contact.socials.remove(platform);
        } else {
            self.contact
                .socials
                .insert(platform.to_string(), handle.to_string());
        }
        self
    }

    pub fn with_revenue(mut self, code: &str) -> Self {
        self.contact.revenue = RevenueRange::from_code(code);
        self
    }

    pub fn with_goals(mut self, goals: &str) -> Self {
        self.contact.goals = goals.to_string();
        self
    }

    pub fn clear_error(mut self, field: Field) -> Self {
        self.errors.remove(&field);
        self
    }

    /// Re-derives the messages for `fields` from the current values, so a
    /// view rebuilt from its form keeps showing the errors it had.
    pub fn revalidate(mut self, fields: &[Field]) -> Self {
        let mut all = self.contact_errors();
        all.extend(self.schedule_errors());
        self.errors = all
            .into_iter()
            .filter(|(field, _)| fields.contains(field))
            .collect();
        self
    }

    pub fn with_submission_error(mut self, message: impl Into<String>) -> Self {
        self.submission_error = Some(message.into());
        self
    }

    // --- step transitions --------------------------------------------------

    pub fn contact_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(msg) = email_error(&self.contact.email) {
            errors.insert(Field::Email, msg);
        }
        if self.contact.business_type.is_none() {
            errors.insert(Field::BusinessType, BUSINESS_TYPE_REQUIRED);
        }
        errors
    }

    pub fn schedule_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.selected_date.is_none() {
            errors.insert(Field::Date, DATE_REQUIRED);
        }
        if self.selected_time.is_none() {
            errors.insert(Field::Time, TIME_REQUIRED);
        }
        errors
    }

    /// Step 1 → step 2 when the contact details are valid; otherwise stays on
    /// step 1 with the new error set.
    pub fn advance(mut self) -> Self {
        if self.step != Step::ContactInfo {
            return self;
        }
        self.errors = self.contact_errors();
        if self.errors.is_empty() {
            self.step = Step::Scheduling;
        }
        self
    }

    pub fn back(mut self) -> Self {
        if self.step == Step::Scheduling {
            self.step = Step::ContactInfo;
            self.errors.clear();
            self.submission_error = None;
        }
        self
    }

    /// A new date always invalidates the previously picked time.
    pub fn select_date(mut self, day: CalendarDay) -> Self {
        if self.step != Step::Scheduling {
            return self;
        }
        self.selected_date = Some(day);
        self.selected_time = None;
        self.errors.remove(&Field::Date);
        self
    }

    pub fn select_time(mut self, raw: &str) -> Self {
        if self.step != Step::Scheduling {
            return self;
        }
        if self.selected_date.is_none() {
            self.errors.insert(Field::Date, DATE_FIRST);
            return self;
        }
        match parse_time_slot(raw) {
            Some(slot) => {
                self.selected_time = Some(slot);
                self.errors.remove(&Field::Time);
            }
            None => {
                self.selected_time = None;
                self.errors.insert(Field::Time, TIME_REQUIRED);
            }
        }
        self
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Scheduling
            && self.selected_date.is_some()
            && self.selected_time.is_some()
    }

    /// Step 2 → submitted. On failure the session comes back with errors set;
    /// tampered contact details send it back to step 1.
    pub fn finish(mut self, now: DateTime<Utc>) -> Result<LeadRecord, Self> {
        if self.step != Step::Scheduling {
            return Err(self.advance());
        }

        let contact_errors = self.contact_errors();
        if !contact_errors.is_empty() {
            self.step = Step::ContactInfo;
            self.errors = contact_errors;
            return Err(self);
        }

        self.errors = self.schedule_errors();
        if !self.errors.is_empty() {
            return Err(self);
        }

        Ok(self.to_lead(now))
    }

    fn to_lead(&self, now: DateTime<Utc>) -> LeadRecord {
        let c = &self.contact;
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        LeadRecord {
            name: c.name.trim().to_string(),
            email: c.email.clone(),
            business_type: c
                .business_type
                .map(BusinessType::label)
                .unwrap_or_default()
                .to_string(),
            socials: (!c.socials.is_empty()).then(|| Socials::Handles(c.socials.clone())),
            revenue: c.revenue.map(|r| r.code().to_string()),
            selected_date: self.selected_date.clone(),
            selected_time: self.selected_time.map(str::to_string),
            goals: non_empty(&c.goals),
            timestamp: now,
            source: BOOKING_MODAL_SOURCE.to_string(),
        }
    }
}

/// The booking modal: closed, or open with a live session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingModal {
    #[default]
    Closed,
    Open(BookingSession),
}

impl BookingModal {
    pub fn open() -> Self {
        BookingModal::Open(BookingSession::new())
    }

    /// Drops whatever was entered, errors included.
    pub fn close(self) -> Self {
        BookingModal::Closed
    }

    pub fn session(&self) -> Option<&BookingSession> {
        match self {
            BookingModal::Open(session) => Some(session),
            BookingModal::Closed => None,
        }
    }
}
