// src/booking/form.rs
//
// The server keeps no booking state: the modal posts every value it holds
// and the session is rebuilt from the form on each request.

use crate::booking::session::{BookingSession, ContactDetails, Step};
use crate::booking::validation::Field;
use crate::domain::lead::SOCIAL_PLATFORMS;
use crate::domain::schedule::CalendarDay;
use std::collections::HashMap;

pub const STEP: &str = "step";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const BUSINESS_TYPE: &str = "business_type";
pub const REVENUE: &str = "revenue";
pub const GOALS: &str = "goals";
pub const SELECTED_DATE: &str = "selected_date";
pub const SELECTED_TIME: &str = "selected_time";
/// Which field the user just edited (see `/booking/field`).
pub const CHANGED: &str = "changed";
/// Comma-separated fields whose error the view is currently showing.
pub const SHOWN_ERRORS: &str = "shown_errors";

pub type FormData = HashMap<String, String>;

pub fn parse_form(body: &[u8]) -> FormData {
    url::form_urlencoded::parse(body).into_owned().collect()
}

fn value<'a>(form: &'a FormData, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or("")
}

/// Rebuilds the session the modal was showing when it posted.
pub fn session_from_form(form: &FormData) -> BookingSession {
    let step = value(form, STEP)
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Step::from_number)
        .unwrap_or(Step::ContactInfo);

    let selected_date = CalendarDay::parse_iso(value(form, SELECTED_DATE));
    let selected_time = form.get(SELECTED_TIME).map(String::as_str);

    let session = BookingSession::restore(
        step,
        ContactDetails::default(),
        selected_date,
        selected_time,
    )
    .with_name(value(form, NAME))
    .with_email(value(form, EMAIL))
    .with_business_type(value(form, BUSINESS_TYPE))
    .with_revenue(value(form, REVENUE))
    .with_goals(value(form, GOALS));

    SOCIAL_PLATFORMS
        .iter()
        .fold(session, |s, (key, _)| s.with_social(key, value(form, key)))
}

pub fn shown_errors(form: &FormData) -> Vec<Field> {
    value(form, SHOWN_ERRORS)
        .split(',')
        .filter_map(|f| Field::parse(f.trim()))
        .collect()
}

pub fn encode_errors(session: &BookingSession) -> String {
    session
        .errors()
        .keys()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Values the step-2 view must carry forward as hidden inputs.
pub fn carried_fields(session: &BookingSession) -> Vec<(&'static str, String)> {
    let c = session.contact();
    let mut fields = vec![
        (STEP, session.step().number().to_string()),
        (NAME, c.name.clone()),
        (EMAIL, c.email.clone()),
        (
            BUSINESS_TYPE,
            c.business_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
        ),
        (
            REVENUE,
            c.revenue.map(|r| r.code().to_string()).unwrap_or_default(),
        ),
        (GOALS, c.goals.clone()),
    ];

    for (key, _) in SOCIAL_PLATFORMS {
        if let Some(handle) = c.socials.get(key) {
            fields.push((key, handle.clone()));
        }
    }

    if let Some(day) = session.selected_date() {
        fields.push((SELECTED_DATE, day.full_date.clone()));
    }
    if let Some(time) = session.selected_time() {
        fields.push((SELECTED_TIME, time.to_string()));
    }

    fields
}
