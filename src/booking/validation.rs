// src/booking/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // something@something.something, no whitespace
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles")
});

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const BUSINESS_TYPE_REQUIRED: &str = "Please select your business type";
pub const DATE_REQUIRED: &str = "Please select a date";
pub const DATE_FIRST: &str = "Please select a date first";
pub const TIME_REQUIRED: &str = "Please select a time";

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    BusinessType,
    Date,
    Time,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::BusinessType => "businessType",
            Field::Date => "date",
            Field::Time => "time",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "email" => Some(Field::Email),
            "businessType" | "business_type" => Some(Field::BusinessType),
            "date" | "selected_date" => Some(Field::Date),
            "time" | "selected_time" => Some(Field::Time),
            _ => None,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}
