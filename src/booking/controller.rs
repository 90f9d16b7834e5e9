// src/booking/controller.rs

use crate::booking::session::BookingSession;
use crate::leads::{Confirmation, LeadCapture, SubmissionError};
use chrono::{DateTime, Utc};
use std::time::Duration;

pub const SUBMISSION_FAILED: &str =
    "We couldn't book your call just now. Please check your details and try again.";
pub const BOOKING_UNAVAILABLE: &str =
    "Online booking is unavailable right now. Please try again later.";

fn banner_for(error: &SubmissionError) -> &'static str {
    if error.is_config() {
        BOOKING_UNAVAILABLE
    } else {
        SUBMISSION_FAILED
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Saved; the modal shows the confirmation, then closes.
    Confirmed {
        confirmation: Confirmation,
        close_after: Duration,
    },
    /// Validation stopped the submission before any network call.
    Incomplete(BookingSession),
    /// The lead capture failed; the session is intact so the user can retry.
    Failed(BookingSession),
}

pub struct BookingController<'a> {
    leads: &'a dyn LeadCapture,
    confirm_delay: Duration,
}

impl<'a> BookingController<'a> {
    pub fn new(leads: &'a dyn LeadCapture, confirm_delay: Duration) -> Self {
        Self {
            leads,
            confirm_delay,
        }
    }

    pub fn submit(&self, session: BookingSession, now: DateTime<Utc>) -> SubmitOutcome {
        let retry = session.clone();
        let lead = match session.finish(now) {
            Ok(lead) => lead,
            Err(session) => return SubmitOutcome::Incomplete(session),
        };

        match self.leads.submit(&lead) {
            Ok(confirmation) => {
                tracing::info!(record_id = %confirmation.id, "Booking submitted");
                SubmitOutcome::Confirmed {
                    confirmation,
                    close_after: self.confirm_delay,
                }
            }
            Err(error) => {
                tracing::error!("Booking submission failed: {error}");
                SubmitOutcome::Failed(retry.with_submission_error(banner_for(&error)))
            }
        }
    }
}
