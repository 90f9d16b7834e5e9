// src/state.rs
use crate::leads::LeadCapture;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Shared by every worker; read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<dyn LeadCapture>,
    pub confirm_delay: Duration,
    /// Source of "now" for lead timestamps and the booking calendar.
    pub clock: fn() -> DateTime<Utc>,
}

impl AppState {
    pub fn new(leads: Arc<dyn LeadCapture>, confirm_delay: Duration) -> Self {
        Self {
            leads,
            confirm_delay,
            clock: Utc::now,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
