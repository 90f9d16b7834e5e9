use crate::domain::lead::LeadRecord;
use crate::leads::{Confirmation, LeadCapture, SubmissionError};
use crate::state::AppState;
use astra::{Body, Response};
use chrono::{DateTime, TimeZone, Utc};
use http::{Method, Request};
use serde_json::json;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Lead store that remembers what it was sent instead of calling out.
#[derive(Default)]
pub struct FakeLeads {
    pub received: Mutex<Vec<LeadRecord>>,
    pub fail: bool,
}

impl FakeLeads {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<LeadRecord> {
        self.received.lock().unwrap().clone()
    }
}

impl LeadCapture for FakeLeads {
    fn submit(&self, record: &LeadRecord) -> Result<Confirmation, SubmissionError> {
        self.received.lock().unwrap().push(record.clone());
        if self.fail {
            return Err(SubmissionError::Rejected {
                status: 422,
                body: "INVALID_VALUE_FOR_COLUMN".into(),
            });
        }
        Ok(Confirmation {
            id: "recTEST123".into(),
            created_time: Some("2024-06-05T14:30:00.000Z".into()),
            record: json!({ "id": "recTEST123", "fields": { "email": record.email } }),
        })
    }
}

/// Wednesday 5 June 2024, 14:30 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 5, 14, 30, 0).unwrap()
}

pub fn test_state(leads: Arc<dyn LeadCapture>) -> AppState {
    AppState {
        leads,
        confirm_delay: Duration::from_millis(2000),
        clock: fixed_now,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
