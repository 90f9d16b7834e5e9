// src/leads/capture.rs

use crate::domain::lead::LeadRecord;
use serde::Serialize;

/// What the storage service handed back for a saved lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    /// Raw record as returned upstream.
    pub record: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("lead storage is not configured: {0}")]
    MissingConfig(String),
    #[error("lead storage did not answer within {0} seconds")]
    Timeout(u64),
    #[error("request to lead storage failed: {0}")]
    Transport(String),
    #[error("lead storage rejected the record ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("unexpected response from lead storage: {0}")]
    UnexpectedResponse(String),
}

impl SubmissionError {
    pub fn is_config(&self) -> bool {
        matches!(self, SubmissionError::MissingConfig(_))
    }
}

/// Relays a finished lead to wherever leads are kept.
///
/// Implementations issue one outbound call per `submit` and never retry;
/// the caller decides whether to offer a retry.
pub trait LeadCapture: Send + Sync {
    /// Fails fast when the store cannot be reached at all (missing secrets).
    fn check_config(&self) -> Result<(), SubmissionError> {
        Ok(())
    }

    fn submit(&self, record: &LeadRecord) -> Result<Confirmation, SubmissionError>;
}
