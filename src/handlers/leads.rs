// src/handlers/leads.rs
use crate::domain::lead::LeadRecord;
use crate::errors::ResultResp;
use crate::leads::SubmissionError;
use crate::responses::json_response;
use crate::state::AppState;
use serde_json::json;

fn config_error(e: SubmissionError) -> ResultResp {
    tracing::error!("Lead store misconfigured: {e}");
    json_response(500, &json!({ "error": "Server configuration error." }))
}

/// `POST /api/save-lead`: relay a JSON lead to the lead store.
///
/// Configuration is checked before the body is looked at, so a server
/// without secrets answers 500 to every request.
pub fn save_lead(body: &[u8], state: &AppState) -> ResultResp {
    if let Err(e) = state.leads.check_config() {
        return config_error(e);
    }

    let lead: LeadRecord = match serde_json::from_slice(body) {
        Ok(lead) => lead,
        Err(e) => {
            tracing::warn!("Rejected lead payload: {e}");
            return json_response(
                400,
                &json!({ "error": "Invalid lead payload", "details": e.to_string() }),
            );
        }
    };

    match state.leads.submit(&lead) {
        Ok(confirmation) => json_response(
            200,
            &json!({
                "success": true,
                "id": confirmation.id,
                "record": confirmation.record,
            }),
        ),
        Err(e) if e.is_config() => config_error(e),
        Err(e) => {
            tracing::error!("Error saving lead: {e}");
            json_response(
                500,
                &json!({ "error": "Failed to save lead", "details": e.to_string() }),
            )
        }
    }
}
