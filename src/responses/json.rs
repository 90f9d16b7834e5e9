use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("Failed to serialize response: {e}");
        ServerError::InternalError
    })?;

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))?;

    Ok(resp)
}
