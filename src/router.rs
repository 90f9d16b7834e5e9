use crate::booking::form::{parse_form, FormData};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{booking, leads, videos};
use crate::responses::{html_response, text_response};
use crate::state::AppState;
use crate::templates;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest request body we bother reading.
const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/health") => text_response(200, "ok"),

        ("GET", "/videos") => videos::grid(&parse_query(&req)),
        ("GET", "/videos/close") => videos::close(),
        ("GET", p) if p.starts_with("/videos/") => videos::detail(&p["/videos/".len()..]),

        ("GET", "/booking/open") => booking::open(state),
        ("POST", "/booking/close") => booking::close(&read_form(req)?, state),
        ("POST", "/booking/field") => booking::field(&read_form(req)?, state),
        ("POST", "/booking/next") => booking::next(&read_form(req)?, state),
        ("POST", "/booking/back") => booking::back(&read_form(req)?, state),
        ("POST", "/booking/date") => booking::select_date(&read_form(req)?, state),
        ("POST", "/booking/time") => booking::select_time(&read_form(req)?, state),
        ("POST", "/booking/submit") => booking::submit(&read_form(req)?, state),

        ("POST", "/api/save-lead") => leads::save_lead(&read_body(req)?, state),
        (_, "/api/save-lead") => Err(ServerError::MethodNotAllowed),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}

fn read_form(req: Request) -> Result<FormData, ServerError> {
    Ok(parse_form(&read_body(req)?))
}
