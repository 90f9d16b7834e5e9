// src/handlers/videos.rs
use crate::domain::video::{Platform, VideoViewer};
use crate::errors::{ResultResp, ServerError};
use crate::responses::html_response;
use crate::templates::components::{showcase_grid, video_modal};
use std::collections::HashMap;

/// `?platform=tiktok|instagram|youtube|all`; missing means all.
pub fn grid(query: &HashMap<String, String>) -> ResultResp {
    let platform = match query.get("platform").map(String::as_str) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            Platform::parse(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown platform: {raw}")))?,
        ),
    };

    html_response(showcase_grid(platform))
}

pub fn detail(raw_id: &str) -> ResultResp {
    let id: u32 = raw_id.parse().map_err(|_| ServerError::NotFound)?;

    match VideoViewer::open(id) {
        VideoViewer::Closed => Err(ServerError::NotFound),
        viewer => html_response(video_modal(&viewer)),
    }
}

pub fn close() -> ResultResp {
    html_response(video_modal(&VideoViewer::Closed))
}
