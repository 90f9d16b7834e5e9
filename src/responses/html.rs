use crate::errors::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

pub fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))?;

    Ok(resp)
}

pub fn text_response(status: u16, body: &'static str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(body))?;

    Ok(resp)
}
