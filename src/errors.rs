use astra::Response;

/// Errors originating from the server logic
/// (routing, malformed requests, response building).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::PayloadTooLarge => 413,
            ServerError::InternalError => 500,
        }
    }
}

impl From<http::Error> for ServerError {
    fn from(_: http::Error) -> Self {
        ServerError::InternalError
    }
}
