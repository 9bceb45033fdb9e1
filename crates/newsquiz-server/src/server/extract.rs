//! Request extractors that report failures through [`Error`]

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::Error;

/// JSON body extractor; undecodable bodies become a structured `invalid_request` error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonSyntaxError(_) => format!("Malformed JSON: {}", rejection.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Expected a request with `Content-Type: application/json`".to_string()
            }
            _ => rejection.body_text(),
        };
        Error::invalid_request(message)
    }
}
