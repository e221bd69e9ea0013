//! Extractor configuration mapping framework payload rejections onto the API
//! error envelope.

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, web};
use tracing::warn;

use crate::models::Error;

/// JSON bodies: malformed documents become `malformed_body`, oversize ones 413.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| reject(req, json_error(&err)))
}

/// Url-encoded form bodies.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| reject(req, form_error(&err)))
}

/// Query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| reject(req, query_error(&err)))
}

fn reject(req: &HttpRequest, error: Error) -> actix_web::Error {
    warn!(
        method = %req.method(),
        path = %req.path(),
        code = ?error.code,
        message = %error.message,
        "request payload rejected by extractor"
    );
    error.into()
}

fn json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            Error::payload_too_large(*limit)
        }
        JsonPayloadError::ContentType => {
            Error::malformed_body("expected a body with content type application/json")
        }
        JsonPayloadError::Deserialize(inner) => {
            Error::malformed_body(format!("invalid JSON body: {inner}"))
        }
        other => Error::malformed_body(format!("unreadable JSON body: {other}")),
    }
}

fn form_error(err: &UrlencodedError) -> Error {
    match err {
        UrlencodedError::Overflow { limit, .. } => Error::payload_too_large(*limit),
        UrlencodedError::ContentType => Error::malformed_body(
            "expected a body with content type application/x-www-form-urlencoded",
        ),
        other => Error::malformed_body(format!("invalid form body: {other}")),
    }
}

fn query_error(err: &QueryPayloadError) -> Error {
    Error::malformed_body(format!("invalid query string: {err}"))
}
