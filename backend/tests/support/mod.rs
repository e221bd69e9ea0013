//! Shared helpers for the HTTP integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so the
//! app factory lives here rather than being repeated per file.

#![allow(
    dead_code,
    reason = "each integration test binary uses a different subset of these helpers"
)]

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use people_api::Trace;
use people_api::api::{self, AppState};
use serde_json::Value;

/// Build the API service around `state`, wrapped in the trace middleware.
pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(api::configure),
    )
    .await
}

/// `details.errors[].field` paths of an error envelope, in order.
pub fn failed_fields(body: &Value) -> Vec<String> {
    body.pointer("/details/errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("field").and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Failure code reported for `field` in an error envelope.
pub fn code_for<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.pointer("/details/errors")
        .and_then(Value::as_array)?
        .iter()
        .find(|e| e.get("field").and_then(Value::as_str) == Some(field))
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
}
