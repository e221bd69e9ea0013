//! Login handler.
//!
//! ```text
//! POST /login username=ana&password=secret123
//! ```

use std::collections::HashMap;

use actix_web::{post, web};
use tracing::info;

use crate::domain::{LoginForm, LoginResult};
use crate::models::{ApiResult, Error};

/// Accept a url-encoded login form and echo the username.
///
/// No credential store is consulted.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login accepted", body = LoginResult),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(form: web::Form<HashMap<String, String>>) -> ApiResult<web::Json<LoginResult>> {
    let result = LoginForm::validate(&form.into_inner())?.accept();
    info!(username = %result.username, "login accepted");
    Ok(web::Json(result))
}
