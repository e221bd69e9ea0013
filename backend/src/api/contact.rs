//! Contact form handler.
//!
//! Reads the url-encoded body together with the `User-Agent` header and the
//! `ads` cookie.

use std::collections::HashMap;

use actix_web::http::header;
use actix_web::{HttpRequest, post, web};
use tracing::debug;

use crate::domain::{ContactForm, ContactReceipt, ContactSources};
use crate::models::{ApiResult, Error};

/// Name of the optional advertising cookie.
pub const ADS_COOKIE: &str = "ads";

/// Accept a contact message.
#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Echoed back in the receipt"),
        ("ads" = Option<String>, Cookie, description = "Advertising campaign marker")
    ),
    responses(
        (status = 200, description = "Message accepted", body = ContactReceipt),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["contact"],
    operation_id = "contact"
)]
#[post("/contact")]
pub async fn contact(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
) -> ApiResult<web::Json<ContactReceipt>> {
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    let ads = req.cookie(ADS_COOKIE);
    let contact = ContactForm::validate(&ContactSources {
        form: &form,
        user_agent,
        ads: ads.as_ref().map(|cookie| cookie.value()),
    })?;
    debug!(
        email = %contact.email,
        has_ads_cookie = contact.ads.is_some(),
        "contact message accepted"
    );
    Ok(web::Json(contact.receipt()))
}
