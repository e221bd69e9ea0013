//! Person handlers.
//!
//! ```text
//! POST /person/new {"first_name":"Ana","last_name":"Diaz","age":30,"password":"secret123"}
//! GET  /person/detail?name=Ana&age=30
//! GET  /person/detail/3
//! PUT  /person/3 {"person":{...},"location":{"city":"Lima","state":"Lima","country":"Peru"}}
//! ```
//!
//! Bodies are taken as raw JSON objects so every field failure is reported at
//! once instead of stopping at the first serde error.

use std::collections::HashMap;

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::api::shaping;
use crate::api::state::AppState;
use crate::domain::{
    Location, Person, PersonBase, PersonId, PersonQuery, PersonUpdate, ValidationErrors,
};
use crate::models::{ApiResult, Error};

/// Request body of `PUT /person/{person_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonUpdateRequest {
    pub person: Person,
    pub location: Location,
}

/// Flat merge returned by `PUT /person/{person_id}`.
///
/// `password` is present unless credential stripping is configured.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedPerson {
    #[serde(flatten)]
    pub person: PersonBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub location: Location,
}

/// Create a person and return its public projection.
#[utoipa::path(
    post,
    path = "/person/new",
    request_body = Person,
    responses(
        (status = 201, description = "Person accepted", body = PersonBase),
        (status = 400, description = "Invalid request", body = Error),
        (status = 413, description = "Body too large", body = Error)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/person/new")]
pub async fn create_person(payload: web::Json<Map<String, Value>>) -> ApiResult<HttpResponse> {
    let person = Person::validate(&payload.into_inner())?;
    let base = person.into_base();
    debug!(first_name = %base.first_name, age = base.age, "person created");
    Ok(shaping::created(&base))
}

/// Echo the optional filters as `{<name>: <age>}`.
///
/// A missing `name` is keyed as `"null"`; a missing `age` echoes as `null`.
#[utoipa::path(
    get,
    path = "/person/detail",
    params(
        ("name" = Option<String>, Query, description = "Name filter, 1 to 50 characters"),
        ("age" = Option<String>, Query, description = "Age filter kept as text, 1 to 20 characters")
    ),
    responses(
        (status = 200, description = "Age filter keyed by name filter",
            body = HashMap<String, Option<String>>, example = json!({"Ana": "30"})),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["persons"],
    operation_id = "queryPersonDetail"
)]
#[get("/person/detail")]
pub async fn query_person(
    query: web::Query<HashMap<String, String>>,
) -> ApiResult<web::Json<HashMap<String, Option<String>>>> {
    let query = PersonQuery::validate(&query.into_inner())?;
    Ok(web::Json(shaping::query_echo(query)))
}

/// Confirm that a person exists.
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    params(("person_id" = i64, Path, description = "Person identifier, zero or greater")),
    responses(
        (status = 200, description = "Person exists", body = HashMap<String, String>,
            example = json!({ "3": "It exist!" })),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown person", body = Error)
    ),
    tags = ["persons"],
    operation_id = "getPersonById"
)]
#[get("/person/detail/{person_id}")]
pub async fn get_person(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> ApiResult<web::Json<HashMap<String, &'static str>>> {
    let id = PersonId::for_lookup(&path)?;
    state.known_ids.ensure_exists(id.get())?;
    Ok(web::Json(shaping::existence(id)))
}

/// Merge a person with a location.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    params(("person_id" = i64, Path, description = "Person identifier, greater than zero")),
    request_body = PersonUpdateRequest,
    responses(
        (status = 200, description = "Merged person and location", body = UpdatedPerson),
        (status = 400, description = "Invalid request", body = Error),
        (status = 413, description = "Body too large", body = Error)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/person/{person_id}")]
pub async fn update_person(
    path: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
    state: web::Data<AppState>,
) -> ApiResult<web::Json<Map<String, Value>>> {
    let (id, update) = both(
        PersonId::for_update(&path),
        PersonUpdate::validate(&payload.into_inner()),
    )?;
    let merged = update
        .merge()
        .map_err(|err| Error::internal(format!("failed to merge update: {err}")))?;
    info!(person_id = %id, credentials = ?state.credentials, "person updated");
    Ok(web::Json(state.credentials.apply(merged)))
}

/// Combine two validations, reporting the failures of both.
fn both<A, B>(
    a: Result<A, ValidationErrors>,
    b: Result<B, ValidationErrors>,
) -> Result<(A, B), ValidationErrors> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(mut errors), Err(more)) => {
            errors.extend(more);
            Err(errors)
        }
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
    }
}
