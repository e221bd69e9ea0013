//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP operation and the schemas they exchange.
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::api::home::Greeting;
use crate::api::images::ImageUpload;
use crate::api::persons::{PersonUpdateRequest, UpdatedPerson};
use crate::domain::{
    ContactForm, ContactReceipt, HairColor, ImageMetadata, Location, LoginForm, LoginResult,
    Person, PersonBase, PersonQuery,
};
use crate::models::{Error, ErrorCode};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People API",
        description = "Person and location records with request validation, a stub login, a contact form and image upload metadata."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::home::home,
        crate::api::persons::create_person,
        crate::api::persons::query_person,
        crate::api::persons::get_person,
        crate::api::persons::update_person,
        crate::api::login::login,
        crate::api::contact::contact,
        crate::api::images::post_image,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        Greeting,
        HairColor,
        Location,
        PersonBase,
        Person,
        PersonQuery,
        PersonUpdateRequest,
        UpdatedPerson,
        LoginForm,
        LoginResult,
        ContactForm,
        ContactReceipt,
        ImageUpload,
        ImageMetadata,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "home", description = "Greeting"),
        (name = "persons", description = "Person creation, lookup and update"),
        (name = "users", description = "Stub login"),
        (name = "contact", description = "Contact form"),
        (name = "images", description = "Image upload metadata"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
