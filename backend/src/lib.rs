//! People API library: request validation, response shaping and the HTTP
//! handlers of a small person/location service.

pub mod api;
pub mod config;
pub mod doc;
pub mod domain;
pub mod middleware;
pub mod models;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
