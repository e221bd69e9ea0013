//! HTTP handlers and the wiring that registers them.

pub mod contact;
pub mod extract;
pub mod health;
pub mod home;
pub mod images;
pub mod login;
pub mod persons;
pub mod shaping;
pub mod state;

use actix_web::web;

pub use self::state::AppState;

/// Register extractor configuration and every API route.
///
/// Application state ([`AppState`]) is provided by the caller.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use people_api::api::{self, AppState};
///
/// let app = App::new()
///     .app_data(web::Data::new(AppState::default()))
///     .configure(api::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extract::json_config())
        .app_data(extract::form_config())
        .app_data(extract::query_config())
        .service(home::home)
        .service(persons::create_person)
        .service(persons::query_person)
        .service(persons::get_person)
        .service(persons::update_person)
        .service(login::login)
        .service(contact::contact)
        .service(images::post_image);
}
