//! Domain records, schema declarations and validation.
//!
//! Purpose: keep request rules transport agnostic. Inbound HTTP adapters
//! gather raw input, hand it to the validators here and map the typed results
//! or [`ValidationErrors`] onto responses.
//!
//! Public surface:
//! - [`schema`]: field constraint declarations per [`Shape`].
//! - [`validation`]: coercion engine producing typed records or failures.
//! - Person, location, login, contact and upload records.
//! - [`KnownIds`]: immutable identifier set used by lookups.

pub mod contact;
pub mod hair_color;
pub mod known_ids;
pub mod login;
pub mod person;
pub mod schema;
pub mod upload;
pub mod validation;

pub use self::contact::{ContactForm, ContactReceipt, ContactSources};
pub use self::hair_color::HairColor;
pub use self::known_ids::{KnownIds, PersonLookupError};
pub use self::login::{LOGIN_MESSAGE, LoginForm, LoginResult};
pub use self::person::{Location, Person, PersonBase, PersonId, PersonQuery, PersonUpdate};
pub use self::schema::Shape;
pub use self::upload::ImageMetadata;
pub use self::validation::{FieldError, ValidationErrorKind, ValidationErrors};
