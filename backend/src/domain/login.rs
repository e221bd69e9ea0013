//! Stub login: validate credentials and echo the username back.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::schema::Shape;
use crate::domain::validation::{FieldSource, ValidationErrors, validate};

/// Confirmation text returned by every successful login.
pub const LOGIN_MESSAGE: &str = "Login Successfully!";

/// Url-encoded login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginForm {
    #[schema(example = "ana", max_length = 20)]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

impl LoginForm {
    /// Validate raw form fields.
    ///
    /// # Errors
    /// Returns every failing field.
    pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<Self, ValidationErrors> {
        let mut record = validate(Shape::LoginForm, source)?;
        Ok(Self {
            username: record.require_text("username")?,
            password: record.require_text("password")?,
        })
    }

    /// Accept the form. No credential store is consulted; the password is
    /// dropped here.
    pub fn accept(self) -> LoginResult {
        LoginResult {
            username: self.username,
            message: LOGIN_MESSAGE.to_owned(),
        }
    }
}

/// Login confirmation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResult {
    #[schema(example = "ana", max_length = 20)]
    pub username: String,
    #[schema(example = "Login Successfully!")]
    pub message: String,
}
