//! Contact form submitted together with a header and a cookie.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::schema::Shape;
use crate::domain::validation::{FieldSource, RawValue, ValidationErrors, validate};

/// Raw contact inputs gathered from the form body, `User-Agent` header and
/// `ads` cookie.
#[derive(Debug, Clone, Copy)]
pub struct ContactSources<'a> {
    pub form: &'a HashMap<String, String>,
    pub user_agent: Option<&'a str>,
    pub ads: Option<&'a str>,
}

impl FieldSource for ContactSources<'_> {
    fn raw(&self, name: &str) -> Option<RawValue<'_>> {
        match name {
            "user_agent" => self.user_agent.map(RawValue::Text),
            "ads" => self.ads.map(RawValue::Text),
            _ => self.form.raw(name),
        }
    }
}

/// Validated contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Ada", max_length = 20)]
    pub first_name: String,
    #[schema(example = "Lovelace", max_length = 20)]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "I would like to hear about engines.", min_length = 20)]
    pub message: String,
    #[serde(skip)]
    pub user_agent: Option<String>,
    #[serde(skip)]
    pub ads: Option<String>,
}

impl ContactForm {
    /// Validate the form, header and cookie together.
    ///
    /// # Errors
    /// Returns every failing field.
    pub fn validate(sources: &ContactSources<'_>) -> Result<Self, ValidationErrors> {
        let mut record = validate(Shape::ContactForm, sources)?;
        Ok(Self {
            first_name: record.require_text("first_name")?,
            last_name: record.require_text("last_name")?,
            email: record.require_text("email")?,
            message: record.require_text("message")?,
            user_agent: record.take_text("user_agent"),
            ads: record.take_text("ads"),
        })
    }

    /// Receipt echoing the submitted `User-Agent`.
    pub fn receipt(self) -> ContactReceipt {
        ContactReceipt {
            user_agent: self.user_agent,
        }
    }
}

/// Response to an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(example = "curl/8.5.0")]
    pub user_agent: Option<String>,
}
