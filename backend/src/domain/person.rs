//! Person and location records.
//!
//! Purpose: build typed records from validated input and merge a person with a
//! location for updates. None of these records outlive a request.
//!
//! ## Invariants
//! - Names and location fields hold 1 to 50 characters.
//! - `age` lies in `1..=115`.
//! - `password` holds at least 8 characters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::hair_color::HairColor;
use crate::domain::schema::Shape;
use crate::domain::validation::{
    FieldError, FieldSource, PathParam, Record, ValidationErrorKind, ValidationErrors, validate_at,
};

/// Where a person lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[schema(example = "Guadalajara")]
    pub city: String,
    #[schema(example = "Jalisco")]
    pub state: String,
    #[schema(example = "Mexico")]
    pub country: String,
}

impl Location {
    /// Validate a raw location payload.
    ///
    /// # Errors
    /// Returns every failing field.
    ///
    /// # Examples
    /// ```
    /// use people_api::domain::Location;
    /// use serde_json::json;
    ///
    /// let raw = json!({ "city": "Lima", "state": "Lima", "country": "Peru" });
    /// let location = Location::validate(raw.as_object().expect("object")).expect("valid");
    /// assert_eq!(location.city, "Lima");
    /// ```
    pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<Self, ValidationErrors> {
        Self::validate_at(source, None)
    }

    /// Validate a raw location payload embedded under `prefix`.
    ///
    /// # Errors
    /// Returns every failing field with `prefix` prepended to its path.
    pub fn validate_at<S: FieldSource + ?Sized>(
        source: &S,
        prefix: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut record = validate_at(Shape::Location, source, prefix)?;
        Ok(Self {
            city: record.require_text("city")?,
            state: record.require_text("state")?,
            country: record.require_text("country")?,
        })
    }
}

/// Person fields that are safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonBase {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Diaz")]
    pub last_name: String,
    #[schema(example = 30, minimum = 1, maximum = 115)]
    pub age: u8,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

impl PersonBase {
    /// Validate a raw payload carrying only the public person fields.
    ///
    /// # Errors
    /// Returns every failing field.
    pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<Self, ValidationErrors> {
        let mut record = validate_at(Shape::PersonBase, source, None)?;
        Self::from_record(&mut record).map_err(ValidationErrors::from)
    }

    fn from_record(record: &mut Record) -> Result<Self, FieldError> {
        let age = record.require_integer("age")?;
        let age = u8::try_from(age).map_err(|_| {
            let path = record.path("age");
            FieldError::new(
                path.clone(),
                ValidationErrorKind::ValueOutOfRange,
                format!("{path} is out of range"),
            )
        })?;
        let hair_color = record
            .text("hair_color")
            .map(str::parse::<HairColor>)
            .transpose()
            .map_err(|err| {
                FieldError::new(
                    record.path("hair_color"),
                    ValidationErrorKind::InvalidEnumValue,
                    err.to_string(),
                )
            })?;

        Ok(Self {
            first_name: record.require_text("first_name")?,
            last_name: record.require_text("last_name")?,
            age,
            hair_color,
            is_married: record.boolean("is_married"),
        })
    }
}

/// Person as submitted by clients, including the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    #[schema(example = "secret123", min_length = 8)]
    pub password: String,
}

impl Person {
    /// Validate a raw person payload.
    ///
    /// # Errors
    /// Returns every failing field.
    ///
    /// # Examples
    /// ```
    /// use people_api::domain::Person;
    /// use serde_json::json;
    ///
    /// let raw = json!({
    ///     "first_name": "Ana",
    ///     "last_name": "Diaz",
    ///     "age": 30,
    ///     "password": "secret123"
    /// });
    /// let person = Person::validate(raw.as_object().expect("object")).expect("valid");
    /// assert_eq!(person.base.age, 30);
    /// ```
    pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<Self, ValidationErrors> {
        Self::validate_at(source, None)
    }

    /// Validate a raw person payload embedded under `prefix`.
    ///
    /// # Errors
    /// Returns every failing field with `prefix` prepended to its path.
    pub fn validate_at<S: FieldSource + ?Sized>(
        source: &S,
        prefix: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut record = validate_at(Shape::Person, source, prefix)?;
        let password = record.require_text("password")?;
        let base = PersonBase::from_record(&mut record)?;
        Ok(Self { base, password })
    }

    /// Public projection without the credential.
    pub fn into_base(self) -> PersonBase {
        self.base
    }
}

/// Validated inputs of an update: a person and where they live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUpdate {
    pub person: Person,
    pub location: Location,
}

impl PersonUpdate {
    /// Validate the embedded `person` and `location` payloads of an update body
    /// independently.
    ///
    /// Failures from both payloads are reported together. An absent payload is
    /// a single `MissingField` failure and a non-object one a `TypeMismatch`.
    ///
    /// # Errors
    /// Returns every failing field of both payloads.
    pub fn validate(body: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let person = embedded(body, "person")
            .and_then(|raw| Person::validate_at(raw, Some("person")));
        let location = embedded(body, "location")
            .and_then(|raw| Location::validate_at(raw, Some("location")));

        match (person, location) {
            (Ok(person), Ok(location)) => Ok(Self { person, location }),
            (Err(mut errors), Err(more)) => {
                errors.extend(more);
                Err(errors)
            }
            (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
        }
    }

    /// Flatten into one mapping: person fields first, location fields overlaid.
    ///
    /// # Errors
    /// Returns a serialisation error if either record fails to encode.
    pub fn merge(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut merged = to_object(&self.person)?;
        merged.extend(to_object(&self.location)?);
        Ok(merged)
    }
}

/// Optional filters of a person detail query.
///
/// `age` stays text on this route; only its length is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonQuery {
    #[schema(example = "Ana", max_length = 50)]
    pub name: Option<String>,
    #[schema(example = "30", max_length = 20)]
    pub age: Option<String>,
}

impl PersonQuery {
    /// Validate raw query parameters.
    ///
    /// # Errors
    /// Returns every failing parameter.
    pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<Self, ValidationErrors> {
        let mut record = validate_at(Shape::PersonQuery, source, None)?;
        Ok(Self {
            name: record.take_text("name"),
            age: record.take_text("age"),
        })
    }
}

/// Validated `person_id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    const FIELD: &'static str = "person_id";

    /// Parse a lookup identifier; zero is admitted.
    ///
    /// # Errors
    /// Returns a type mismatch for non-integers and a range failure for
    /// negative values.
    ///
    /// # Examples
    /// ```
    /// use people_api::domain::PersonId;
    ///
    /// assert_eq!(PersonId::for_lookup("0").expect("valid").get(), 0);
    /// assert!(PersonId::for_lookup("-1").is_err());
    /// ```
    pub fn for_lookup(raw: &str) -> Result<Self, ValidationErrors> {
        Self::parse(Shape::PersonLookupPath, raw)
    }

    /// Parse an update identifier; it must be strictly positive.
    ///
    /// # Errors
    /// Returns a type mismatch for non-integers and a range failure for zero
    /// or negative values.
    pub fn for_update(raw: &str) -> Result<Self, ValidationErrors> {
        Self::parse(Shape::PersonUpdatePath, raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }

    fn parse(shape: Shape, raw: &str) -> Result<Self, ValidationErrors> {
        let record = validate_at(shape, &PathParam::new(Self::FIELD, raw), None)?;
        Ok(Self(record.require_integer(Self::FIELD)?))
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

fn embedded<'a>(
    body: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, ValidationErrors> {
    match body.get(key) {
        None | Some(Value::Null) => Err(FieldError::missing(key).into()),
        Some(Value::Object(raw)) => Ok(raw),
        Some(_) => Err(FieldError::type_mismatch(key, "an object").into()),
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(serde::ser::Error::custom("record did not encode as a JSON object")),
    }
}
