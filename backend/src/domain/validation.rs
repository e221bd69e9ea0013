//! Validation and coercion of raw request input against a [`Shape`].
//!
//! Raw input arrives from JSON bodies, url-encoded forms, query strings, path
//! segments, headers and cookies. Each source implements [`FieldSource`] so the
//! same engine applies the declared constraints regardless of transport.
//! Failures are collected for every field of the shape rather than stopping at
//! the first one.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::schema::{Bound, FieldKind, FieldSpec, Shape};

/// Untyped value handed to the engine by a [`FieldSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Value taken from a JSON document.
    Json(&'a Value),
    /// Value taken from text such as a query string, form field or header.
    Text(&'a str),
}

/// Anything raw fields can be looked up in by name.
pub trait FieldSource {
    /// Return the raw value for `name`, or `None` when it is absent.
    fn raw(&self, name: &str) -> Option<RawValue<'_>>;
}

impl FieldSource for Map<String, Value> {
    fn raw(&self, name: &str) -> Option<RawValue<'_>> {
        // JSON null is treated the same as an absent key.
        self.get(name)
            .filter(|value| !value.is_null())
            .map(RawValue::Json)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn raw(&self, name: &str) -> Option<RawValue<'_>> {
        self.get(name).map(|value| RawValue::Text(value))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn raw(&self, name: &str) -> Option<RawValue<'_>> {
        self.get(name).map(|value| RawValue::Text(value))
    }
}

/// A single named URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParam<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> PathParam<'a> {
    /// Wrap the raw `value` captured for the path segment `name`.
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl FieldSource for PathParam<'_> {
    fn raw(&self, name: &str) -> Option<RawValue<'_>> {
        (name == self.name).then_some(RawValue::Text(self.value))
    }
}

/// Category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field was absent.
    MissingField,
    /// The value could not be coerced into the declared type.
    TypeMismatch,
    /// A string was shorter or longer than allowed.
    LengthOutOfRange,
    /// A number fell outside its declared bounds.
    ValueOutOfRange,
    /// A categorical value was not a member of its set.
    InvalidEnumValue,
    /// A string did not have the required shape (for example an email).
    InvalidFormat,
}

impl ValidationErrorKind {
    /// Stable machine-readable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TypeMismatch => "type_mismatch",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::ValueOutOfRange => "value_out_of_range",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single field, identified by its dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `person.age`.
    pub field: String,
    /// Violated constraint.
    #[serde(rename = "code")]
    pub kind: ValidationErrorKind,
    /// Human readable description.
    pub message: String,
}

impl FieldError {
    /// Build a failure for `field`.
    pub fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// Failure for a required field that was not supplied.
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("missing required field: {field}");
        Self::new(field, ValidationErrorKind::MissingField, message)
    }

    /// Failure for a value of the wrong type.
    pub fn type_mismatch(field: impl Into<String>, expected: &str) -> Self {
        let field = field.into();
        let message = format!("{field} must be {expected}");
        Self::new(field, ValidationErrorKind::TypeMismatch, message)
    }
}

/// Every field failure found in one payload, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record another failure.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Append all failures of `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Whether no failure was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over recorded failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Failure recorded for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Typed value produced by coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

/// Typed, constraint-satisfying fields of one validated payload.
///
/// Absent optional fields have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    prefix: Option<String>,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    /// Text value of `name`, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Integer value of `name`, if present.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Boolean value of `name`, if present.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(FieldValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    /// Remove and return the text value of `name`.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        match self.values.remove(name) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Remove the text value of a required field.
    ///
    /// # Errors
    /// Returns [`ValidationErrorKind::MissingField`] when the record holds no
    /// text for `name`.
    pub fn require_text(&mut self, name: &str) -> Result<String, FieldError> {
        self.take_text(name).ok_or_else(|| self.missing(name))
    }

    /// Integer value of a required field.
    ///
    /// # Errors
    /// Returns [`ValidationErrorKind::MissingField`] when the record holds no
    /// integer for `name`.
    pub fn require_integer(&self, name: &str) -> Result<i64, FieldError> {
        self.integer(name).ok_or_else(|| self.missing(name))
    }

    /// Dotted path of `name` within this record.
    pub fn path(&self, name: &str) -> String {
        field_path(self.prefix.as_deref(), name)
    }

    fn missing(&self, name: &str) -> FieldError {
        FieldError::missing(self.path(name))
    }
}

/// Validate `source` against `shape`.
///
/// # Errors
/// Returns every field failure found, in schema order.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use people_api::domain::schema::Shape;
/// use people_api::domain::validation::{validate, ValidationErrorKind};
///
/// let mut form = HashMap::new();
/// form.insert("username".to_owned(), "ada".to_owned());
/// let errors = validate(Shape::LoginForm, &form).unwrap_err();
/// let failure = errors.for_field("password").expect("password failure");
/// assert_eq!(failure.kind, ValidationErrorKind::MissingField);
/// ```
pub fn validate<S>(shape: Shape, source: &S) -> Result<Record, ValidationErrors>
where
    S: FieldSource + ?Sized,
{
    validate_at(shape, source, None)
}

/// Validate `source` against `shape`, reporting field paths under `prefix`.
///
/// # Errors
/// Returns every field failure found, in schema order.
pub fn validate_at<S>(
    shape: Shape,
    source: &S,
    prefix: Option<&str>,
) -> Result<Record, ValidationErrors>
where
    S: FieldSource + ?Sized,
{
    let mut values = BTreeMap::new();
    let mut errors = ValidationErrors::new();

    for spec in shape.fields() {
        let path = field_path(prefix, spec.name);
        match check_field(spec, source.raw(spec.name), &path) {
            Ok(Some(value)) => {
                values.insert(spec.name, value);
            }
            Ok(None) => {}
            Err(error) => errors.push(error),
        }
    }

    errors.into_result(Record {
        prefix: prefix.map(str::to_owned),
        values,
    })
}

fn field_path(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}.{name}"),
        None => name.to_owned(),
    }
}

fn check_field(
    spec: &FieldSpec,
    raw: Option<RawValue<'_>>,
    path: &str,
) -> Result<Option<FieldValue>, FieldError> {
    let Some(raw) = raw else {
        return if spec.required {
            Err(FieldError::missing(path))
        } else {
            Ok(None)
        };
    };

    let value = coerce(spec.kind, raw)
        .ok_or_else(|| FieldError::type_mismatch(path, spec.kind.describe()))?;
    check_constraints(spec, &value, path)?;
    Ok(Some(value))
}

fn coerce(kind: FieldKind, raw: RawValue<'_>) -> Option<FieldValue> {
    match kind {
        FieldKind::Text | FieldKind::Choice(_) | FieldKind::Email => {
            coerce_text(raw).map(FieldValue::Text)
        }
        FieldKind::Integer => coerce_integer(raw).map(FieldValue::Integer),
        FieldKind::Boolean => coerce_boolean(raw).map(FieldValue::Boolean),
    }
}

fn coerce_text(raw: RawValue<'_>) -> Option<String> {
    match raw {
        RawValue::Text(text) => Some(text.to_owned()),
        RawValue::Json(Value::String(text)) => Some(text.clone()),
        RawValue::Json(Value::Number(number)) => Some(number.to_string()),
        RawValue::Json(_) => None,
    }
}

// Integers beyond `i64` saturate so that bounds checks and lookups see an
// out-of-range value instead of a type mismatch.
fn coerce_integer(raw: RawValue<'_>) -> Option<i64> {
    match raw {
        RawValue::Text(text) => parse_integer(text),
        RawValue::Json(Value::String(text)) => parse_integer(text),
        RawValue::Json(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.fract() == 0.0)
                .map(|float| float as i64)
        }),
        RawValue::Json(_) => None,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(number) => Some(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn coerce_boolean(raw: RawValue<'_>) -> Option<bool> {
    match raw {
        RawValue::Json(Value::Bool(flag)) => Some(*flag),
        RawValue::Json(Value::Number(number)) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        RawValue::Json(Value::String(text)) => parse_bool(text),
        RawValue::Text(text) => parse_bool(text),
        RawValue::Json(_) => None,
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn check_constraints(spec: &FieldSpec, value: &FieldValue, path: &str) -> Result<(), FieldError> {
    match value {
        FieldValue::Text(text) => {
            check_length(spec, text, path)?;
            check_text_kind(spec.kind, text, path)
        }
        FieldValue::Integer(number) => check_bounds(spec, *number, path),
        FieldValue::Boolean(_) => Ok(()),
    }
}

fn check_length(spec: &FieldSpec, text: &str, path: &str) -> Result<(), FieldError> {
    let length = text.chars().count();
    if let Some(min) = spec.min_length.filter(|min| length < *min) {
        return Err(FieldError::new(
            path,
            ValidationErrorKind::LengthOutOfRange,
            format!("{path} must have at least {min} characters"),
        ));
    }
    if let Some(max) = spec.max_length.filter(|max| length > *max) {
        return Err(FieldError::new(
            path,
            ValidationErrorKind::LengthOutOfRange,
            format!("{path} must have at most {max} characters"),
        ));
    }
    Ok(())
}

fn check_text_kind(kind: FieldKind, text: &str, path: &str) -> Result<(), FieldError> {
    match kind {
        FieldKind::Choice(allowed) if !allowed.contains(&text) => Err(FieldError::new(
            path,
            ValidationErrorKind::InvalidEnumValue,
            format!("{path} must be one of: {}", allowed.join(", ")),
        )),
        FieldKind::Email if !email_regex().is_match(text) => Err(FieldError::new(
            path,
            ValidationErrorKind::InvalidFormat,
            format!("{path} must be a valid email address"),
        )),
        _ => Ok(()),
    }
}

fn check_bounds(spec: &FieldSpec, value: i64, path: &str) -> Result<(), FieldError> {
    if let Some(bound) = spec.lower.filter(|bound| !bound.admits_from_below(value)) {
        let message = match bound {
            Bound::Exclusive(limit) => format!("{path} must be greater than {limit}"),
            Bound::Inclusive(limit) => format!("{path} must be greater than or equal to {limit}"),
        };
        return Err(FieldError::new(
            path,
            ValidationErrorKind::ValueOutOfRange,
            message,
        ));
    }
    if let Some(bound) = spec.upper.filter(|bound| !bound.admits_from_above(value)) {
        let message = match bound {
            Bound::Exclusive(limit) => format!("{path} must be less than {limit}"),
            Bound::Inclusive(limit) => format!("{path} must be less than or equal to {limit}"),
        };
        return Err(FieldError::new(
            path,
            ValidationErrorKind::ValueOutOfRange,
            message,
        ));
    }
    Ok(())
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

#[cfg(test)]
mod tests {
    //! Coverage for coercion, bounds and exhaustive error collection.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn person(overrides: Value) -> Map<String, Value> {
        let mut base = object(json!({
            "first_name": "Ana",
            "last_name": "Diaz",
            "age": 30,
            "password": "secret123"
        }));
        base.extend(object(overrides));
        base
    }

    fn kind_for(errors: &ValidationErrors, field: &str) -> ValidationErrorKind {
        errors
            .for_field(field)
            .unwrap_or_else(|| panic!("expected failure for {field}: {errors}"))
            .kind
    }

    #[test]
    fn valid_person_produces_typed_record() {
        let record = validate(Shape::Person, &person(json!({}))).expect("valid person");
        assert_eq!(record.text("first_name"), Some("Ana"));
        assert_eq!(record.integer("age"), Some(30));
        assert_eq!(record.text("hair_color"), None);
        assert_eq!(record.boolean("is_married"), None);
    }

    #[rstest]
    #[case(json!("42"), 42)]
    #[case(json!(" 7 "), 7)]
    #[case(json!(12.0), 12)]
    fn integers_are_coerced_from_text_and_integral_floats(
        #[case] raw: Value,
        #[case] expected: i64,
    ) {
        let record = validate(Shape::Person, &person(json!({ "age": raw }))).expect("coerced");
        assert_eq!(record.integer("age"), Some(expected));
    }

    #[rstest]
    #[case(json!("thirty"))]
    #[case(json!(12.5))]
    #[case(json!(true))]
    #[case(json!([30]))]
    fn non_integer_age_is_a_type_mismatch(#[case] raw: Value) {
        let errors = validate(Shape::Person, &person(json!({ "age": raw }))).unwrap_err();
        assert_eq!(kind_for(&errors, "age"), ValidationErrorKind::TypeMismatch);
    }

    #[rstest]
    #[case(json!("99999999999999999999"))]
    #[case(json!("-99999999999999999999"))]
    #[case(json!(1e20))]
    fn integers_beyond_i64_are_out_of_range(#[case] raw: Value) {
        let errors = validate(Shape::Person, &person(json!({ "age": raw }))).unwrap_err();
        assert_eq!(kind_for(&errors, "age"), ValidationErrorKind::ValueOutOfRange);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(116)]
    fn age_outside_bounds_is_out_of_range(#[case] age: i64) {
        let errors = validate(Shape::Person, &person(json!({ "age": age }))).unwrap_err();
        assert_eq!(kind_for(&errors, "age"), ValidationErrorKind::ValueOutOfRange);
    }

    #[rstest]
    #[case(1)]
    #[case(115)]
    fn age_bounds_are_inclusive_at_the_top(#[case] age: i64) {
        assert!(validate(Shape::Person, &person(json!({ "age": age }))).is_ok());
    }

    #[test]
    fn short_password_is_length_out_of_range() {
        let errors =
            validate(Shape::Person, &person(json!({ "password": "short" }))).unwrap_err();
        assert_eq!(
            kind_for(&errors, "password"),
            ValidationErrorKind::LengthOutOfRange
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name = "é".repeat(50);
        assert!(validate(Shape::Person, &person(json!({ "first_name": name }))).is_ok());
        let errors =
            validate(Shape::Person, &person(json!({ "first_name": "é".repeat(51) })))
                .unwrap_err();
        assert_eq!(
            kind_for(&errors, "first_name"),
            ValidationErrorKind::LengthOutOfRange
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate(Shape::Person, &person(json!({ "last_name": "" }))).unwrap_err();
        assert_eq!(
            kind_for(&errors, "last_name"),
            ValidationErrorKind::LengthOutOfRange
        );
    }

    #[test]
    fn unknown_hair_color_is_invalid_enum_value() {
        let errors =
            validate(Shape::Person, &person(json!({ "hair_color": "green" }))).unwrap_err();
        let failure = errors.for_field("hair_color").expect("hair colour failure");
        assert_eq!(failure.kind, ValidationErrorKind::InvalidEnumValue);
        assert!(failure.message.contains("blonde"));
    }

    #[rstest]
    #[case(json!("yes"), true)]
    #[case(json!("OFF"), false)]
    #[case(json!(1), true)]
    #[case(json!(false), false)]
    fn booleans_accept_common_spellings(#[case] raw: Value, #[case] expected: bool) {
        let record =
            validate(Shape::Person, &person(json!({ "is_married": raw }))).expect("boolean");
        assert_eq!(record.boolean("is_married"), Some(expected));
    }

    #[test]
    fn null_optional_fields_default_to_absent() {
        let record = validate(
            Shape::Person,
            &person(json!({ "hair_color": null, "is_married": null })),
        )
        .expect("nulls accepted");
        assert_eq!(record.text("hair_color"), None);
        assert_eq!(record.boolean("is_married"), None);
    }

    #[test]
    fn null_required_field_is_missing() {
        let errors = validate(Shape::Person, &person(json!({ "age": null }))).unwrap_err();
        assert_eq!(kind_for(&errors, "age"), ValidationErrorKind::MissingField);
    }

    #[test]
    fn failures_are_collected_for_every_field_in_schema_order() {
        let errors = validate(Shape::Person, &Map::new()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields, ["first_name", "last_name", "age", "password"]);
        assert!(
            errors
                .iter()
                .all(|error| error.kind == ValidationErrorKind::MissingField)
        );
    }

    #[test]
    fn prefix_is_applied_to_field_paths() {
        let errors = validate_at(Shape::Location, &Map::new(), Some("location")).unwrap_err();
        assert_eq!(
            kind_for(&errors, "location.city"),
            ValidationErrorKind::MissingField
        );
        assert_eq!(
            errors.for_field("location.city").map(|e| e.message.as_str()),
            Some("missing required field: location.city")
        );
    }

    #[rstest]
    #[case("0", None)]
    #[case("5", None)]
    #[case("-1", Some(ValidationErrorKind::ValueOutOfRange))]
    #[case("abc", Some(ValidationErrorKind::TypeMismatch))]
    fn lookup_path_accepts_zero(
        #[case] raw: &str,
        #[case] expected: Option<ValidationErrorKind>,
    ) {
        let result = validate(Shape::PersonLookupPath, &PathParam::new("person_id", raw));
        assert_eq!(
            result
                .err()
                .map(|errors| kind_for(&errors, "person_id")),
            expected
        );
    }

    #[rstest]
    #[case("0")]
    #[case("-4")]
    fn update_path_rejects_zero_and_negatives(#[case] raw: &str) {
        let errors =
            validate(Shape::PersonUpdatePath, &PathParam::new("person_id", raw)).unwrap_err();
        assert_eq!(
            kind_for(&errors, "person_id"),
            ValidationErrorKind::ValueOutOfRange
        );
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("ada.example.com", false)]
    #[case("ada@example", false)]
    #[case("a da@example.com", false)]
    fn email_fields_require_an_address(#[case] email: &str, #[case] valid: bool) {
        let mut form = HashMap::new();
        for (key, value) in [
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("email", email),
            ("message", "I would like to hear about engines."),
        ] {
            form.insert(key.to_owned(), value.to_owned());
        }
        let result = validate(Shape::ContactForm, &form);
        if valid {
            assert!(result.is_ok(), "{email} should be accepted");
        } else {
            let errors = result.unwrap_err();
            assert_eq!(kind_for(&errors, "email"), ValidationErrorKind::InvalidFormat);
        }
    }

    #[test]
    fn numbers_are_accepted_as_text() {
        let mut map = Map::new();
        map.insert("city".into(), json!(90210));
        map.insert("state".into(), json!("CA"));
        map.insert("country".into(), json!("US"));
        let record = validate(Shape::Location, &map).expect("numeric city accepted");
        assert_eq!(record.text("city"), Some("90210"));
    }

    #[test]
    fn errors_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::missing("a"));
        errors.push(FieldError::type_mismatch("b", "an integer"));
        assert_eq!(
            errors.to_string(),
            "missing required field: a; b must be an integer"
        );
    }

    #[test]
    fn field_errors_serialise_with_code() {
        let value = serde_json::to_value(FieldError::missing("age")).expect("serialise");
        assert_eq!(
            value,
            json!({
                "field": "age",
                "code": "missing_field",
                "message": "missing required field: age"
            })
        );
    }
}
