//! Field constraint declarations for every request shape.
//!
//! Purpose: describe, per shape, which fields exist, how raw input is coerced
//! and which bounds apply. The declarations are pure data; the validation
//! engine in [`crate::domain::validation`] interprets them.

use crate::domain::hair_color::HairColor;

/// Maximum length shared by person names and location fields.
pub const NAME_MAX: usize = 50;
/// Maximum accepted age in years.
pub const AGE_MAX: i64 = 115;
/// Minimum password length.
pub const PASSWORD_MIN: usize = 8;
/// Maximum login username length.
pub const USERNAME_MAX: usize = 20;
/// Maximum contact name length.
pub const CONTACT_NAME_MAX: usize = 20;
/// Minimum contact message length.
pub const CONTACT_MESSAGE_MIN: usize = 20;
/// Maximum length of the textual age query parameter.
pub const QUERY_AGE_MAX: usize = 20;

/// Primitive type a field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text.
    Text,
    /// Signed integer, parsed from strings when needed.
    Integer,
    /// Boolean, parsed from common textual spellings when needed.
    Boolean,
    /// Text restricted to a closed set of values.
    Choice(&'static [&'static str]),
    /// Text that must look like an email address.
    Email,
}

impl FieldKind {
    /// Human readable type name used in error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Text | Self::Choice(_) | Self::Email => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
        }
    }
}

/// Numeric bound attached to an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value may equal the bound.
    Inclusive(i64),
    /// The value must lie strictly beyond the bound.
    Exclusive(i64),
}

impl Bound {
    /// Whether `value` satisfies this bound used as a lower limit.
    pub const fn admits_from_below(self, value: i64) -> bool {
        match self {
            Self::Inclusive(limit) => value >= limit,
            Self::Exclusive(limit) => value > limit,
        }
    }

    /// Whether `value` satisfies this bound used as an upper limit.
    pub const fn admits_from_above(self, value: i64) -> bool {
        match self {
            Self::Inclusive(limit) => value <= limit,
            Self::Exclusive(limit) => value < limit,
        }
    }
}

/// Constraint declaration for a single field.
///
/// # Examples
/// ```
/// use people_api::domain::schema::{Bound, FieldSpec};
///
/// let age = FieldSpec::integer("age").greater_than(0).at_most(115);
/// assert_eq!(age.lower, Some(Bound::Exclusive(0)));
/// assert!(age.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the raw input.
    pub name: &'static str,
    /// Target type.
    pub kind: FieldKind,
    /// Whether absence is an error.
    pub required: bool,
    /// Minimum length in characters for textual kinds.
    pub min_length: Option<usize>,
    /// Maximum length in characters for textual kinds.
    pub max_length: Option<usize>,
    /// Lower numeric bound for integers.
    pub lower: Option<Bound>,
    /// Upper numeric bound for integers.
    pub upper: Option<Bound>,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            min_length: None,
            max_length: None,
            lower: None,
            upper: None,
        }
    }

    /// Required text field without bounds.
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Required integer field without bounds.
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Required boolean field.
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Required field restricted to `values`.
    pub const fn choice(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Choice(values))
    }

    /// Required email-shaped field.
    pub const fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    /// Mark the field optional; absence yields no value.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Bound the field length to `min..=max` characters.
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    /// Require at least `min` characters.
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require strictly more than `limit`.
    pub const fn greater_than(mut self, limit: i64) -> Self {
        self.lower = Some(Bound::Exclusive(limit));
        self
    }

    /// Require at least `limit`.
    pub const fn at_least(mut self, limit: i64) -> Self {
        self.lower = Some(Bound::Inclusive(limit));
        self
    }

    /// Require at most `limit`.
    pub const fn at_most(mut self, limit: i64) -> Self {
        self.upper = Some(Bound::Inclusive(limit));
        self
    }
}

const FIRST_NAME: FieldSpec = FieldSpec::text("first_name").length(1, NAME_MAX);
const LAST_NAME: FieldSpec = FieldSpec::text("last_name").length(1, NAME_MAX);
const AGE: FieldSpec = FieldSpec::integer("age").greater_than(0).at_most(AGE_MAX);
const HAIR_COLOR: FieldSpec = FieldSpec::choice("hair_color", HairColor::NAMES).optional();
const IS_MARRIED: FieldSpec = FieldSpec::boolean("is_married").optional();
const PASSWORD: FieldSpec = FieldSpec::text("password").min_length(PASSWORD_MIN);

static LOCATION_FIELDS: [FieldSpec; 3] = [
    FieldSpec::text("city").length(1, NAME_MAX),
    FieldSpec::text("state").length(1, NAME_MAX),
    FieldSpec::text("country").length(1, NAME_MAX),
];

static PERSON_BASE_FIELDS: [FieldSpec; 5] = [FIRST_NAME, LAST_NAME, AGE, HAIR_COLOR, IS_MARRIED];

static PERSON_FIELDS: [FieldSpec; 6] =
    [FIRST_NAME, LAST_NAME, AGE, HAIR_COLOR, IS_MARRIED, PASSWORD];

static PERSON_QUERY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::text("name").length(1, NAME_MAX).optional(),
    FieldSpec::text("age").length(1, QUERY_AGE_MAX).optional(),
];

static PERSON_LOOKUP_PATH_FIELDS: [FieldSpec; 1] = [FieldSpec::integer("person_id").at_least(0)];

static PERSON_UPDATE_PATH_FIELDS: [FieldSpec; 1] =
    [FieldSpec::integer("person_id").greater_than(0)];

static LOGIN_FORM_FIELDS: [FieldSpec; 2] = [
    FieldSpec::text("username").length(1, USERNAME_MAX),
    FieldSpec::text("password"),
];

static CONTACT_FORM_FIELDS: [FieldSpec; 6] = [
    FieldSpec::text("first_name").length(1, CONTACT_NAME_MAX),
    FieldSpec::text("last_name").length(1, CONTACT_NAME_MAX),
    FieldSpec::email("email"),
    FieldSpec::text("message").min_length(CONTACT_MESSAGE_MIN),
    FieldSpec::text("user_agent").optional(),
    FieldSpec::text("ads").optional(),
];

/// Identifier of a record shape accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// City, state and country.
    Location,
    /// Person fields without the credential.
    PersonBase,
    /// Person fields including the password.
    Person,
    /// Optional `name`/`age` query parameters.
    PersonQuery,
    /// `person_id` path segment for lookups (`>= 0`).
    PersonLookupPath,
    /// `person_id` path segment for updates (`> 0`).
    PersonUpdatePath,
    /// Login form fields.
    LoginForm,
    /// Contact form fields plus the `User-Agent` header and `ads` cookie.
    ContactForm,
}

impl Shape {
    /// Ordered field constraints for this shape.
    ///
    /// # Examples
    /// ```
    /// use people_api::domain::schema::Shape;
    ///
    /// let names: Vec<_> = Shape::Location.fields().iter().map(|f| f.name).collect();
    /// assert_eq!(names, ["city", "state", "country"]);
    /// ```
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Location => &LOCATION_FIELDS,
            Self::PersonBase => &PERSON_BASE_FIELDS,
            Self::Person => &PERSON_FIELDS,
            Self::PersonQuery => &PERSON_QUERY_FIELDS,
            Self::PersonLookupPath => &PERSON_LOOKUP_PATH_FIELDS,
            Self::PersonUpdatePath => &PERSON_UPDATE_PATH_FIELDS,
            Self::LoginForm => &LOGIN_FORM_FIELDS,
            Self::ContactForm => &CONTACT_FORM_FIELDS,
        }
    }

    /// Look up a single field declaration by name.
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }
}
