//! Closed set of hair colours accepted on person records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hair colour of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

/// Raised when text does not name a [`HairColor`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hair colour: {0}")]
pub struct UnknownHairColor(pub String);

impl HairColor {
    /// Every colour in declaration order.
    pub const ALL: [Self; 5] = [Self::White, Self::Brown, Self::Black, Self::Blonde, Self::Red];

    /// Wire names, indexed by discriminant.
    pub const NAMES: &'static [&'static str] = &["white", "brown", "black", "blonde", "red"];

    /// Wire name of this colour.
    pub const fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HairColor {
    type Err = UnknownHairColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|colour| colour.as_str() == s)
            .ok_or_else(|| UnknownHairColor(s.to_owned()))
    }
}
