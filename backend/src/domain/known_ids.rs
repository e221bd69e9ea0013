//! Fixed set of person identifiers considered to exist.

use std::collections::BTreeSet;

/// Identifiers that exist when the process starts.
pub const DEFAULT_KNOWN_IDS: [i64; 5] = [1, 2, 3, 4, 5];

/// Raised when a lookup names an identifier outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PersonLookupError {
    /// The identifier is not a member of the set.
    #[error("person {id} does not exist")]
    NotFound { id: i64 },
}

/// Read-only membership set built once at startup.
///
/// # Examples
/// ```
/// use people_api::domain::KnownIds;
///
/// let ids = KnownIds::default();
/// assert!(ids.ensure_exists(3).is_ok());
/// assert!(ids.ensure_exists(7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownIds(BTreeSet<i64>);

impl KnownIds {
    /// Build a set from arbitrary identifiers.
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Confirm that `id` exists.
    ///
    /// # Errors
    /// Returns [`PersonLookupError::NotFound`] for unknown identifiers.
    pub fn ensure_exists(&self, id: i64) -> Result<i64, PersonLookupError> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(PersonLookupError::NotFound { id })
        }
    }
}

impl Default for KnownIds {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_IDS)
    }
}
