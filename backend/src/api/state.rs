//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`. Everything here is
//! built once at startup and never mutated afterwards.

use crate::api::shaping::CredentialPolicy;
use crate::domain::KnownIds;

/// Default ceiling for buffered upload bodies (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Immutable dependencies for HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub known_ids: KnownIds,
    pub credentials: CredentialPolicy,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Bundle the handler dependencies.
    ///
    /// # Examples
    /// ```
    /// use people_api::api::shaping::CredentialPolicy;
    /// use people_api::api::state::AppState;
    /// use people_api::domain::KnownIds;
    ///
    /// let state = AppState::new(KnownIds::default(), CredentialPolicy::Strip, 1024);
    /// assert_eq!(state.max_upload_bytes, 1024);
    /// ```
    pub fn new(known_ids: KnownIds, credentials: CredentialPolicy, max_upload_bytes: usize) -> Self {
        Self {
            known_ids,
            credentials,
            max_upload_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            KnownIds::default(),
            CredentialPolicy::default(),
            DEFAULT_MAX_UPLOAD_BYTES,
        )
    }
}
