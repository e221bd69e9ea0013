//! Transport models shared by every HTTP handler.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - PERSON_NOT_FOUND_MESSAGE: fixed text of person lookup misses.

pub mod error;
pub use self::error::{Error, ErrorCode, PERSON_NOT_FOUND_MESSAGE};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
