//! Request middleware.
//!
//! Purpose: request lifecycle concerns, currently trace-id assignment and
//! request completion logging.

pub mod trace;

pub use trace::Trace;
