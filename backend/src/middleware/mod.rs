//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns (correlation, request
//! logging, cross-origin access) kept out of the handlers.

pub mod cors;
pub mod trace;

pub use cors::cors;
pub use trace::Trace;
