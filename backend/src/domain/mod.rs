//! Domain primitives and ports.
//!
//! Purpose: define the strongly typed user entity, its validation rules, and
//! the store port used by the HTTP adapter. Types here know nothing about
//! Actix; inbound adapters translate them into HTTP responses.
//!
//! Public surface:
//! - User — validated name and email pair.
//! - UserViolations / Violation — structured validation failures.
//! - TraceId — request correlation identifier.
//! - ports::UserStore — insertion-ordered store of users.

pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_PATTERN, EmailAddress, NAME_MIN_LENGTH, User, UserField, UserName, UserValidationError,
    UserViolations, Violation, ViolationCode,
};
