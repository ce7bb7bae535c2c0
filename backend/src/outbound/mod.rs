//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime store backing the users resource
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
