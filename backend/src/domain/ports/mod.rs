//! Domain ports defining the edges of the hexagon.
//!
//! Inbound adapters depend on these traits; outbound adapters implement them.

mod user_store;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
