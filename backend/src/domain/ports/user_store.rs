//! Port for the users resource store.
//!
//! Handlers append validated users and read them back through this trait.

use async_trait::async_trait;

use crate::domain::User;

/// Insertion-ordered collection of validated users.
///
/// Implementations never deduplicate and never fail: an append is visible to
/// every subsequent [`UserStore::list`] call, in the order appends happened.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Add `user` to the end of the collection.
    async fn append(&self, user: User);

    /// Return every stored user in insertion order.
    async fn list(&self) -> Vec<User>;
}
