//! In-memory adapter for the [`UserStore`] port.
//!
//! Contents live for the lifetime of the process and are lost on restart.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::UserStore;

/// Volatile, insertion-ordered user store.
///
/// Appends take the write lock, so a concurrent [`UserStore::list`] observes
/// either the sequence before the append or after it, never a partial state.
///
/// # Examples
/// ```
/// use users_api::domain::User;
/// use users_api::domain::ports::UserStore;
/// use users_api::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let store = InMemoryUserStore::new();
/// store.append(User::try_from_strings("Alice", "a@b.com").expect("valid user")).await;
/// assert_eq!(store.list().await.len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(&self, user: User) {
        // Vec::push is all-or-nothing; a poisoned lock still guards a whole sequence.
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.push(user);
        debug!(stored = users.len(), "user appended to in-memory store");
    }

    async fn list(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    //! Behaviour of the in-memory store.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new()
    }

    fn user(name: &str, email: &str) -> User {
        User::try_from_strings(name, email).expect("fixture user is valid")
    }

    #[rstest]
    #[tokio::test]
    async fn starts_empty(store: InMemoryUserStore) {
        assert!(store.is_empty());
        assert!(store.list().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn list_preserves_insertion_order(store: InMemoryUserStore) {
        let alice = user("Alice", "alice@example.com");
        let bob = user("Bob", "bob@example.com");

        store.append(alice.clone()).await;
        store.append(bob.clone()).await;

        assert_eq!(store.list().await, vec![alice, bob]);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicates_are_kept(store: InMemoryUserStore) {
        let alice = user("Alice", "a@b.com");

        store.append(alice.clone()).await;
        store.append(alice.clone()).await;

        assert_eq!(store.len(), 2);
        assert_eq!(store.list().await, vec![alice.clone(), alice]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_repeatable(store: InMemoryUserStore) {
        store.append(user("Alice", "a@b.com")).await;

        let first = store.list().await;
        let second = store.list().await;

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_all_kept() {
        let store = std::sync::Arc::new(InMemoryUserStore::new());
        let tasks: Vec<_> = (0..32)
            .map(|index| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append(user(&format!("user{index}"), &format!("u{index}@example.com")))
                        .await;
                })
            })
            .collect();
        for task in tasks {
            task.await.expect("append task completes");
        }

        assert_eq!(store.len(), 32);
    }
}
