//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::UserStore;
use crate::outbound::memory::InMemoryUserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Store backing the users resource.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Construct state around an existing store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserStore;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryUserStore::new()));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

impl Default for HttpState {
    /// State backed by a fresh, empty in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
