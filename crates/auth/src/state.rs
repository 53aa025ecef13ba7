//! Application state for auth.

use std::sync::Arc;

use logistix_core::auth::SessionRepository;
use logistix_core::storage::UserRepository;

use crate::config::AuthConfig;
use crate::password::PasswordService;
use crate::sessions::SessionStore;

/// Shared state for auth handlers and extractors.
///
/// The server embeds this in its own state and exposes it through
/// `FromRef`, so the extractors work on any router that does so.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub passwords: PasswordService,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        config: AuthConfig,
    ) -> Self {
        Self {
            sessions,
            users,
            passwords: PasswordService::new(config.password),
            config,
        }
    }

    /// State backed by a fresh in-memory session store.
    pub fn in_memory(users: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self::new(Arc::new(SessionStore::new()), users, config)
    }
}
