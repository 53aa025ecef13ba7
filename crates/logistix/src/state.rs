//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Every storage concern sits behind a repository trait
//! object, so a database backend can replace the in-memory one without
//! touching the handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use logistix_auth::{AuthConfig, AuthState};
use logistix_core::storage::{
    BillRepository, InquiryRepository, JobRepository, ShipmentRepository,
    SupportRequestRepository, UserRepository,
};
use tokio::sync::broadcast;

use crate::mock_data::{seed_demo_data, SeedError};
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for storage access.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub inquiries: Arc<dyn InquiryRepository>,
    pub shipments: Arc<dyn ShipmentRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub bills: Arc<dyn BillRepository>,
    pub requests: Arc<dyn SupportRequestRepository>,
    /// Sessions, password hashing, and auth config.
    pub auth: AuthState,
    /// Shutdown signal sender for background tasks.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Creates state where every repository is served by the same in-memory store.
    pub fn with_repository(repo: Arc<InMemoryRepository>, auth_config: AuthConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            users: repo.clone(),
            inquiries: repo.clone(),
            shipments: repo.clone(),
            jobs: repo.clone(),
            bills: repo.clone(),
            requests: repo.clone(),
            auth: AuthState::in_memory(repo, auth_config),
            shutdown_tx,
        }
    }

    /// Creates empty in-memory state.
    pub fn new(auth_config: AuthConfig) -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()), auth_config)
    }

    /// Creates in-memory state seeded with demo shipments and the demo customer.
    pub async fn with_demo_data(auth_config: AuthConfig) -> Result<Self, SeedError> {
        let state = Self::new(auth_config);
        seed_demo_data(&state).await?;
        Ok(state)
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal all background tasks to shut down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_reaches_subscribers() {
        let state = AppState::new(AuthConfig::for_tests());
        let mut rx = state.subscribe_shutdown();

        state.signal_shutdown();

        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_auth_state_shares_user_store() {
        let state = AppState::new(AuthConfig::for_tests());
        let user = logistix_core::auth::User::new("ops@acme.example.com", "h", "A", "B", "5551234");
        state.users.create_user(&user).await.unwrap();

        let auth = AuthState::from_ref(&state);

        assert!(auth.users.get_user(user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_demo_data_seeds_tracking() {
        let state = AppState::with_demo_data(AuthConfig::for_tests())
            .await
            .unwrap();

        let shipment = state
            .shipments
            .get_shipment_by_tracking_number("ULX123456789")
            .await
            .unwrap();

        assert!(shipment.is_some());
    }
}
