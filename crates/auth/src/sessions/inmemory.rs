//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use logistix_core::auth::{is_session_expired, Result, Session, SessionId, SessionRepository};

/// In-memory session store.
///
/// Stores sessions in a HashMap wrapped in `Arc<RwLock<_>>`. Data is not
/// persisted and will be lost when the process exits.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.as_str().to_string(), session.clone());
        Ok(())
    }

    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id.as_str()).cloned())
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
        Ok(())
    }

    async fn delete_user_sessions(&self, user_id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| s.user_id != user_id);
        Ok(())
    }

    async fn delete_user_sessions_except(&self, user_id: Uuid, keep: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|id, s| s.user_id != user_id || id == keep.as_str());
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !is_session_expired(s, now));
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_session(id: &str, user_id: Uuid) -> Session {
        Session {
            id: SessionId::new(id.to_string()),
            user_id,
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    fn sid(id: &str) -> SessionId {
        SessionId::new(id.to_string())
    }

    #[tokio::test]
    async fn test_session_create_and_get() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let session = create_test_session("session-1", user_id);

        store.create_session(&session).await.unwrap();

        let retrieved = store.get_session(&sid("session-1")).await.unwrap().unwrap();
        assert_eq!(retrieved.id.as_str(), "session-1");
        assert_eq!(retrieved.user_id, user_id);
    }

    #[tokio::test]
    async fn test_session_get_nonexistent() {
        let store = SessionStore::new();

        let result = store.get_session(&sid("nonexistent")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_session_delete() {
        let store = SessionStore::new();
        store
            .create_session(&create_test_session("session-1", Uuid::new_v4()))
            .await
            .unwrap();

        store.delete_session(&sid("session-1")).await.unwrap();

        assert!(store.get_session(&sid("session-1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_delete_nonexistent() {
        let store = SessionStore::new();

        // Should not error when deleting nonexistent session
        assert!(store.delete_session(&sid("nonexistent")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_sessions() {
        let store = SessionStore::new();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();

        store.create_session(&create_test_session("session-1", user)).await.unwrap();
        store.create_session(&create_test_session("session-2", user)).await.unwrap();
        store.create_session(&create_test_session("session-3", other)).await.unwrap();

        store.delete_user_sessions(user).await.unwrap();

        assert!(store.get_session(&sid("session-1")).await.unwrap().is_none());
        assert!(store.get_session(&sid("session-2")).await.unwrap().is_none());
        assert!(store.get_session(&sid("session-3")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_user_sessions_except_keeps_one() {
        let store = SessionStore::new();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();

        store.create_session(&create_test_session("session-1", user)).await.unwrap();
        store.create_session(&create_test_session("session-2", user)).await.unwrap();
        store.create_session(&create_test_session("session-3", other)).await.unwrap();

        store
            .delete_user_sessions_except(user, &sid("session-2"))
            .await
            .unwrap();

        assert!(store.get_session(&sid("session-1")).await.unwrap().is_none());
        assert!(store.get_session(&sid("session-2")).await.unwrap().is_some());
        assert!(store.get_session(&sid("session-3")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_purge_expired_removes_only_expired() {
        let store = SessionStore::new();
        let now = Utc::now();
        let mut expired = create_test_session("expired", Uuid::new_v4());
        expired.expires_at = now - Duration::minutes(1);
        let mut at_boundary = create_test_session("boundary", Uuid::new_v4());
        at_boundary.expires_at = now;
        let live = create_test_session("live", Uuid::new_v4());

        for s in [&expired, &at_boundary, &live] {
            store.create_session(s).await.unwrap();
        }

        let removed = store.purge_expired(now).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.len().await, 1);
        assert!(store.get_session(&sid("live")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = SessionStore::new();
        let clone = store.clone();

        store
            .create_session(&create_test_session("session-1", Uuid::new_v4()))
            .await
            .unwrap();

        // Clone should see the same session
        assert!(clone.get_session(&sid("session-1")).await.unwrap().is_some());
    }
}
