//! Background purge of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use logistix_core::auth::SessionRepository;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Spawns a task that purges expired sessions every `every` until a value
/// arrives on `shutdown` (or its sender is dropped).
pub fn spawn_session_sweeper(
    sessions: Arc<dyn SessionRepository>,
    every: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick fires immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match sessions.purge_expired(Utc::now()).await {
                        Ok(0) => {}
                        Ok(removed) => tracing::info!(removed, "Purged expired sessions"),
                        Err(e) => tracing::warn!(error = %e, "Session sweep failed"),
                    }
                }
                _ = shutdown.recv() => {
                    tracing::debug!("Session sweeper stopping");
                    break;
                }
            }
        }
    })
}
