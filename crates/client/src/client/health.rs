//! Health check operations.

use serde::{Deserialize, Serialize};

use super::LogistixClient;
use crate::error::Result;

/// Response of `GET /healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl LogistixClient {
    /// Check server health.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")?).send().await?;
        self.handle_response(response).await
    }
}
