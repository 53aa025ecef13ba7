//! Shipment tracking lookups.

use logistix_core::tracking::{Shipment, TrackingEvent};
use serde::{Deserialize, Serialize};

use super::LogistixClient;
use crate::error::Result;

/// A shipment and its events, oldest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackingResult {
    pub success: bool,
    pub shipment: Shipment,
    pub events: Vec<TrackingEvent>,
}

impl LogistixClient {
    /// Look up a shipment by tracking number.
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) when no
    /// shipment matches.
    pub async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        let mut url = self.url("/api/tracking/")?;
        // Pushing a segment percent-encodes it.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(tracking_number.trim());
        }

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }
}
