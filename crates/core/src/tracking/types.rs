use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A parcel identified by its public tracking number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: Uuid,
    /// Uppercase, unique across shipments.
    pub tracking_number: String,
    pub service_type: String,
    /// Free-text status as shown to customers, e.g. "Out for Delivery".
    pub status: String,
    pub origin: String,
    pub destination: String,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// Creates a new shipment with a fresh ID and timestamps.
    pub fn new(
        tracking_number: impl Into<String>,
        service_type: impl Into<String>,
        status: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tracking_number: super::normalize_tracking_number(&tracking_number.into()),
            service_type: service_type.into(),
            status: status.into(),
            origin: origin.into(),
            destination: destination.into(),
            estimated_delivery: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_estimated_delivery(mut self, at: DateTime<Utc>) -> Self {
        self.estimated_delivery = Some(at);
        self
    }

    /// Overrides both timestamps (seed data carries historical dates).
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Sets a specific ID for this shipment (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A single status update for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub status: String,
    pub location: Option<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl TrackingEvent {
    pub fn new(
        shipment_id: Uuid,
        status: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            shipment_id,
            status: status.into(),
            location: None,
            description: description.into(),
            timestamp,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
