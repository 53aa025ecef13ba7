//! Ordering and presentation of a shipment's tracking history.

use serde::{Deserialize, Serialize};

use super::{Shipment, TrackingEvent};

/// Coarse progress stage derived from a free-text status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingStage {
    Collected,
    InTransit,
    ArrivedAtHub,
    OutForDelivery,
    Delivered,
    Other,
}

impl TrackingStage {
    /// Classifies a status by case-insensitive keyword match.
    ///
    /// ```
    /// use logistix_core::tracking::TrackingStage;
    ///
    /// assert_eq!(TrackingStage::from_status("Package Collected"), TrackingStage::Collected);
    /// assert_eq!(TrackingStage::from_status("OUT FOR DELIVERY"), TrackingStage::OutForDelivery);
    /// assert_eq!(TrackingStage::from_status("Held at customs"), TrackingStage::Other);
    /// ```
    pub fn from_status(status: &str) -> Self {
        let status = status.to_lowercase();
        // "out for delivery" must be checked before "deliver".
        if status.contains("out for delivery") {
            Self::OutForDelivery
        } else if status.contains("delivered") {
            Self::Delivered
        } else if status.contains("hub") {
            Self::ArrivedAtHub
        } else if status.contains("transit") {
            Self::InTransit
        } else if status.contains("collected") || status.contains("picked up") {
            Self::Collected
        } else {
            Self::Other
        }
    }

    /// CSS modifier used by the timeline markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Collected => "stage-collected",
            Self::InTransit => "stage-in-transit",
            Self::ArrivedAtHub => "stage-hub",
            Self::OutForDelivery => "stage-out-for-delivery",
            Self::Delivered => "stage-delivered",
            Self::Other => "stage-other",
        }
    }

    /// Short glyph shown in the timeline marker.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Collected | Self::Delivered => "✓",
            Self::InTransit | Self::OutForDelivery => "➜",
            Self::ArrivedAtHub => "▣",
            Self::Other => "•",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// One row of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub event: TrackingEvent,
    pub stage: TrackingStage,
    /// True for the most recent event only.
    pub is_latest: bool,
}

/// A shipment together with its chronologically ordered history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingTimeline {
    pub shipment: Shipment,
    pub entries: Vec<TimelineEntry>,
    pub current_stage: TrackingStage,
}

impl TrackingTimeline {
    pub fn events(&self) -> impl Iterator<Item = &TrackingEvent> {
        self.entries.iter().map(|e| &e.event)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts events oldest first. The sort is stable, so events sharing a
/// timestamp keep the order in which they were recorded.
pub fn sort_events(events: &mut [TrackingEvent]) {
    events.sort_by_key(|e| e.timestamp);
}

/// Builds the timeline view of a shipment.
///
/// The current stage comes from the latest event, falling back to the
/// shipment's own status when no events have been recorded.
pub fn build_timeline(shipment: Shipment, mut events: Vec<TrackingEvent>) -> TrackingTimeline {
    sort_events(&mut events);

    let current_stage = events
        .last()
        .map(|e| TrackingStage::from_status(&e.status))
        .unwrap_or_else(|| TrackingStage::from_status(&shipment.status));

    let last = events.len().saturating_sub(1);
    let entries = events
        .into_iter()
        .enumerate()
        .map(|(i, event)| TimelineEntry {
            stage: TrackingStage::from_status(&event.status),
            is_latest: i == last,
            event,
        })
        .collect();

    TrackingTimeline {
        shipment,
        entries,
        current_stage,
    }
}
