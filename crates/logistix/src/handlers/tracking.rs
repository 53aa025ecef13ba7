//! Shipment tracking lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use logistix_core::tracking::{
    build_timeline, Shipment, TrackingEvent, TrackingRequest, TrackingTimeline,
};

use crate::handlers::{ApiError, ApiJson};
use crate::state::AppState;

const LOOKUP_FAILED: &str = "Failed to lookup tracking information";

/// `{"success": true, "shipment": {...}, "events": [...]}` with events oldest first.
#[derive(Debug, Serialize)]
pub struct TrackingResponse {
    pub success: bool,
    pub shipment: Shipment,
    pub events: Vec<TrackingEvent>,
}

impl From<TrackingTimeline> for TrackingResponse {
    fn from(timeline: TrackingTimeline) -> Self {
        let events = timeline.events().cloned().collect();
        Self {
            success: true,
            shipment: timeline.shipment,
            events,
        }
    }
}

/// Validates the request and loads the shipment's timeline.
///
/// Returns `Ok(None)` for a well-formed number that matches no shipment.
pub async fn lookup_timeline(
    state: &AppState,
    request: &TrackingRequest,
) -> Result<Option<TrackingTimeline>, ApiError> {
    request.validate().map_err(|errors| ApiError::Validation {
        message: "Invalid tracking number",
        errors,
    })?;

    let tracking_number = request.normalized();
    let Some(shipment) = state
        .shipments
        .get_shipment_by_tracking_number(&tracking_number)
        .await
        .map_err(ApiError::storage(LOOKUP_FAILED))?
    else {
        tracing::debug!(%tracking_number, "No shipment for tracking number");
        return Ok(None);
    };

    let events = state
        .shipments
        .get_tracking_events(shipment.id)
        .await
        .map_err(ApiError::storage(LOOKUP_FAILED))?;

    Ok(Some(build_timeline(shipment, events)))
}

async fn respond(
    state: &AppState,
    request: TrackingRequest,
) -> Result<Json<TrackingResponse>, ApiError> {
    lookup_timeline(state, &request)
        .await?
        .map(|timeline| Json(timeline.into()))
        .ok_or(ApiError::NotFound("Shipment not found"))
}

/// POST /api/tracking
pub async fn track_shipment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TrackingRequest>,
) -> Result<Json<TrackingResponse>, ApiError> {
    respond(&state, request).await
}

/// GET /api/tracking/{tracking_number}
pub async fn track_shipment_by_number(
    State(state): State<AppState>,
    Path(tracking_number): Path<String>,
) -> Result<Json<TrackingResponse>, ApiError> {
    respond(&state, TrackingRequest::new(tracking_number.trim())).await
}
