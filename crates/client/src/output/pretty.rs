//! Pretty output formatting.

use logistix_core::inquiry::{Contact, Quote};
use logistix_core::tracking::{TrackingEvent, TrackingStage};

use crate::client::health::HealthStatus;
use crate::client::tracking::TrackingResult;
use crate::error::ClientError;

pub fn format_health(health: &HealthStatus) -> String {
    format!("Server: {} (v{})", health.status, health.version)
}

fn format_event(event: &TrackingEvent) -> String {
    let stage = TrackingStage::from_status(&event.status);
    let mut output = format!(
        "{} {}  {}",
        stage.icon(),
        event.timestamp.format("%Y-%m-%d %H:%M"),
        event.status
    );
    if let Some(location) = &event.location {
        output.push_str(&format!(" @ {location}"));
    }
    output.push_str(&format!("\n    {}", event.description));
    output
}

/// Format a tracking lookup for display.
pub fn format_tracking(result: &TrackingResult) -> String {
    let shipment = &result.shipment;
    let mut output = format!(
        "{} [{}]\n  Service: {}\n  Route: {} -> {}",
        shipment.tracking_number,
        shipment.status,
        shipment.service_type,
        shipment.origin,
        shipment.destination
    );
    if let Some(eta) = shipment.estimated_delivery {
        output.push_str(&format!("\n  Estimated delivery: {}", eta.format("%Y-%m-%d")));
    }

    if result.events.is_empty() {
        output.push_str("\n\nNo tracking events yet.");
        return output;
    }

    output.push_str(&format!("\n\nEVENTS ({})\n", result.events.len()));
    output.push_str(&"-".repeat(40));
    for event in &result.events {
        output.push_str(&format!("\n{}", format_event(event)));
    }
    output
}

pub fn format_contact(contact: &Contact) -> String {
    format!(
        "Message received from {} <{}>\n  Reference: {}",
        contact.name, contact.email, contact.id
    )
}

pub fn format_quote(quote: &Quote) -> String {
    let mut output = format!(
        "Quote request for {}: {} -> {}\n  Reference: {}",
        quote.service_type, quote.origin, quote.destination, quote.id
    );
    if let Some(weight) = quote.weight {
        output.push_str(&format!("\n  Weight: {weight} kg"));
    }
    output
}

/// Format an error, including any per-field validation messages.
pub fn format_error(error: &ClientError) -> String {
    let mut output = format!("Error: {error}");
    for detail in error.details() {
        output.push_str(&format!("\n  {}: {}", detail.field, detail.message));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use logistix_core::tracking::Shipment;

    fn result(events: Vec<TrackingEvent>) -> TrackingResult {
        let shipment = Shipment::new(
            "ULX123456789",
            "Air Freight",
            "In Transit",
            "Shanghai, CN",
            "Los Angeles, US",
        );
        TrackingResult {
            success: true,
            shipment,
            events,
        }
    }

    #[test]
    fn test_format_tracking_lists_events() {
        let mut r = result(Vec::new());
        let at = Utc.with_ymd_and_hms(2024, 12, 10, 8, 30, 0).unwrap();
        r.events.push(
            TrackingEvent::new(r.shipment.id, "Package Collected", "Picked up from shipper", at)
                .with_location("Shanghai, CN"),
        );

        let text = format_tracking(&r);

        assert!(text.starts_with("ULX123456789 [In Transit]"));
        assert!(text.contains("EVENTS (1)"));
        assert!(text.contains("2024-12-10 08:30  Package Collected @ Shanghai, CN"));
    }

    #[test]
    fn test_format_tracking_without_events() {
        let text = format_tracking(&result(Vec::new()));
        assert!(text.ends_with("No tracking events yet."));
    }

    #[test]
    fn test_format_error_lists_fields() {
        let err = ClientError::from_response(
            400,
            r#"{"error":"Invalid input","details":[{"field":"message","message":"Message is required"}]}"#,
        );

        assert_eq!(
            format_error(&err),
            "Error: Server returned 400: Invalid input\n  message: Message is required"
        );
    }
}
