//! Demonstration shipments with their tracking history.

use chrono::{DateTime, TimeZone, Utc};

use super::{Shipment, TrackingEvent};

/// A shipment and its recorded events.
#[derive(Debug, Clone)]
pub struct SeedShipment {
    pub shipment: Shipment,
    pub events: Vec<TrackingEvent>,
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

/// Generate the demonstration shipments served by the public tracking page.
///
/// ```
/// use logistix_core::tracking::generate_seed_shipments;
///
/// let seeds = generate_seed_shipments();
/// assert_eq!(seeds[0].shipment.tracking_number, "ULX123456789");
/// assert_eq!(seeds[0].events.len(), 4);
/// ```
pub fn generate_seed_shipments() -> Vec<SeedShipment> {
    let air = Shipment::new(
        "ULX123456789",
        "Air Freight",
        "Out for Delivery",
        "New York, USA",
        "London, UK",
    )
    .with_estimated_delivery(utc(2024, 12, 17, 0, 0))
    .with_timestamps(utc(2024, 12, 15, 0, 0), utc(2024, 12, 16, 0, 0));

    let air_events = vec![
        TrackingEvent::new(
            air.id,
            "Package Collected",
            "Your shipment has been collected from the origin",
            utc(2024, 12, 15, 9, 30),
        )
        .with_location("New York, USA"),
        TrackingEvent::new(
            air.id,
            "In Transit",
            "Package is on route to destination hub",
            utc(2024, 12, 16, 14, 15),
        )
        .with_location("JFK Airport, New York"),
        TrackingEvent::new(
            air.id,
            "Arrived at Hub",
            "Package has arrived at destination hub",
            utc(2024, 12, 16, 22, 45),
        )
        .with_location("Heathrow Airport, London"),
        TrackingEvent::new(
            air.id,
            "Out for Delivery",
            "Package will be delivered today",
            utc(2024, 12, 17, 8, 0),
        )
        .with_location("London, UK"),
    ];

    let ocean = Shipment::new(
        "ULX987654321",
        "Ocean Freight",
        "In Transit",
        "Shanghai, China",
        "Los Angeles, USA",
    )
    .with_estimated_delivery(utc(2024, 12, 25, 0, 0))
    .with_timestamps(utc(2024, 12, 10, 0, 0), utc(2024, 12, 15, 0, 0));

    let ocean_events = vec![
        TrackingEvent::new(
            ocean.id,
            "Package Collected",
            "Container loaded and shipped",
            utc(2024, 12, 10, 10, 0),
        )
        .with_location("Shanghai, China"),
        TrackingEvent::new(
            ocean.id,
            "In Transit",
            "Vessel en route to destination port",
            utc(2024, 12, 15, 12, 0),
        )
        .with_location("Pacific Ocean"),
    ];

    vec![
        SeedShipment {
            shipment: air,
            events: air_events,
        },
        SeedShipment {
            shipment: ocean,
            events: ocean_events,
        },
    ]
}
