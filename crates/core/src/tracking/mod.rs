mod mock_data;
mod requests;
mod timeline;
mod types;

pub use mock_data::{generate_seed_shipments, SeedShipment};
pub use requests::{normalize_tracking_number, TrackingRequest};
pub use timeline::{build_timeline, sort_events, TimelineEntry, TrackingStage, TrackingTimeline};
pub use types::{Shipment, TrackingEvent};
