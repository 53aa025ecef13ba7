use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Services offered on the marketing site, in display order.
pub const SERVICE_TYPES: &[&str] = &[
    "Air Freight",
    "Ocean Freight",
    "Ground Transport",
    "Warehousing",
    "Customs Clearance",
    "Supply Chain",
];

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A detailed quote request from the quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: String,
    pub origin: String,
    pub destination: String,
    /// Kilograms.
    pub weight: Option<i64>,
    pub dimensions: Option<String>,
    pub requirements: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A call-back request from the "get a quote" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLead {
    pub id: Uuid,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
