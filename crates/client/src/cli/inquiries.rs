//! Arguments of the enquiry commands.

use clap::Args;
use logistix_core::inquiry::{ContactRequest, QuoteLeadRequest, QuoteRequest};

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// One of the services offered, e.g. "Ocean Freight".
    #[arg(long)]
    pub service_type: Option<String>,
    #[arg(long)]
    pub message: String,
}

impl ContactArgs {
    pub fn into_request(self) -> ContactRequest {
        ContactRequest {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            message: self.message,
        }
    }
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub service_type: String,
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub destination: String,
    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<i64>,
    #[arg(long)]
    pub dimensions: Option<String>,
    #[arg(long)]
    pub requirements: Option<String>,
}

impl QuoteArgs {
    pub fn into_request(self) -> QuoteRequest {
        QuoteRequest {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            origin: self.origin,
            destination: self.destination,
            weight: self.weight,
            dimensions: self.dimensions,
            requirements: self.requirements,
        }
    }
}

#[derive(Debug, Args)]
pub struct GetQuoteArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub contact_number: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub company_name: Option<String>,
}

impl GetQuoteArgs {
    pub fn into_request(self) -> QuoteLeadRequest {
        QuoteLeadRequest {
            name: self.name,
            contact_number: self.contact_number,
            email: self.email,
            company_name: self.company_name,
        }
    }
}
