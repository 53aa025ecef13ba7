//! Public enquiries: contact messages, quote requests, and newsletter sign-ups.

mod requests;
mod types;

pub use requests::{ContactRequest, NewsletterRequest, QuoteLeadRequest, QuoteRequest};
pub use types::{Contact, Quote, QuoteLead, SERVICE_TYPES};
