//! Public enquiry handlers: contact form, quote forms, and newsletter.
//!
//! Submissions are stored and logged. Nothing is forwarded to a mailbox or CRM.

use axum::{extract::State, Json};
use serde::Serialize;

use logistix_core::api::MessageBody;
use logistix_core::inquiry::{
    Contact, ContactRequest, NewsletterRequest, Quote, QuoteLeadRequest, QuoteRequest,
};

use crate::handlers::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: Quote,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    request.validate()?;
    let contact = request.into_contact();

    state
        .inquiries
        .create_contact(&contact)
        .await
        .map_err(ApiError::storage("Failed to submit contact form"))?;

    tracing::info!(
        contact_id = %contact.id,
        service_type = contact.service_type.as_deref().unwrap_or("-"),
        "Contact form submitted"
    );

    Ok(Json(ContactResponse {
        success: true,
        contact,
    }))
}

/// POST /api/quote
pub async fn submit_quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;
    let quote = request.into_quote();

    state
        .inquiries
        .create_quote(&quote)
        .await
        .map_err(ApiError::storage("Failed to submit quote request"))?;

    tracing::info!(
        quote_id = %quote.id,
        service_type = %quote.service_type,
        origin = %quote.origin,
        destination = %quote.destination,
        "Quote request submitted"
    );

    Ok(Json(QuoteResponse {
        success: true,
        quote,
    }))
}

/// POST /api/get-quote
pub async fn submit_quote_lead(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteLeadRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    request.validate()?;
    let lead = request.into_lead();

    state
        .inquiries
        .create_quote_lead(&lead)
        .await
        .map_err(ApiError::storage("Failed to submit quote request"))?;

    tracing::info!(lead_id = %lead.id, "Call-back quote requested");

    Ok(Json(MessageBody::ok("Quote request submitted successfully")))
}

/// POST /api/newsletter
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewsletterRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    if request.is_blank() {
        return Err(ApiError::BadRequest("Email is required"));
    }
    request.validate()?;

    let newly_added = state
        .inquiries
        .subscribe_newsletter(&request.normalized_email())
        .await
        .map_err(ApiError::storage("Failed to subscribe to newsletter"))?;

    if newly_added {
        tracing::info!("Newsletter subscription added");
    } else {
        tracing::debug!("Newsletter address already subscribed");
    }

    Ok(Json(MessageBody::ok("Subscribed to newsletter")))
}
