//! Contact, quote, and newsletter submissions.

use logistix_core::api::MessageBody;
use logistix_core::inquiry::{
    Contact, ContactRequest, NewsletterRequest, Quote, QuoteLeadRequest, QuoteRequest,
};
use serde::{Deserialize, Serialize};

use super::LogistixClient;
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub contact: Contact,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: Quote,
}

impl LogistixClient {
    /// Submit the contact form.
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactResponse> {
        let response = self
            .client
            .post(self.url("/api/contact")?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Submit a detailed quote request.
    pub async fn submit_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let response = self
            .client
            .post(self.url("/api/quote")?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Submit the short "get a quote" form.
    pub async fn submit_quote_lead(&self, request: &QuoteLeadRequest) -> Result<MessageBody> {
        let response = self
            .client
            .post(self.url("/api/get-quote")?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Subscribe an address to the newsletter.
    pub async fn subscribe(&self, email: &str) -> Result<MessageBody> {
        let request = NewsletterRequest {
            email: email.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/newsletter")?)
            .json(&request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
