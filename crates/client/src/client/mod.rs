//! HTTP client for the Unitas LogistiX API.

pub mod health;
pub mod inquiries;
pub mod tracking;

use url::Url;

use crate::error::{ClientError, Result};

/// HTTP client for the public LogistiX API.
#[derive(Debug, Clone)]
pub struct LogistixClient {
    client: reqwest::Client,
    base_url: Url,
}

impl LogistixClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build a URL for an endpoint path such as `/api/contact`.
    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a success body, or turn an error response into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_absolute_paths() {
        let client = LogistixClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.url("/api/contact").unwrap().as_str(),
            "http://localhost:5000/api/contact"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            LogistixClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
