use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cryptographically random session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authenticated user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A customer account.
///
/// Holds the password hash, so it never leaves the server; handlers
/// respond with [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Lowercased, trimmed. Unique across accounts.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub first_name: String,
    pub company_name: String,
    pub phone_number: String,
    pub ein_business_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account with a fresh ID and timestamps.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        company_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: super::normalize_email(&email.into()),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            company_name: company_name.into(),
            phone_number: phone_number.into(),
            ein_business_number: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_ein_business_number(mut self, ein: Option<String>) -> Self {
        self.ein_business_number = ein;
        self
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// Public view of a [`User`], safe to serialize to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub company_name: String,
    pub phone_number: String,
    pub ein_business_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            company_name: user.company_name.clone(),
            phone_number: user.phone_number.clone(),
            ein_business_number: user.ein_business_number.clone(),
            created_at: user.created_at,
        }
    }
}
