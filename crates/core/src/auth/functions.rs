use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};

use super::{AuthError, Session, SessionId};

/// Generate a cryptographically random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Calculate session expiry from creation time and TTL.
///
/// # Errors
///
/// Returns [`AuthError::ExpiryOutOfRange`] when the sum overflows.
pub fn calculate_expiry(
    created_at: DateTime<Utc>,
    ttl: Duration,
) -> Result<DateTime<Utc>, AuthError> {
    created_at
        .checked_add_signed(ttl)
        .ok_or(AuthError::ExpiryOutOfRange)
}

/// Canonical form of an email address used as the account key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session_expiring_at(created_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Session {
        Session {
            id: generate_session_id(),
            user_id: Uuid::new_v4(),
            created_at,
            expires_at,
        }
    }

    #[test]
    fn generate_session_id_produces_32_char_alphanumeric() {
        let id = generate_session_id();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generate_session_id_is_unique() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn is_session_expired_returns_false_for_future_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now, now + Duration::hours(1));
        assert!(!is_session_expired(&session, now));
    }

    #[test]
    fn is_session_expired_returns_true_for_past_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now - Duration::hours(2), now - Duration::hours(1));
        assert!(is_session_expired(&session, now));
    }

    #[test]
    fn is_session_expired_returns_true_at_exact_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now - Duration::hours(1), now);
        assert!(is_session_expired(&session, now));
    }

    #[test]
    fn calculate_expiry_adds_ttl_to_created_at() {
        let created = Utc::now();
        let ttl = Duration::days(7);
        let expiry = calculate_expiry(created, ttl).unwrap();
        assert_eq!(expiry, created + ttl);
    }

    #[test]
    fn calculate_expiry_rejects_overflowing_ttl() {
        let result = calculate_expiry(Utc::now(), Duration::MAX);
        assert!(matches!(result, Err(AuthError::ExpiryOutOfRange)));
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" John.Doe@Example.COM "), "john.doe@example.com");
    }
}
