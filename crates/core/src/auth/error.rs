use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Creation time plus TTL does not fit in a timestamp.
    #[error("session expiry is out of range")]
    ExpiryOutOfRange,
}
