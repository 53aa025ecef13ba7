//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use logistix_core::auth::{is_session_expired, SessionId, User};

use crate::error::AuthError;
use crate::AuthState;

/// Extractor for the signed-in customer. Rejects with 401 `Unauthorized`.
pub struct CurrentUser(pub User);

/// Extractor for an optionally signed-in customer. Never rejects.
pub struct OptionalUser(pub Option<User>);

/// Reads the session ID from a `Bearer` token or, failing that, the session cookie.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    // Authorization header first (API clients)
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(SessionId::new(token.to_string()));
    }

    // Fall back to cookie (browsers)
    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .map(SessionId::new)
}

/// Resolves the request's session to a user, deleting the session if it has expired.
async fn resolve_user(auth_state: &AuthState, headers: &HeaderMap) -> Result<User, AuthError> {
    let session_id = session_id_from_headers(headers, &auth_state.config.cookie_name)
        .ok_or(AuthError::Unauthorized)?;

    let session = auth_state
        .sessions
        .get_session(&session_id)
        .await?
        .ok_or(AuthError::Unauthorized)?;

    if is_session_expired(&session, Utc::now()) {
        tracing::debug!(user_id = %session.user_id, "Deleting expired session");
        auth_state.sessions.delete_session(&session.id).await?;
        return Err(AuthError::Unauthorized);
    }

    auth_state
        .users
        .get_user(session.user_id)
        .await
        .map_err(AuthError::internal("User lookup failed"))?
        .ok_or(AuthError::Unauthorized)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        resolve_user(&auth_state, &parts.headers)
            .await
            .map(CurrentUser)
    }
}

impl<S> FromRequestParts<S> for OptionalUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        match resolve_user(&auth_state, &parts.headers).await {
            Ok(user) => Ok(OptionalUser(Some(user))),
            Err(AuthError::Unauthorized) => Ok(OptionalUser(None)),
            Err(e) => {
                tracing::warn!(error = %e, "Treating request as signed out");
                Ok(OptionalUser(None))
            }
        }
    }
}
