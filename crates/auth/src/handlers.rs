//! HTTP handlers for auth routes.

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use logistix_core::api::SuccessBody;
use logistix_core::auth::{
    calculate_expiry, generate_session_id, normalize_email, ChangePasswordRequest, Session,
    SignInRequest, SignUpRequest, User, UserProfile,
};
use logistix_core::storage::RepositoryError;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthJson};
use crate::extractors::{session_id_from_headers, CurrentUser, OptionalUser};
use crate::AuthState;

/// `{"success": true, "user": {...}}` returned by sign-up, sign-in, and profile updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserProfile,
}

impl AuthResponse {
    pub fn new(user: &User) -> Self {
        Self {
            success: true,
            user: user.profile(),
        }
    }
}

/// Creates the auth router with all authentication routes.
///
/// Routes:
/// - `POST /api/auth/signup` - Create an account and start a session
/// - `POST /api/auth/signin` - Start a session
/// - `POST /api/auth/signout` - End current session
/// - `POST /api/auth/signout-all` - End all sessions for current user
/// - `GET /api/auth/user` - Get current authenticated user
/// - `POST /api/auth/change-password` - Replace the password, ending other sessions
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/signout", post(sign_out))
        .route("/api/auth/signout-all", post(sign_out_all))
        .route("/api/auth/user", get(current_user))
        .route("/api/auth/change-password", post(change_password))
}

fn session_cookie(state: &AuthState, session: &Session) -> Cookie<'static> {
    Cookie::build((state.config.cookie_name.clone(), session.id.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(
            i64::try_from(state.config.session_ttl.as_secs()).unwrap_or(i64::MAX),
        ))
        .build()
}

fn removal_cookie(state: &AuthState) -> Cookie<'static> {
    Cookie::build((state.config.cookie_name.clone(), ""))
        .path("/")
        .build()
}

/// Creates a session for the user and attaches its cookie to the jar.
async fn start_session(
    state: &AuthState,
    user: &User,
    jar: CookieJar,
    context: &'static str,
) -> Result<CookieJar, AuthError> {
    let now = Utc::now();
    let expires_at = calculate_expiry(now, state.config.session_ttl_chrono())
        .map_err(AuthError::internal(context))?;
    let session = Session {
        id: generate_session_id(),
        user_id: user.id,
        created_at: now,
        expires_at,
    };
    state
        .sessions
        .create_session(&session)
        .await
        .map_err(AuthError::internal(context))?;

    tracing::info!(user_id = %user.id, "Created session");
    Ok(jar.add(session_cookie(state, &session)))
}

async fn sign_up(
    State(state): State<AuthState>,
    jar: CookieJar,
    AuthJson(request): AuthJson<SignUpRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    const CONTEXT: &str = "Failed to create account";

    request.validate()?;

    let email = normalize_email(&request.email);
    if state
        .users
        .get_user_by_email(&email)
        .await
        .map_err(AuthError::internal(CONTEXT))?
        .is_some()
    {
        return Err(AuthError::EmailTaken);
    }

    let password_hash = state
        .passwords
        .hash(&request.password)
        .await
        .map_err(AuthError::internal(CONTEXT))?;
    let user = request.into_user(password_hash);

    match state.users.create_user(&user).await {
        Ok(()) => {}
        // Lost a race with a concurrent sign-up for the same address.
        Err(RepositoryError::Duplicate { .. }) => return Err(AuthError::EmailTaken),
        Err(e) => return Err(AuthError::internal(CONTEXT)(e)),
    }
    tracing::info!(user_id = %user.id, "Created account");

    let jar = start_session(&state, &user, jar, CONTEXT).await?;
    Ok((jar, Json(AuthResponse::new(&user))))
}

async fn sign_in(
    State(state): State<AuthState>,
    jar: CookieJar,
    AuthJson(request): AuthJson<SignInRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    const CONTEXT: &str = "Failed to sign in";

    request.validate()?;

    let user = state
        .users
        .get_user_by_email(&normalize_email(&request.email))
        .await
        .map_err(AuthError::internal(CONTEXT))?;

    // Both branches pay for one Argon2 verification.
    let (user, valid) = match user {
        Some(user) => {
            let valid = state
                .passwords
                .verify(&request.password, &user.password_hash)
                .await
                .map_err(AuthError::internal(CONTEXT))?;
            (Some(user), valid)
        }
        None => {
            let valid = state
                .passwords
                .verify_dummy(&request.password)
                .await
                .map_err(AuthError::internal(CONTEXT))?;
            (None, valid)
        }
    };

    let user = match (user, valid) {
        (Some(user), true) => user,
        _ => {
            tracing::debug!("Rejected sign-in attempt");
            return Err(AuthError::InvalidCredentials);
        }
    };

    let jar = start_session(&state, &user, jar, CONTEXT).await?;
    Ok((jar, Json(AuthResponse::new(&user))))
}

async fn sign_out(
    State(state): State<AuthState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SuccessBody>), AuthError> {
    if let Some(session_id) = session_id_from_headers(&headers, &state.config.cookie_name) {
        state
            .sessions
            .delete_session(&session_id)
            .await
            .map_err(AuthError::internal("Failed to sign out"))?;
    }

    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, Json(SuccessBody::ok())))
}

async fn sign_out_all(
    State(state): State<AuthState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SuccessBody>), AuthError> {
    state
        .sessions
        .delete_user_sessions(user.id)
        .await
        .map_err(AuthError::internal("Failed to sign out"))?;
    tracing::info!(user_id = %user.id, "Signed out everywhere");

    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, Json(SuccessBody::ok())))
}

async fn current_user(OptionalUser(user): OptionalUser) -> Result<Json<UserProfile>, AuthError> {
    user.map(|u| Json(u.profile()))
        .ok_or(AuthError::NotAuthenticated)
}

async fn change_password(
    State(state): State<AuthState>,
    CurrentUser(mut user): CurrentUser,
    headers: HeaderMap,
    AuthJson(request): AuthJson<ChangePasswordRequest>,
) -> Result<Json<SuccessBody>, AuthError> {
    const CONTEXT: &str = "Failed to change password";

    request.validate()?;

    let valid = state
        .passwords
        .verify(&request.current_password, &user.password_hash)
        .await
        .map_err(AuthError::internal(CONTEXT))?;
    if !valid {
        return Err(AuthError::IncorrectPassword);
    }

    user.password_hash = state
        .passwords
        .hash(&request.new_password)
        .await
        .map_err(AuthError::internal(CONTEXT))?;
    user.updated_at = Utc::now();
    state
        .users
        .update_user(&user)
        .await
        .map_err(AuthError::internal(CONTEXT))?;

    // Keep the session making this request, end every other one.
    let ended = match session_id_from_headers(&headers, &state.config.cookie_name) {
        Some(keep) => state.sessions.delete_user_sessions_except(user.id, &keep).await,
        None => state.sessions.delete_user_sessions(user.id).await,
    };
    ended.map_err(AuthError::internal(CONTEXT))?;

    tracing::info!(user_id = %user.id, "Changed password");
    Ok(Json(SuccessBody::ok()))
}
