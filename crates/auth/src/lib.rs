//! Email and password authentication for the Unitas LogistiX portal.
//!
//! This crate provides:
//! - Argon2id password hashing on the blocking pool
//! - An in-memory session store and a background sweeper for expired sessions
//! - Axum extractors for the signed-in customer
//! - The `/api/auth/*` routes

mod config;
mod error;
mod extractors;
mod handlers;
mod password;
mod sessions;
mod state;

pub use config::{AuthConfig, PasswordParams};
pub use error::{AuthError, AuthJson};
pub use extractors::{session_id_from_headers, CurrentUser, OptionalUser};
pub use handlers::{auth_routes, AuthResponse};
pub use password::PasswordService;
pub use sessions::{spawn_session_sweeper, SessionStore};
pub use state::AuthState;
