mod error;
mod functions;
mod requests;
mod traits;
mod types;
mod validation;

pub use error::AuthError;
pub use functions::{calculate_expiry, generate_session_id, is_session_expired, normalize_email};
pub use requests::{ChangePasswordRequest, SignInRequest, SignUpRequest, UpdateProfileRequest};
pub use traits::{Result, SessionRepository};
pub use types::{Session, SessionId, User, UserProfile};
pub use validation::validate_return_to;
