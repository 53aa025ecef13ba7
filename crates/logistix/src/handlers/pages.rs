//! Server-rendered public pages, the sign-in and sign-up screens, and the
//! HTML error pages.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use logistix_auth::OptionalUser;
use logistix_core::auth::{validate_return_to, User, UserProfile};
use logistix_core::inquiry::SERVICE_TYPES;
use logistix_core::serde::deserialize_optional_string;
use logistix_core::tracking::{TrackingRequest, TrackingTimeline};

use crate::content::{
    Highlight, Milestone, Service, Stat, TeamMember, CERTIFICATIONS, CONTACT_STATS, HOME_STATS,
    MILESTONES, SERVICES, TEAM, WHY_CHOOSE_US,
};
use crate::handlers::{tracking::lookup_timeline, ApiError};
use crate::state::AppState;

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Data every page hands to `base.html`.
pub struct Layout {
    pub title: String,
    /// Navigation key of the current page, used to highlight the menu entry.
    pub active: &'static str,
    pub user: Option<UserProfile>,
}

impl Layout {
    pub fn new(title: impl Into<String>, active: &'static str, user: Option<&User>) -> Self {
        Self {
            title: title.into(),
            active,
            user: user.map(User::profile),
        }
    }
}

/// A failure while building a page, rendered as an HTML error page.
pub struct PageError(pub ApiError);

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            ApiError::Storage { context, source } => {
                tracing::error!(error = %source, "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        };
        error_page(status, None, message)
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    layout: Layout,
    status: u16,
    heading: String,
    message: String,
}

fn error_page(status: StatusCode, user: Option<&User>, message: String) -> Response {
    let heading = status.canonical_reason().unwrap_or("Error").to_string();
    let template = ErrorTemplate {
        layout: Layout::new(heading.clone(), "", user),
        status: status.as_u16(),
        heading,
        message,
    };
    (status, HtmlTemplate(template)).into_response()
}

// ============================================================================
// Public pages
// ============================================================================

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    layout: Layout,
    services: &'static [Service],
    stats: &'static [Stat],
    service_types: &'static [&'static str],
}

/// GET /
pub async fn home(OptionalUser(user): OptionalUser) -> impl IntoResponse {
    HtmlTemplate(HomeTemplate {
        layout: Layout::new("Global Logistics Solutions", "home", user.as_ref()),
        services: SERVICES,
        stats: HOME_STATS,
        service_types: SERVICE_TYPES,
    })
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate {
    layout: Layout,
    services: &'static [Service],
    highlights: &'static [Highlight],
    service_types: &'static [&'static str],
}

/// GET /services
pub async fn services(OptionalUser(user): OptionalUser) -> impl IntoResponse {
    HtmlTemplate(ServicesTemplate {
        layout: Layout::new("Our Services", "services", user.as_ref()),
        services: SERVICES,
        highlights: WHY_CHOOSE_US,
        service_types: SERVICE_TYPES,
    })
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    layout: Layout,
    milestones: &'static [Milestone],
    team: &'static [TeamMember],
    certifications: &'static [Highlight],
}

/// GET /about
pub async fn about(OptionalUser(user): OptionalUser) -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        layout: Layout::new("About Us", "about", user.as_ref()),
        milestones: MILESTONES,
        team: TEAM,
        certifications: CERTIFICATIONS,
    })
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    layout: Layout,
    stats: &'static [Stat],
    service_types: &'static [&'static str],
}

/// GET /contact
pub async fn contact(OptionalUser(user): OptionalUser) -> impl IntoResponse {
    HtmlTemplate(ContactTemplate {
        layout: Layout::new("Contact Our Team", "contact", user.as_ref()),
        stats: CONTACT_STATS,
        service_types: SERVICE_TYPES,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackingPageQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub number: Option<String>,
}

#[derive(Template)]
#[template(path = "tracking.html")]
struct TrackingTemplate {
    layout: Layout,
    number: String,
    timeline: Option<TrackingTimeline>,
    /// Set when a well-formed number matched nothing.
    not_found: bool,
    error: Option<String>,
}

/// GET /tracking?number=
pub async fn tracking(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<TrackingPageQuery>,
) -> Result<Response, PageError> {
    let mut template = TrackingTemplate {
        layout: Layout::new("Track Your Shipment", "tracking", user.as_ref()),
        number: query.number.clone().unwrap_or_default(),
        timeline: None,
        not_found: false,
        error: None,
    };

    if let Some(number) = query.number {
        match lookup_timeline(&state, &TrackingRequest::new(number)).await {
            Ok(Some(timeline)) => template.timeline = Some(timeline),
            Ok(None) => template.not_found = true,
            Err(ApiError::Validation { errors, .. }) => {
                template.error = errors.errors().first().map(|e| e.message.clone());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(HtmlTemplate(template).into_response())
}

// ============================================================================
// Sign in / sign up
// ============================================================================

const AFTER_SIGN_IN: &str = "/dashboard";

#[derive(Debug, Default, Deserialize)]
pub struct SignInQuery {
    pub return_to: Option<String>,
}

#[derive(Template)]
#[template(path = "signin.html")]
struct SignInTemplate {
    layout: Layout,
    return_to: String,
}

/// GET /signin?return_to=
///
/// - Signed in: redirects to the dashboard
/// - Signed out: renders the form, which returns to `return_to` when it is a safe relative path
pub async fn sign_in_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<SignInQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to(AFTER_SIGN_IN).into_response();
    }

    let return_to = query
        .return_to
        .as_deref()
        .and_then(validate_return_to)
        .unwrap_or(AFTER_SIGN_IN)
        .to_string();

    HtmlTemplate(SignInTemplate {
        layout: Layout::new("Sign In", "signin", None),
        return_to,
    })
    .into_response()
}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignUpTemplate {
    layout: Layout,
}

/// GET /signup
pub async fn sign_up_page(OptionalUser(user): OptionalUser) -> Response {
    if user.is_some() {
        return Redirect::to(AFTER_SIGN_IN).into_response();
    }

    HtmlTemplate(SignUpTemplate {
        layout: Layout::new("Create Account", "signup", None),
    })
    .into_response()
}

/// Fallback for unknown routes.
pub async fn not_found(OptionalUser(user): OptionalUser) -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        user.as_ref(),
        "The page you are looking for does not exist.".to_string(),
    )
}
