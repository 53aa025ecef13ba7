use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use logistix_auth::auth_routes;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        dashboard,
        health::{healthz, livez},
        inquiries::{submit_contact, submit_quote, submit_quote_lead, subscribe_newsletter},
        pages::{about, contact, home, not_found, services, sign_in_page, sign_up_page, tracking},
        portal::{
            create_request, get_dashboard_stats, get_job, list_bills, list_jobs, list_requests,
            update_profile,
        },
        static_files::serve_static,
        tracking::{track_shipment, track_shipment_by_number},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        // Public enquiries
        .route("/api/contact", post(submit_contact))
        .route("/api/quote", post(submit_quote))
        .route("/api/get-quote", post(submit_quote_lead))
        .route("/api/newsletter", post(subscribe_newsletter))
        // Tracking
        .route("/api/tracking", post(track_shipment))
        .route("/api/tracking/{tracking_number}", get(track_shipment_by_number))
        // Customer dashboard
        .route("/api/jobs", get(list_jobs))
        .route("/api/jobs/{id}", get(get_job))
        .route("/api/bills", get(list_bills))
        .route("/api/requests", get(list_requests).post(create_request))
        .route("/api/profile", put(update_profile))
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .merge(auth_routes().with_state(state.auth.clone()))
        .layer(cors);

    let page_routes = Router::new()
        .route("/", get(home))
        .route("/services", get(services))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/tracking", get(tracking))
        .route("/signin", get(sign_in_page))
        .route("/signup", get(sign_up_page))
        .route("/dashboard", get(dashboard::overview))
        .route("/dashboard/jobs", get(dashboard::jobs))
        .route("/dashboard/invoices", get(dashboard::invoices))
        .route("/dashboard/requests", get(dashboard::requests))
        .route("/dashboard/profile", get(dashboard::profile))
        .route("/static/{filename}", get(serve_static))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz));

    // Main application router
    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
