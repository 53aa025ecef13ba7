//! Static file serving for the stylesheet and the form script.
//!
//! Both assets are compiled into the binary.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const SITE_CSS: &str = include_str!("../../static/site.css");
const APP_JS: &str = include_str!("../../static/app.js");

/// Serve a compiled-in static asset.
pub async fn serve_static(Path(filename): Path<String>) -> Response {
    let asset = match filename.as_str() {
        "site.css" => Some((SITE_CSS, "text/css; charset=utf-8")),
        "app.js" => Some((APP_JS, "application/javascript; charset=utf-8")),
        _ => None,
    };

    match asset {
        Some((contents, content_type)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            contents,
        )
            .into_response(),
        None => {
            tracing::debug!(%filename, "Unknown static asset");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
