//! Customer dashboard pages.
//!
//! Each page resolves the customer through [`OptionalUser`] and redirects to
//! `/signin?return_to=<path>` when there is no live session, so the browser
//! lands back on the same page after signing in. The session check runs
//! before the query string is parsed.

use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use logistix_auth::OptionalUser;
use logistix_core::auth::User;
use logistix_core::portal::{
    summarize_bills, Bill, DashboardStats, InvoiceSummary, Job, RecordFilterQuery,
    SupportRequest,
};
use logistix_core::serde::deserialize_optional_string;

use super::pages::{HtmlTemplate, Layout, PageError};
use super::portal::{
    load_bills, load_dashboard_stats, load_job_detail, load_jobs, load_requests,
    JobDetailResponse,
};
use super::ApiError;
use crate::state::AppState;

const RECENT_JOBS: usize = 3;

/// Resolves the signed-in customer or builds the redirect to the sign-in page.
fn require_user(user: Option<User>, uri: &Uri) -> Result<User, Response> {
    user.ok_or_else(|| {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/dashboard");
        tracing::debug!(%target, "Redirecting signed-out visitor to sign in");
        Redirect::to(&format!("/signin?return_to={}", urlencoding::encode(target))).into_response()
    })
}

/// Splits a filter failure out of a load result so the page can show it inline.
fn split_filter_error<T: Default>(result: Result<T, ApiError>) -> Result<(T, Option<String>), PageError> {
    match result {
        Ok(records) => Ok((records, None)),
        Err(ApiError::Filter(err)) => Ok((T::default(), Some(err.to_string()))),
        Err(err) => Err(err.into()),
    }
}

#[derive(Template)]
#[template(path = "dashboard/overview.html")]
struct OverviewTemplate {
    layout: Layout,
    stats: DashboardStats,
    summary: InvoiceSummary,
    recent_jobs: Vec<Job>,
}

/// GET /dashboard
pub async fn overview(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, PageError> {
    let user = match require_user(user, &uri) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };

    let stats = load_dashboard_stats(&state, user.id).await?;
    let bills = load_bills(&state, user.id, &RecordFilterQuery::default()).await?;
    let mut recent_jobs = load_jobs(&state, user.id, &RecordFilterQuery::default()).await?;
    recent_jobs.truncate(RECENT_JOBS);

    Ok(HtmlTemplate(OverviewTemplate {
        layout: Layout::new("Dashboard", "dashboard", Some(&user)),
        stats,
        summary: summarize_bills(&bills),
        recent_jobs,
    })
    .into_response())
}

/// Query string of the jobs page: the record filter plus the selected job.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsPageQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub client_invoice_no: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub from_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub to_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub job: Option<String>,
}

impl JobsPageQuery {
    fn filter(&self) -> RecordFilterQuery {
        RecordFilterQuery {
            client_invoice_no: self.client_invoice_no.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard/jobs.html")]
struct JobsTemplate {
    layout: Layout,
    filter: RecordFilterQuery,
    filter_error: Option<String>,
    jobs: Vec<Job>,
    selected: Option<JobDetailResponse>,
}

/// GET /dashboard/jobs?clientInvoiceNo&fromDate&toDate&job
pub async fn jobs(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<JobsPageQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let user = match require_user(user, &uri) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };
    let Query(query) = query.map_err(ApiError::from)?;

    let filter = query.filter();
    let (jobs, filter_error) = split_filter_error(load_jobs(&state, user.id, &filter).await)?;

    let selected = match query.job.as_deref().and_then(|id| Uuid::parse_str(id).ok()) {
        Some(job_id) => load_job_detail(&state, user.id, job_id).await?,
        None => None,
    };

    Ok(HtmlTemplate(JobsTemplate {
        layout: Layout::new("Jobs", "jobs", Some(&user)),
        filter,
        filter_error,
        jobs,
        selected,
    })
    .into_response())
}

#[derive(Template)]
#[template(path = "dashboard/invoices.html")]
struct InvoicesTemplate {
    layout: Layout,
    filter: RecordFilterQuery,
    filter_error: Option<String>,
    bills: Vec<Bill>,
    summary: InvoiceSummary,
}

/// GET /dashboard/invoices?clientInvoiceNo&fromDate&toDate
pub async fn invoices(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    OriginalUri(uri): OriginalUri,
    filter: Result<Query<RecordFilterQuery>, QueryRejection>,
) -> Result<Response, PageError> {
    let user = match require_user(user, &uri) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };
    let Query(filter) = filter.map_err(ApiError::from)?;

    let (bills, filter_error) = split_filter_error(load_bills(&state, user.id, &filter).await)?;
    let summary = summarize_bills(&bills);

    Ok(HtmlTemplate(InvoicesTemplate {
        layout: Layout::new("Invoices", "invoices", Some(&user)),
        filter,
        filter_error,
        bills,
        summary,
    })
    .into_response())
}

#[derive(Template)]
#[template(path = "dashboard/requests.html")]
struct RequestsTemplate {
    layout: Layout,
    requests: Vec<SupportRequest>,
}

/// GET /dashboard/requests
pub async fn requests(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, PageError> {
    let user = match require_user(user, &uri) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };

    let requests = load_requests(&state, user.id).await?;

    Ok(HtmlTemplate(RequestsTemplate {
        layout: Layout::new("Requests", "requests", Some(&user)),
        requests,
    })
    .into_response())
}

#[derive(Template)]
#[template(path = "dashboard/profile.html")]
struct ProfileTemplate {
    layout: Layout,
    user: User,
}

/// GET /dashboard/profile
pub async fn profile(
    OptionalUser(user): OptionalUser,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, PageError> {
    let user = match require_user(user, &uri) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect),
    };

    Ok(HtmlTemplate(ProfileTemplate {
        layout: Layout::new("Profile", "profile", Some(&user)),
        user,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn test_require_user_redirect_keeps_path_and_query() {
        let uri: Uri = "/dashboard/jobs?fromDate=2024-12-01".parse().unwrap();

        let response = require_user(None, &uri).unwrap_err();

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers()[LOCATION],
            "/signin?return_to=%2Fdashboard%2Fjobs%3FfromDate%3D2024-12-01"
        );
    }

    #[test]
    fn test_split_filter_error_renders_inline() {
        let result: Result<Vec<Job>, ApiError> =
            Err(logistix_core::portal::RecordFilterError::InvalidDateRange.into());

        let (jobs, error) = split_filter_error(result).ok().unwrap();

        assert!(jobs.is_empty());
        assert_eq!(error.as_deref(), Some("fromDate must be on or before toDate"));
    }

    #[test]
    fn test_profile_template_prefills_fields() {
        let user = User::new("ops@acme.example.com", "h", "Asha", "Acme Imports", "5551234567")
            .with_ein_business_number(Some("12-3456789".to_string()));

        let html = ProfileTemplate {
            layout: Layout::new("Profile", "profile", Some(&user)),
            user,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"value="Acme Imports""#));
        assert!(html.contains(r#"value="12-3456789""#));
        assert!(html.contains(r#"data-api="/api/auth/change-password""#));
    }
}
