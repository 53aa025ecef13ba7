//! Customer dashboard API: jobs, bills, support requests, profile, and stats.
//!
//! Every handler here takes [`CurrentUser`], so requests without a live
//! session are rejected with 401 before any storage is touched. Records are
//! always scoped to the signed-in customer.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use logistix_auth::{AuthResponse, CurrentUser};
use logistix_core::auth::UpdateProfileRequest;
use logistix_core::portal::{
    dashboard_stats, filter_bills, filter_jobs, sort_requests_newest_first, Bill, DashboardStats,
    Job, JobFile, RecordFilter, RecordFilterQuery, SendRequest, SupportRequest,
};

use crate::handlers::{ApiError, ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub files: Vec<JobFile>,
}

#[derive(Debug, Serialize)]
pub struct SupportRequestResponse {
    pub success: bool,
    pub request: SupportRequest,
}

/// The customer's jobs matching the filter, newest first.
pub async fn load_jobs(
    state: &AppState,
    user_id: Uuid,
    query: &RecordFilterQuery,
) -> Result<Vec<Job>, ApiError> {
    let filter = RecordFilter::try_from(query)?;
    let jobs = state
        .jobs
        .get_jobs_for_user(user_id)
        .await
        .map_err(ApiError::storage("Failed to load jobs"))?;
    Ok(filter_jobs(jobs, &filter))
}

/// A job and its documents, or `None` when it does not belong to the customer.
pub async fn load_job_detail(
    state: &AppState,
    user_id: Uuid,
    job_id: Uuid,
) -> Result<Option<JobDetailResponse>, ApiError> {
    let job = state
        .jobs
        .get_job(job_id)
        .await
        .map_err(ApiError::storage("Failed to load job"))?;

    let Some(job) = job.filter(|job| job.user_id == user_id) else {
        return Ok(None);
    };

    let files = state
        .jobs
        .get_job_files(job.id)
        .await
        .map_err(ApiError::storage("Failed to load job"))?;

    Ok(Some(JobDetailResponse { job, files }))
}

/// The customer's bills matching the filter, newest first.
pub async fn load_bills(
    state: &AppState,
    user_id: Uuid,
    query: &RecordFilterQuery,
) -> Result<Vec<Bill>, ApiError> {
    let filter = RecordFilter::try_from(query)?;
    let bills = state
        .bills
        .get_bills_for_user(user_id)
        .await
        .map_err(ApiError::storage("Failed to load bills"))?;
    Ok(filter_bills(bills, &filter))
}

/// The customer's support requests, newest first.
pub async fn load_requests(
    state: &AppState,
    user_id: Uuid,
) -> Result<Vec<SupportRequest>, ApiError> {
    let mut requests = state
        .requests
        .get_requests_for_user(user_id)
        .await
        .map_err(ApiError::storage("Failed to load requests"))?;
    sort_requests_newest_first(&mut requests);
    Ok(requests)
}

pub async fn load_dashboard_stats(
    state: &AppState,
    user_id: Uuid,
) -> Result<DashboardStats, ApiError> {
    let jobs = state
        .jobs
        .get_jobs_for_user(user_id)
        .await
        .map_err(ApiError::storage("Failed to load dashboard"))?;
    let requests = state
        .requests
        .get_requests_for_user(user_id)
        .await
        .map_err(ApiError::storage("Failed to load dashboard"))?;
    Ok(dashboard_stats(&jobs, &requests))
}

/// GET /api/jobs?clientInvoiceNo&fromDate&toDate
pub async fn list_jobs(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RecordFilterQuery>,
) -> Result<Json<Vec<Job>>, ApiError> {
    load_jobs(&state, user.id, &query).await.map(Json)
}

/// GET /api/jobs/{id}
pub async fn get_job(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetailResponse>, ApiError> {
    // A malformed ID cannot name any job, so it is reported the same way.
    let job_id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Job not found"))?;

    load_job_detail(&state, user.id, job_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Job not found"))
}

/// GET /api/bills?clientInvoiceNo&fromDate&toDate
pub async fn list_bills(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RecordFilterQuery>,
) -> Result<Json<Vec<Bill>>, ApiError> {
    load_bills(&state, user.id, &query).await.map(Json)
}

/// GET /api/requests
pub async fn list_requests(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<SupportRequest>>, ApiError> {
    load_requests(&state, user.id).await.map(Json)
}

/// POST /api/requests
pub async fn create_request(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SendRequest>,
) -> Result<(StatusCode, Json<SupportRequestResponse>), ApiError> {
    payload.validate()?;
    let request = payload.into_support_request(user.id);

    state
        .requests
        .create_request(&request)
        .await
        .map_err(ApiError::storage("Failed to submit request"))?;

    tracing::info!(user_id = %user.id, request_id = %request.id, "Support request created");

    Ok((
        StatusCode::CREATED,
        Json(SupportRequestResponse {
            success: true,
            request,
        }),
    ))
}

/// PUT /api/profile
pub async fn update_profile(
    CurrentUser(mut user): CurrentUser,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.validate()?;
    payload.apply_to(&mut user);

    state
        .users
        .update_user(&user)
        .await
        .map_err(ApiError::storage("Failed to update profile"))?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(AuthResponse::new(&user)))
}

/// GET /api/dashboard/stats
pub async fn get_dashboard_stats(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    load_dashboard_stats(&state, user.id).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use logistix_auth::AuthConfig;
    use logistix_core::portal::{generate_seed_portal, JobStatus};

    async fn seeded() -> (AppState, Uuid) {
        let state = AppState::new(AuthConfig::for_tests());
        let user_id = Uuid::new_v4();
        let today = NaiveDate::from_ymd_opt(2024, 12, 18).unwrap();
        let seed = generate_seed_portal(user_id, today);
        for job in &seed.jobs {
            state.jobs.create_job(job).await.unwrap();
        }
        for file in &seed.files {
            state.jobs.add_job_file(file).await.unwrap();
        }
        for bill in &seed.bills {
            state.bills.create_bill(bill).await.unwrap();
        }
        for request in &seed.requests {
            state.requests.create_request(request).await.unwrap();
        }
        (state, user_id)
    }

    #[tokio::test]
    async fn test_load_jobs_newest_first() {
        let (state, user_id) = seeded().await;

        let jobs = load_jobs(&state, user_id, &RecordFilterQuery::default())
            .await
            .unwrap();

        assert_eq!(jobs.len(), 5);
        assert!(jobs.windows(2).all(|w| w[0].job_date >= w[1].job_date));
    }

    #[tokio::test]
    async fn test_load_jobs_rejects_inverted_range() {
        let (state, user_id) = seeded().await;
        let query = RecordFilterQuery {
            from_date: Some("2024-12-10".to_string()),
            to_date: Some("2024-12-01".to_string()),
            ..Default::default()
        };

        let result = load_jobs(&state, user_id, &query).await;

        assert!(matches!(result, Err(ApiError::Filter(_))));
    }

    #[tokio::test]
    async fn test_job_detail_hidden_from_other_customers() {
        let (state, user_id) = seeded().await;
        let job = load_jobs(&state, user_id, &RecordFilterQuery::default())
            .await
            .unwrap()
            .remove(0);

        let own = load_job_detail(&state, user_id, job.id).await.unwrap();
        let other = load_job_detail(&state, Uuid::new_v4(), job.id).await.unwrap();

        assert!(own.is_some_and(|detail| !detail.files.is_empty()));
        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let (state, user_id) = seeded().await;
        let jobs = state.jobs.get_jobs_for_user(user_id).await.unwrap();
        let completed = jobs
            .iter()
            .filter(|j| j.status == JobStatus::Completed)
            .count();

        let stats = load_dashboard_stats(&state, user_id).await.unwrap();

        assert_eq!(stats.total_jobs, 5);
        assert_eq!(stats.completed_jobs, completed);
        assert_eq!(stats.pending_requests, 1);
    }

    #[tokio::test]
    async fn test_requests_newest_first() {
        let (state, user_id) = seeded().await;

        let requests = load_requests(&state, user_id).await.unwrap();

        assert!(requests
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }
}
