use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use super::dto::{CreateJobRequest, JobResponse};
use super::service::JobService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;

/// Submit a URL for repurposing
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 202, description = "Job accepted", body = ApiResponse<JobResponse>),
        (status = 400, description = "Invalid URL"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> impl IntoResponse {
    if payload.validate().is_err() {
        return ApiError("Invalid URL provided.".to_string(), StatusCode::BAD_REQUEST)
            .into_response();
    }

    match JobService::create(state, payload).await {
        Ok(job) => ApiSuccess(job, StatusCode::ACCEPTED, "Job accepted for processing")
            .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// List all jobs, newest first
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "All jobs", body = ApiResponse<Vec<JobResponse>>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Jobs"
)]
pub async fn list_jobs(State(state): State<AppState>) -> impl IntoResponse {
    match JobService::list(state).await {
        Ok(jobs) => ApiSuccess(jobs, StatusCode::OK, "Jobs retrieved successfully").into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// Poll a single job
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job details", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found")
    ),
    tag = "Jobs"
)]
pub async fn get_job(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match JobService::get(state, id).await {
        Ok(job) => ApiSuccess(job, StatusCode::OK, "Job retrieved successfully").into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::NOT_FOUND).into_response(),
    }
}
