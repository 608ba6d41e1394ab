//! Job HTTP handlers
//!
//! Thin handlers: validate the request shape, call the job repository,
//! wrap the result. Authorization is enforced by the `AdminUser` extractor,
//! which runs before the body is read.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::info;

use crate::errors::AppResult;
use crate::models::{JobCreateRequest, JobSearchQuery, JobUpdateRequest};
use crate::web::{
    extractors::{AdminUser, RequestId, ValidatedJson, ValidatedQuery},
    responses::{created, ok, DeletedResponse, JobListResponse, JobResponse},
    utils::extract_id_param,
    AppState,
};

/// `POST /jobs` (admin)
pub async fn create_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    RequestId(request_id): RequestId,
    ValidatedJson(request): ValidatedJson<JobCreateRequest>,
) -> AppResult<impl IntoResponse> {
    let new_job = request.validate()?;
    let job = state.jobs.create(new_job).await?;

    info!(
        request_id = %request_id,
        admin = %admin.username,
        job_id = job.id,
        "Job created via API"
    );
    Ok(created(JobResponse { job }))
}

/// `GET /jobs` (public), optionally filtered by `title`, `minSalary`, `hasEquity`
pub async fn list_jobs(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<JobSearchQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = query.into_filter()?;
    let jobs = state.jobs.find_all(filter).await?;
    Ok(ok(JobListResponse { jobs }))
}

/// `GET /jobs/:id` (public)
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = extract_id_param("job", &id)?;
    let job = state.jobs.get(id).await?;
    Ok(ok(JobResponse { job }))
}

/// `PATCH /jobs/:id` (admin)
pub async fn update_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    RequestId(request_id): RequestId,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<JobUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let id = extract_id_param("job", &id)?;
    let update = request.validate()?;
    let job = state.jobs.update(id, update).await?;

    info!(
        request_id = %request_id,
        admin = %admin.username,
        job_id = job.id,
        "Job updated via API"
    );
    Ok(ok(JobResponse { job }))
}

/// `DELETE /jobs/:id` (admin)
pub async fn delete_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    RequestId(request_id): RequestId,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let job_id = extract_id_param("job", &id)?;
    state.jobs.delete(job_id).await?;

    info!(
        request_id = %request_id,
        admin = %admin.username,
        job_id = job_id,
        "Job deleted via API"
    );
    Ok(ok(DeletedResponse { deleted: id }))
}
