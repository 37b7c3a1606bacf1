use anyhow::{Result, anyhow};
use tracing::info;
use uuid::Uuid;

use super::dto::{CreateJobRequest, JobResponse};
use super::repository::JobStore;
use crate::state::AppState;
use crate::workers::processor;

pub struct JobService;

impl JobService {
    /// Insert a pending job and hand it to the pipeline.
    ///
    /// The pipeline run is fire-and-forget: the caller gets the pending
    /// job back immediately and polls for progress.
    pub async fn create(state: AppState, req: CreateJobRequest) -> Result<JobResponse> {
        let job = state.jobs.insert(&req.url).await?;
        info!(job_id = %job.id, url = %job.original_url, "job accepted");

        let job_id = job.id;
        let worker_state = state.clone();
        tokio::spawn(async move {
            processor::run(worker_state, job_id).await;
        });

        Ok(JobResponse::from(job))
    }

    pub async fn list(state: AppState) -> Result<Vec<JobResponse>> {
        let jobs = state.jobs.list_all().await?;
        Ok(jobs.into_iter().map(JobResponse::from).collect())
    }

    pub async fn get(state: AppState, id: Uuid) -> Result<JobResponse> {
        let job = state
            .jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| anyhow!("Job not found"))?;

        Ok(JobResponse::from(job))
    }
}
