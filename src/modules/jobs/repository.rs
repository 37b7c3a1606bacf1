use anyhow::{Result, anyhow};
use async_trait::async_trait;
use uuid::Uuid;

use super::model::Job;
use crate::infrastructure::db::pool::DbPool;

/// Persistence contract for jobs.
///
/// The pipeline only ever touches its own job by identifier; `save` writes
/// the full mutable state in one statement so readers always see a
/// consistent snapshot.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, original_url: &str) -> Result<Job>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>>;
    async fn save(&self, job: &Job) -> Result<()>;
    async fn list_all(&self) -> Result<Vec<Job>>;
}

const JOB_COLUMNS: &str =
    "id, original_url, status, status_detail, summary, tweets, linkedin_post, created_at, updated_at";

#[derive(Clone)]
pub struct JobRepository {
    pool: DbPool,
}

impl JobRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn insert(&self, original_url: &str) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (original_url, status) VALUES ($1, 'pending') RETURNING {JOB_COLUMNS}"
        ))
        .bind(original_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create job: {}", e))?;

        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch job: {}", e))?;

        Ok(job)
    }

    async fn save(&self, job: &Job) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET
                status = $1,
                status_detail = $2,
                summary = $3,
                tweets = $4,
                linkedin_post = $5,
                updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&job.status)
        .bind(&job.status_detail)
        .bind(&job.summary)
        .bind(&job.tweets)
        .bind(&job.linkedin_post)
        .bind(job.id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to save job: {}", e))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch jobs: {}", e))?;

        Ok(jobs)
    }
}
