//! The job pipeline: scrape → generate → persist results.
//!
//! One run per job, spawned fire-and-forget at submission. Each step
//! persists the full job state before the next step starts, so a polling
//! reader always sees a consistent snapshot. Failures map to one coarse
//! status detail per step; the underlying cause only goes to the log.

use anyhow::Result;
use tracing::{error, info};
use uuid::Uuid;

use crate::infrastructure::ai::ContentGenerator;
use crate::infrastructure::scraper::ArticleScraper;
use crate::modules::jobs::model::{Job, JobStatus};
use crate::modules::jobs::repository::JobStore;
use crate::state::AppState;

pub async fn run(state: AppState, job_id: Uuid) {
    process_job(&state.jobs, &state.scraper, &state.ai, job_id).await;
}

pub async fn process_job<S, C, G>(store: &S, scraper: &C, generator: &G, job_id: Uuid)
where
    S: JobStore + ?Sized,
    C: ArticleScraper + ?Sized,
    G: ContentGenerator + ?Sized,
{
    info!(%job_id, "starting to process job");

    let mut job = match store.find_by_id(job_id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            error!(%job_id, "could not find job to process");
            return;
        }
        Err(e) => {
            error!(%job_id, error = %e, "failed to load job");
            return;
        }
    };

    // 1. Scrape the content from the URL.
    job.status = JobStatus::Processing.as_str().to_string();
    job.status_detail = Some("Scraping article content...".to_string());
    if persist(store, &job).await.is_err() {
        return;
    }

    let article_text = match scraper.scrape(&job.original_url).await {
        Ok(text) => text,
        Err(e) => {
            error!(%job_id, error = %e, "scraping failed");
            fail(store, &mut job, "Failed to scrape content from URL.").await;
            return;
        }
    };

    // 2. Generate content with AI.
    job.status_detail = Some("Generating content with AI...".to_string());
    if persist(store, &job).await.is_err() {
        return;
    }

    let content = match generator.generate(&article_text).await {
        Ok(content) => content,
        Err(e) => {
            error!(%job_id, error = %e, "generation failed");
            fail(store, &mut job, "Failed to generate content from AI.").await;
            return;
        }
    };

    // 3. Record the results and mark the job complete. The tweets are
    // marshalled first so a failed job never carries partial results.
    if let Err(e) = job.set_tweets(&content.tweets) {
        error!(%job_id, error = %e, "tweet serialization failed");
        fail(store, &mut job, "Failed to serialize generated tweets.").await;
        return;
    }
    job.summary = Some(content.summary);
    job.linkedin_post = Some(content.linkedin_post);
    job.status = JobStatus::Complete.as_str().to_string();
    job.status_detail = None;
    if persist(store, &job).await.is_err() {
        return;
    }

    info!(%job_id, "successfully processed job");
}

async fn fail<S: JobStore + ?Sized>(store: &S, job: &mut Job, detail: &str) {
    job.status = JobStatus::Failed.as_str().to_string();
    job.status_detail = Some(detail.to_string());
    let _ = persist(store, job).await;
}

async fn persist<S: JobStore + ?Sized>(store: &S, job: &Job) -> Result<()> {
    store.save(job).await.map_err(|e| {
        error!(job_id = %job.id, error = %e, "failed to persist job state");
        e
    })
}
