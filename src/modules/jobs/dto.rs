use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::model::Job;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(url(message = "Invalid URL provided."))]
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: Uuid,
    pub original_url: String,
    pub status: String,
    pub status_detail: Option<String>,
    pub summary: Option<String>,
    pub tweets: Vec<String>,
    pub linkedin_post: Option<String>,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        // An unreadable tweets column degrades to an empty list rather
        // than failing the whole listing.
        let tweets = job.get_tweets().unwrap_or_default();
        Self {
            id: job.id,
            original_url: job.original_url,
            status: job.status,
            status_detail: job.status_detail,
            summary: job.summary,
            tweets,
            linkedin_post: job.linkedin_post,
            created_at: job.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::model::JobStatus;

    #[test]
    fn response_decodes_the_tweets_column() {
        let job = Job {
            id: Uuid::new_v4(),
            original_url: "https://example.com".to_string(),
            status: JobStatus::Complete.as_str().to_string(),
            status_detail: None,
            summary: Some("S".to_string()),
            tweets: Some(r#"["A","B"]"#.to_string()),
            linkedin_post: Some("L".to_string()),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };

        let response = JobResponse::from(job);
        assert_eq!(response.tweets, vec!["A", "B"]);
        assert_eq!(response.status, "complete");
    }

    #[test]
    fn validates_the_submitted_url() {
        let ok = CreateJobRequest { url: "https://example.com/article".to_string() };
        let bad = CreateJobRequest { url: "not a url".to_string() };

        assert!(ok.validate().is_ok());
        assert!(bad.validate().is_err());
    }
}
