use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum JobStatus {
    Pending,
    Processing,
    Complete,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Complete => "complete",
            JobStatus::Failed => "failed",
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "processing" => JobStatus::Processing,
            "complete" => JobStatus::Complete,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Pending,
        }
    }
}

/// A single content repurposing task. Status is stored as text in the DB.
///
/// The result columns stay NULL until the job completes; `tweets` holds a
/// JSON array of strings, as the listing API wants them ordered.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Job {
    pub id: Uuid,
    pub original_url: String,
    pub status: String,
    pub status_detail: Option<String>,
    pub summary: Option<String>,
    pub tweets: Option<String>,
    pub linkedin_post: Option<String>,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

impl Job {
    /// Marshal the tweet list into the JSON column.
    pub fn set_tweets(&mut self, tweets: &[String]) -> Result<(), serde_json::Error> {
        self.tweets = Some(serde_json::to_string(tweets)?);
        Ok(())
    }

    /// Unmarshal the JSON column back into a tweet list.
    pub fn get_tweets(&self) -> Result<Vec<String>, serde_json::Error> {
        match self.tweets.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw),
        }
    }
}
