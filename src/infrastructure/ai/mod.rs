use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod parser;
pub mod prompt;

pub use parser::{GeneratedContent, ParseError};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("chat completion request failed: {0}")]
    Provider(#[from] reqwest::Error),

    #[error("chat completion failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model returned no choices")]
    NoChoices,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Turns article text into repurposed content via a generative model.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, article_text: &str) -> Result<GeneratedContent, GenerateError>;
}

/// OpenAI chat-completion client.
///
/// One request per `generate` call, no retries, no streaming. The API key
/// and model come from configuration and are injected at construction.
#[derive(Clone)]
pub struct OpenAiService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OpenAiService {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Ask the model to repurpose `article_text` and parse its reply.
    pub async fn generate_content(
        &self,
        article_text: &str,
    ) -> Result<GeneratedContent, GenerateError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt::build_prompt(article_text),
            }],
        };

        debug!(model = %self.model, "requesting chat completion");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(GenerateError::NoChoices)?;

        Ok(parser::parse_generated_content(&choice.message.content)?)
    }
}

#[async_trait]
impl ContentGenerator for OpenAiService {
    async fn generate(&self, article_text: &str) -> Result<GeneratedContent, GenerateError> {
        self.generate_content(article_text).await
    }
}
