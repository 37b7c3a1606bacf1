use serde::Deserialize;

use crate::config::env::{self, EnvKey};

/// Process-wide configuration, loaded once at startup.
///
/// `DATABASE_URL` and `OPENAI_API_KEY` are required; a missing key makes
/// `new()` fail and the process refuses to start.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 8080),
            database_url: env::get(EnvKey::DatabaseUrl)?,
            openai_api_key: env::get(EnvKey::OpenAiApiKey)?,
            openai_model: env::get_or(EnvKey::OpenAiModel, "gpt-3.5-turbo"),
        })
    }
}
