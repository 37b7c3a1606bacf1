use crate::config::settings::AppConfig;
use crate::infrastructure::ai::OpenAiService;
use crate::infrastructure::db::pool::DbPool;
use crate::infrastructure::scraper::ScraperService;
use crate::modules::jobs::repository::JobRepository;

/// Shared handles for handlers and pipeline runs. The API credential and
/// clients are built once here and injected, never read from globals.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub jobs: JobRepository,
    pub scraper: ScraperService,
    pub ai: OpenAiService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool) -> Self {
        let ai = OpenAiService::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        );

        Self {
            config,
            jobs: JobRepository::new(db),
            scraper: ScraperService::new(),
            ai,
        }
    }
}
