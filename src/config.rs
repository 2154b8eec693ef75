//! Process configuration, loaded once at startup from the environment.

use url::Url;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub youtube: YoutubeSettings,
}

/// Search parameters for the YouTube Data API. Immutable after load; the
/// adapter receives a copy instead of reading the environment per call.
#[derive(Debug, Clone)]
pub struct YoutubeSettings {
    pub api_key: String,
    pub base_url: String,
    pub query: String,
    pub region_code: String,
    pub published_after: String,
    pub published_before: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        let youtube = YoutubeSettings {
            api_key: std::env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            base_url: std::env::var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string()),
            query: std::env::var("YOUTUBE_QUERY")
                .unwrap_or_else(|_| "manipulação de medicamentos".to_string()),
            region_code: std::env::var("YOUTUBE_REGION_CODE").unwrap_or_else(|_| "BR".to_string()),
            published_after: std::env::var("YOUTUBE_PUBLISHED_AFTER")
                .unwrap_or_else(|_| "2025-01-01T00:00:00Z".to_string()),
            published_before: std::env::var("YOUTUBE_PUBLISHED_BEFORE")
                .unwrap_or_else(|_| "2026-01-01T00:00:00Z".to_string()),
        };

        Url::parse(&youtube.base_url).map_err(|e| {
            AppError::Configuration(format!("YOUTUBE_BASE_URL is not a valid URL: {}", e))
        })?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .map_err(|e| AppError::Configuration(format!("PORT is not a valid port: {}", e)))?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:videoteca.db".to_string());

        Ok(Settings {
            port,
            database_url,
            youtube,
        })
    }
}
