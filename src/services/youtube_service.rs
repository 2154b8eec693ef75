//! YouTube search integration.
//!
//! One outbound GET against the Data API `search` endpoint with the
//! configured query parameters, mapped into a flat list of
//! [`YoutubeVideo`] records. Single attempt, no retry.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::YoutubeSettings;
use crate::errors::AppError;
use crate::models::YoutubeVideo;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub items: Option<Vec<SearchResult>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: Option<SearchResultId>,
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub video_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub published_at: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
}

#[derive(Debug, Clone)]
pub struct YoutubeService {
    settings: YoutubeSettings,
    http_client: Client,
}

impl YoutubeService {
    /// Fails fast when the API key is absent; the process should not have
    /// started without it.
    pub fn new(settings: YoutubeSettings) -> Result<Self, AppError> {
        if settings.api_key.is_empty() {
            return Err(AppError::Configuration(
                "YOUTUBE_API_KEY is not set".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Could not build HTTP client: {}", e))
            })?;

        Ok(Self {
            settings,
            http_client,
        })
    }

    #[tracing::instrument(name = "Fetch videos from YouTube", skip(self))]
    pub async fn fetch_videos(&self) -> Result<Vec<YoutubeVideo>, AppError> {
        tracing::info!("Requesting videos from the YouTube search API");

        let url = format!("{}/search", self.settings.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", self.settings.query.as_str()),
                ("regionCode", self.settings.region_code.as_str()),
                ("publishedAfter", self.settings.published_after.as_str()),
                ("publishedBefore", self.settings.published_before.as_str()),
                ("key", self.settings.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!("YouTube API returned status {}", response.status());
            return Err(AppError::ExternalService(anyhow::anyhow!(
                "YouTube search request failed with status {}",
                response.status()
            )));
        }

        let search: SearchListResponse = response.json().await?;

        let mut videos = Vec::new();

        for item in search.items.unwrap_or_default() {
            // Items without a snippet carry nothing we can map.
            if let Some(snippet) = item.snippet {
                let published_at = parse_published_at(&snippet.published_at)?;

                videos.push(YoutubeVideo {
                    external_id: item
                        .id
                        .and_then(|id| id.video_id)
                        .unwrap_or_default(),
                    title: snippet.title,
                    description: snippet.description,
                    channel_title: snippet.channel_title,
                    published_at,
                });
            }
        }

        tracing::info!("Mapped {} videos from the YouTube response", videos.len());

        Ok(videos)
    }
}

fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            tracing::error!("Failed to parse publishedAt '{}': {:?}", raw, e);
            AppError::ExternalService(
                anyhow::Error::new(e).context("Invalid publishedAt in YouTube response"),
            )
        })
}
