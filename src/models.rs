use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored video record. Soft-deleted rows keep their data; `is_deleted`
/// is never accepted from a client payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub duration: Option<String>,
    pub published_at: DateTime<Utc>,
    pub url: Option<String>,
    pub is_deleted: bool,
}

/// The user-supplied fields of a video, used for both create and update.
/// `id` is store-assigned and `is_deleted` defaults to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub duration: Option<String>,
    pub published_at: DateTime<Utc>,
    pub url: Option<String>,
}

/// A video returned by the YouTube search integration. Transient: owned by
/// the caller of the fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}
