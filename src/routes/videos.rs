use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Video, VideoPayload};
use crate::InnerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[tracing::instrument(name = "List videos", skip(inner))]
pub async fn all_videos(
    State(inner): State<InnerState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Video>>, AppError> {
    if pagination.page_number < 1 || pagination.page_size < 1 {
        return Err(AppError::Validation(
            "pageNumber and pageSize must be at least 1".to_string(),
        ));
    }

    let videos = inner
        .videos
        .list_videos(pagination.page_number, pagination.page_size)
        .await?;

    Ok(Json(videos))
}

#[tracing::instrument(name = "Get video", skip(inner))]
pub async fn get_video(
    State(inner): State<InnerState>,
    Path(id): Path<i64>,
) -> Result<Json<Video>, AppError> {
    let video = inner
        .videos
        .get_video(id)
        .await?
        .filter(|video| !video.is_deleted)
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", id)))?;

    Ok(Json(video))
}

#[tracing::instrument(name = "Create video", skip(inner, payload), fields(title = %payload.title))]
pub async fn create_video(
    State(inner): State<InnerState>,
    Json(payload): Json<VideoPayload>,
) -> Result<(StatusCode, Json<Video>), AppError> {
    let video = inner.videos.add_video(payload).await?;

    tracing::debug!("Created video with id {}", video.id);

    Ok((StatusCode::CREATED, Json(video)))
}

#[tracing::instrument(name = "Update video", skip(inner, payload))]
pub async fn update_video(
    State(inner): State<InnerState>,
    Path(id): Path<i64>,
    Json(payload): Json<VideoPayload>,
) -> Result<StatusCode, AppError> {
    if id < 1 {
        return Err(AppError::Validation(format!("Invalid video id {}", id)));
    }

    // A soft-deleted record is invisible to callers, so updating it is 404.
    let existing = inner.videos.get_video(id).await?;
    if !existing.is_some_and(|video| !video.is_deleted) {
        return Err(AppError::NotFound(format!("Video {} not found", id)));
    }

    inner.videos.update_video(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(name = "Delete video", skip(inner))]
pub async fn delete_video(
    State(inner): State<InnerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    // Deleting stays idempotent while the row exists: a second delete of the
    // same id finds the (soft-deleted) row and succeeds again.
    inner
        .videos
        .get_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", id)))?;

    inner.videos.delete_video(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
