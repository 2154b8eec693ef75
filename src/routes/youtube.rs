use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::YoutubeVideo;
use crate::InnerState;

#[tracing::instrument(name = "Fetch YouTube videos", skip(inner))]
pub async fn fetch_youtube_videos(
    State(inner): State<InnerState>,
) -> Result<Json<Vec<YoutubeVideo>>, AppError> {
    let videos = inner.youtube.fetch_videos().await?;

    Ok(Json(videos))
}
