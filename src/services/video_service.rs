use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Video, VideoPayload};
use crate::repository::VideoRepository;

/// Orchestration over the video repository. Logs intent, delegates, and
/// propagates repository errors unchanged.
#[derive(Clone)]
pub struct VideoService {
    repository: Arc<dyn VideoRepository>,
}

impl VideoService {
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(name = "List videos", skip(self))]
    pub async fn list_videos(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Vec<Video>, AppError> {
        tracing::info!("Listing videos page {} of size {}", page_number, page_size);
        self.repository.list(page_number, page_size).await
    }

    #[tracing::instrument(name = "Get video", skip(self))]
    pub async fn get_video(&self, id: i64) -> Result<Option<Video>, AppError> {
        tracing::info!("Getting video with id {}", id);
        self.repository.get_by_id(id).await
    }

    #[tracing::instrument(name = "Add video", skip(self, payload), fields(title = %payload.title))]
    pub async fn add_video(&self, payload: VideoPayload) -> Result<Video, AppError> {
        tracing::info!("Adding video titled '{}'", payload.title);
        self.repository.add(&payload).await
    }

    #[tracing::instrument(name = "Update video", skip(self, payload))]
    pub async fn update_video(&self, id: i64, payload: VideoPayload) -> Result<(), AppError> {
        tracing::info!("Updating video with id {}", id);
        self.repository.update(id, &payload).await
    }

    #[tracing::instrument(name = "Delete video", skip(self))]
    pub async fn delete_video(&self, id: i64) -> Result<(), AppError> {
        tracing::info!("Soft-deleting video with id {}", id);
        self.repository.delete(id).await
    }
}
