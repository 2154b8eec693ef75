//! Persistence layer for video records.
//!
//! Soft-delete policy: `list` filters deleted rows in SQL, `get_by_id`
//! returns the raw row deleted or not. Hiding soft-deleted rows from
//! callers is the boundary's job, which keeps `delete` idempotent for a
//! row that still exists.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::{Video, VideoPayload};
use crate::utils::{timeout_query, QUERY_TIMEOUT};

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Active (non-deleted) videos ordered by id, one page at a time.
    async fn list(&self, page_number: u32, page_size: u32) -> Result<Vec<Video>, AppError>;

    /// The row with this id regardless of its `is_deleted` state.
    async fn get_by_id(&self, id: i64) -> Result<Option<Video>, AppError>;

    /// Inserts a new record and returns it with its assigned id.
    async fn add(&self, payload: &VideoPayload) -> Result<Video, AppError>;

    /// Overwrites every user-supplied field of an existing record.
    /// Fails with `NotFound` when no row has this id.
    async fn update(&self, id: i64, payload: &VideoPayload) -> Result<(), AppError>;

    /// Marks the record as deleted. A no-op when the row is absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct SqliteVideoRepository {
    db: SqlitePool,
}

impl SqliteVideoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoRepository for SqliteVideoRepository {
    async fn list(&self, page_number: u32, page_size: u32) -> Result<Vec<Video>, AppError> {
        tracing::debug!("Fetching videos page {} of size {}", page_number, page_size);

        let offset = (i64::from(page_number) - 1) * i64::from(page_size);

        let videos = timeout_query(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Video>(
                r#"SELECT * FROM videos WHERE is_deleted = FALSE ORDER BY id LIMIT $1 OFFSET $2"#,
            )
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.db),
        )
        .await?;

        Ok(videos)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Video>, AppError> {
        tracing::debug!("Fetching video with id {}", id);

        let video = timeout_query(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Video>(r#"SELECT * FROM videos WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.db),
        )
        .await?;

        Ok(video)
    }

    async fn add(&self, payload: &VideoPayload) -> Result<Video, AppError> {
        tracing::debug!("Inserting video titled '{}'", payload.title);

        let video = timeout_query(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, Video>(
                r#"
                INSERT INTO videos (title, description, author, duration, published_at, url, is_deleted)
                VALUES ($1, $2, $3, $4, $5, $6, FALSE)
                RETURNING *
                "#,
            )
            .bind(&payload.title)
            .bind(&payload.description)
            .bind(&payload.author)
            .bind(&payload.duration)
            .bind(payload.published_at)
            .bind(&payload.url)
            .fetch_one(&self.db),
        )
        .await?;

        Ok(video)
    }

    async fn update(&self, id: i64, payload: &VideoPayload) -> Result<(), AppError> {
        tracing::debug!("Updating video with id {}", id);

        let result = timeout_query(
            QUERY_TIMEOUT,
            sqlx::query(
                r#"
                UPDATE videos
                SET title = $2, description = $3, author = $4, duration = $5,
                    published_at = $6, url = $7
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(&payload.title)
            .bind(&payload.description)
            .bind(&payload.author)
            .bind(&payload.duration)
            .bind(payload.published_at)
            .bind(&payload.url)
            .execute(&self.db),
        )
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("Video with id {} not found for update", id);
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!("Soft-deleting video with id {}", id);

        let result = timeout_query(
            QUERY_TIMEOUT,
            sqlx::query(r#"UPDATE videos SET is_deleted = TRUE WHERE id = $1"#)
                .bind(id)
                .execute(&self.db),
        )
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("Video with id {} was absent at delete, nothing to do", id);
        }

        Ok(())
    }
}
