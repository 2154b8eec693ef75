mod videos;
mod youtube;

pub use videos::*;
pub use youtube::*;

use axum::{
    routing::get,
    Router,
};

use crate::system::health_check::health_check;
use crate::InnerState;

/// Creates the application routes.
#[tracing::instrument(name = "create_routes", skip(state))]
pub fn create_routes(state: InnerState) -> Router {
    tracing::info!("Setting up application routes");

    Router::new()
        // Video catalog routes
        .route("/videos", get(all_videos).post(create_video))
        .route(
            "/videos/:id",
            get(get_video).put(update_video).delete(delete_video),
        )
        // YouTube integration routes
        .route("/youtube/videos", get(fetch_youtube_videos))
        .route("/health", get(health_check))
        .with_state(state)
}
