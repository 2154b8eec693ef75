use std::error::Error;
use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use api_videoteca::config::Settings;
use api_videoteca::db::init_db;
use api_videoteca::repository::SqliteVideoRepository;
use api_videoteca::routes::create_routes;
use api_videoteca::services::{VideoService, YoutubeService};
use api_videoteca::InnerState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_videoteca=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let db = init_db(&settings.database_url).await?;

    let repository = Arc::new(SqliteVideoRepository::new(db));
    let videos = VideoService::new(repository);
    let youtube = YoutubeService::new(settings.youtube.clone())?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app_state = InnerState { videos, youtube };

    let app = create_routes(app_state)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;

    tracing::debug!(
        "listening on {}",
        listener
            .local_addr()
            .expect("Could not convert listener address to local address")
    );

    axum::serve(listener, app).await?;

    Ok(())
}
