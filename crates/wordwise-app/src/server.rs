use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

const DEFAULT_AUDIO_ROUTE: &str = "/audio.mp3";

pub fn router(state: Arc<AppState>) -> Router {
    let audio = &state.config.audio;
    let audio_route = if audio.public_url.starts_with('/') {
        audio.public_url.clone()
    } else {
        DEFAULT_AUDIO_ROUTE.to_string()
    };
    let audio_file = ServeFile::new(&audio.output_path);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/words/:word", get(handlers::word_info))
        .route("/api/daily-word", get(handlers::daily_word))
        .route("/api/pronunciation/score", post(handlers::score))
        .route_service(&audio_route, audio_file)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = state.config.server.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
