use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use wordwise_core::scorer;
use wordwise_types::{DailyWordRecord, PronunciationScore, WordInfo};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub spoken: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn word_info(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Json<WordInfo> {
    Json(state.aggregator.word_info(&word).await)
}

pub async fn daily_word(State(state): State<Arc<AppState>>) -> Json<DailyWordRecord> {
    Json(state.daily.generate().await)
}

pub async fn score(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<PronunciationScore>, (StatusCode, Json<ErrorResponse>)> {
    if req.target.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "target must not be empty".to_string(),
            }),
        ));
    }

    let result = scorer::score(&req.spoken, &req.target, req.confidence);
    tracing::debug!(
        "Scored {:?} against {:?}: {:.1} ({})",
        req.spoken,
        req.target,
        result.total,
        result.verdict.as_str()
    );

    Ok(Json(result))
}
