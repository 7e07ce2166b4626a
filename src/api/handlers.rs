use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{EnrichedResult, PreferenceProfile},
    services::enrichment,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommendation endpoint
///
/// Generates candidates from the profile, then enriches them with catalog
/// metadata. Generation failures abort the request; enrichment failures
/// degrade individual entries only.
pub async fn recommend(
    State(state): State<AppState>,
    Json(profile): Json<PreferenceProfile>,
) -> AppResult<Json<Vec<EnrichedResult>>> {
    if profile.mood.trim().is_empty() {
        return Err(AppError::InvalidInput("mood is required".to_string()));
    }
    if profile.genre.trim().is_empty() {
        return Err(AppError::InvalidInput("genre is required".to_string()));
    }

    tracing::info!(
        mood = %profile.mood,
        genre = %profile.genre,
        has_inspiration = !profile.inspiration.trim().is_empty(),
        "Recommendation request received"
    );

    let candidates = state
        .generation
        .generate(&profile, state.recommendation_count)
        .await?;

    let results = enrichment::enrich(
        Arc::clone(&state.catalog),
        &state.store_url_base,
        candidates,
    )
    .await;

    Ok(Json(results))
}
