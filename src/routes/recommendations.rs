use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::{AppError, ListFailure},
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendedBook, UserPreferences},
    routes::AppState,
};

const LIST_FIELD: &str = "recommendations";
const GENERIC_FAILURE: &str =
    "Something went wrong while generating recommendations. Please try again.";

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<RecommendedBook>,
    pub total_found: usize,
    pub user_preferences: UserPreferences,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Handler for the personalized recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ListFailure> {
    // Malformed bodies get the same JSON failure shape as validation errors
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection, "Rejected request body");
        ListFailure::from_error(
            &AppError::InvalidInput(format!("Invalid request body: {}", rejection.body_text())),
            LIST_FIELD,
        )
    })?;

    let preferences = UserPreferences::from_request(request)
        .map_err(|e| ListFailure::from_error(&e, LIST_FIELD))?;

    tracing::info!(
        request_id = %request_id,
        genres = preferences.genres.len(),
        favorite_books = preferences.favorite_books.len(),
        favorite_authors = preferences.favorite_authors.len(),
        "Processing recommendation request"
    );

    let outcome = state.engine.recommend(preferences).await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Recommendation request failed");
        match e {
            AppError::Generation(_) => ListFailure::from_error(&e, LIST_FIELD),
            _ => ListFailure::new(e.status(), GENERIC_FAILURE, LIST_FIELD),
        }
    })?;

    tracing::info!(
        request_id = %request_id,
        recommendations = outcome.recommendations.len(),
        total_found = outcome.total_found,
        "Recommendations completed"
    );

    Ok(Json(RecommendationResponse {
        success: true,
        recommendations: outcome.recommendations,
        total_found: outcome.total_found,
        user_preferences: outcome.user_preferences,
        generated_at: outcome.generated_at,
    }))
}
