use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MoviesResponse, RecommendRequest, RecommendResponse},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List every catalog title in dataset order
pub async fn list_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    Json(MoviesResponse {
        movies: state.recommender.catalog().list_titles(),
    })
}

/// Recommend five movies similar to the requested one
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    let title = request.title();

    tracing::info!(
        request_id = %request_id,
        title = %title,
        "Processing recommendation request"
    );

    let recommendations = recommendations::get_recommendations(
        &state.recommender,
        state.posters.as_ref(),
        &state.image_base_url,
        title,
    )
    .await
    .inspect_err(|_| {
        tracing::info!(request_id = %request_id, title = %title, "Movie not found");
    })?;

    tracing::info!(
        request_id = %request_id,
        results = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(RecommendResponse::from(recommendations)))
}
