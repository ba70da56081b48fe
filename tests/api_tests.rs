use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

use movie_rec_api::api::{create_router, AppState};
use movie_rec_api::data::{ModelContext, SimilarityMatrix};
use movie_rec_api::models::{Movie, MovieId, MoviesResponse, RecommendResponse};
use movie_rec_api::services::posters::{ERROR_IMAGE_URL, NO_IMAGE_URL};
use movie_rec_api::services::{PosterOutcome, PosterProvider, Recommender, SelfExclusion};

/// Poster provider with canned answers: even ids resolve, 5 has no image, 3 fails
struct FixedPosters;

#[async_trait::async_trait]
impl PosterProvider for FixedPosters {
    async fn resolve(&self, movie_id: MovieId) -> PosterOutcome {
        match movie_id {
            3 => PosterOutcome::ExternalError,
            5 => PosterOutcome::NoImage,
            id => PosterOutcome::Resolved(format!("/{}.jpg", id)),
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn create_test_server() -> TestServer {
    let movies = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .enumerate()
        .map(|(i, t)| Movie::new(i as i64 + 1, *t))
        .collect();
    let rows = vec![
        vec![1.0, 0.9, 0.8, 0.7, 0.6, 0.5],
        vec![0.9, 1.0, 0.4, 0.3, 0.2, 0.1],
        vec![0.8, 0.4, 1.0, 0.3, 0.2, 0.1],
        vec![0.7, 0.3, 0.3, 1.0, 0.2, 0.1],
        vec![0.6, 0.2, 0.2, 0.2, 1.0, 0.1],
        vec![0.5, 0.1, 0.1, 0.1, 0.1, 1.0],
    ];
    let context = ModelContext::new(movies, SimilarityMatrix::from_rows(rows).unwrap()).unwrap();
    let recommender = Recommender::new(Arc::new(context), SelfExclusion::DropTopRank);

    let state = AppState::new(recommender, Arc::new(FixedPosters), "https://img.test/t/p/w500/");
    let app = create_router(state, None);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_movies_in_catalog_order() {
    let server = create_test_server();
    let response = server.get("/movies").await;
    response.assert_status_ok();

    let body: MoviesResponse = response.json();
    assert_eq!(body.movies, vec!["A", "B", "C", "D", "E", "F"]);
}

#[tokio::test]
async fn test_recommend_known_movie() {
    let server = create_test_server();
    let response = server
        .post("/recommend")
        .json(&json!({ "movie": "A" }))
        .await;
    response.assert_status_ok();

    let body: RecommendResponse = response.json();
    assert_eq!(body.recommended_movies, vec!["B", "C", "D", "E", "F"]);
    assert_eq!(
        body.recommended_posters,
        vec![
            "https://img.test/t/p/w500//2.jpg".to_string(),
            ERROR_IMAGE_URL.to_string(),
            "https://img.test/t/p/w500//4.jpg".to_string(),
            NO_IMAGE_URL.to_string(),
            "https://img.test/t/p/w500//6.jpg".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_recommend_is_repeatable() {
    let server = create_test_server();
    let first: RecommendResponse = server
        .post("/recommend")
        .json(&json!({ "movie": "D" }))
        .await
        .json();
    let second: RecommendResponse = server
        .post("/recommend")
        .json(&json!({ "movie": "D" }))
        .await
        .json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_recommend_unknown_movie() {
    let server = create_test_server();
    let response = server
        .post("/recommend")
        .json(&json!({ "movie": "Z" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_recommend_without_movie_field() {
    let server = create_test_server();
    let response = server.post("/recommend").json(&json!({})).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommend_non_string_movie() {
    let server = create_test_server();
    let response = server
        .post("/recommend")
        .json(&json!({ "movie": 123 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "7f8c2b8e-6a0e-4c1e-9a43-2f1a3b4c5d6e";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;

    assert_eq!(response.header("x-request-id"), id);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server();
    let response = server.get("/movies").await;
    let header = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}
