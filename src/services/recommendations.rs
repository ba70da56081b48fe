use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::{posters::PosterProvider, recommender::Recommender},
};

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Recommends movies similar to `title` and attaches a poster to each.
///
/// Posters are looked up one at a time in ranking order. Poster failures
/// degrade to placeholder URLs; only an unknown title is an error.
pub async fn get_recommendations(
    recommender: &Recommender,
    posters: &dyn PosterProvider,
    image_base_url: &str,
    title: &str,
) -> AppResult<Vec<Recommendation>> {
    let ranked = recommender.recommend(title);
    if ranked.is_empty() {
        return Err(AppError::NotFound(MOVIE_NOT_FOUND.to_string()));
    }

    let mut recommendations = Vec::with_capacity(ranked.len());
    let mut placeholders = 0;

    for (name, movie_id) in ranked.names.into_iter().zip(ranked.ids) {
        let outcome = posters.resolve(movie_id).await;
        if outcome.is_placeholder() {
            placeholders += 1;
        }
        recommendations.push(Recommendation {
            title: name,
            poster_url: outcome.into_url(image_base_url),
        });
    }

    tracing::debug!(
        title = %title,
        results = recommendations.len(),
        placeholders,
        provider = posters.name(),
        "Posters attached"
    );

    Ok(recommendations)
}
