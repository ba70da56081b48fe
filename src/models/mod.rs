use serde::{Deserialize, Serialize};

/// TMDB movie identifier
pub type MovieId = i64;

/// Catalog entry: one row of the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(movie_id: MovieId, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
        }
    }
}

/// A single recommended movie with its resolved poster
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster_url: String,
}

// ============================================================================
// HTTP API Types
// ============================================================================

/// Response body for GET /movies
#[derive(Debug, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub movies: Vec<String>,
}

/// Request body for POST /recommend
///
/// `movie` is kept as raw JSON so a missing, null or non-string value reaches
/// the handler and is answered like an unknown title.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub movie: Option<serde_json::Value>,
}

impl RecommendRequest {
    /// Requested title, or an empty string when `movie` is not a JSON string
    pub fn title(&self) -> &str {
        self.movie
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}

/// Response body for POST /recommend
///
/// `recommended_movies[i]` and `recommended_posters[i]` describe the same movie.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub recommended_movies: Vec<String>,
    pub recommended_posters: Vec<String>,
}

impl From<Vec<Recommendation>> for RecommendResponse {
    fn from(recommendations: Vec<Recommendation>) -> Self {
        let (recommended_movies, recommended_posters) = recommendations
            .into_iter()
            .map(|r| (r.title, r.poster_url))
            .unzip();

        Self {
            recommended_movies,
            recommended_posters,
        }
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Subset of the TMDB response from GET /3/movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}
