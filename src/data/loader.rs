use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::{ModelContext, SimilarityMatrix};
use crate::error::DataLoadError;
use crate::models::Movie;

/// Loads and validates the catalog table and similarity matrix
pub fn load_model_context(
    movie_list_path: impl AsRef<Path>,
    similarity_path: impl AsRef<Path>,
) -> Result<ModelContext, DataLoadError> {
    let movies: Vec<Movie> = read_json(movie_list_path.as_ref())?;
    let rows: Vec<Vec<f64>> = read_json(similarity_path.as_ref())?;

    tracing::debug!(
        movies = movies.len(),
        rows = rows.len(),
        "Startup artifacts parsed"
    );

    let similarity = SimilarityMatrix::from_rows(rows)?;
    ModelContext::new(movies, similarity)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataLoadError::Parse {
        path: display,
        source,
    })
}
