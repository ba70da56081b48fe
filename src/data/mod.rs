//! Startup data: the catalog table and the precomputed similarity matrix.
//!
//! Both are loaded once, validated together and then shared read-only for
//! the lifetime of the process.

pub mod loader;

use crate::error::DataLoadError;
use crate::models::Movie;

pub use loader::load_model_context;

/// Dense square matrix of pairwise similarity scores, indexed by catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from row vectors, rejecting ragged or non-finite input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataLoadError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(DataLoadError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(DataLoadError::NonFiniteScore { row, col });
            }
            scores.extend(values);
        }

        Ok(Self { size, scores })
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Scores of `index` against every row, in row order
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}

/// Immutable startup state shared by the catalog and the recommender
#[derive(Debug)]
pub struct ModelContext {
    movies: Vec<Movie>,
    similarity: SimilarityMatrix,
}

impl ModelContext {
    /// Pairs a catalog with its similarity matrix.
    ///
    /// Fails unless the matrix has exactly one row per catalog entry.
    pub fn new(movies: Vec<Movie>, similarity: SimilarityMatrix) -> Result<Self, DataLoadError> {
        if movies.is_empty() {
            return Err(DataLoadError::EmptyCatalog);
        }
        if similarity.len() != movies.len() {
            return Err(DataLoadError::RowCountMismatch {
                rows: similarity.len(),
                catalog: movies.len(),
            });
        }

        Ok(Self { movies, similarity })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
