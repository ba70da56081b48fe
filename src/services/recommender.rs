use std::cmp::Ordering;
use std::sync::Arc;

use serde::Deserialize;

use crate::data::ModelContext;
use crate::models::MovieId;
use crate::services::catalog::Catalog;

/// Number of recommendations returned per query
pub const TOP_K: usize = 5;

/// How the query movie is kept out of its own recommendations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfExclusion {
    /// Discard whatever ranks first. The query movie normally holds the top
    /// self-similarity score, but when another row ties or beats it, that row
    /// is discarded instead and the query movie can appear in the results.
    #[default]
    DropTopRank,
    /// Discard the query row itself, wherever it ranks.
    ByIdentity,
}

/// Top-k titles for a query, in descending similarity order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    pub names: Vec<String>,
    pub ids: Vec<MovieId>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Ranks catalog items by their precomputed similarity to a query title
#[derive(Debug, Clone)]
pub struct Recommender {
    context: Arc<ModelContext>,
    catalog: Catalog,
    self_exclusion: SelfExclusion,
}

impl Recommender {
    pub fn new(context: Arc<ModelContext>, self_exclusion: SelfExclusion) -> Self {
        let catalog = Catalog::new(context.clone());
        Self {
            context,
            catalog,
            self_exclusion,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the `TOP_K` most similar titles to `title`.
    ///
    /// An unknown title yields an empty result rather than an error.
    pub fn recommend(&self, title: &str) -> Recommendations {
        let Some(row_index) = self.catalog.resolve(title) else {
            return Recommendations::default();
        };

        let ranked = self.rank(row_index);
        let selected: Vec<usize> = match self.self_exclusion {
            SelfExclusion::DropTopRank => ranked.into_iter().skip(1).take(TOP_K).collect(),
            SelfExclusion::ByIdentity => ranked
                .into_iter()
                .filter(|&row| row != row_index)
                .take(TOP_K)
                .collect(),
        };

        let mut recommendations = Recommendations {
            names: Vec::with_capacity(selected.len()),
            ids: Vec::with_capacity(selected.len()),
        };
        // ModelContext guarantees one catalog entry per matrix row
        for movie in selected.into_iter().filter_map(|row| self.catalog.get(row)) {
            recommendations.names.push(movie.title.clone());
            recommendations.ids.push(movie.movie_id);
        }

        recommendations
    }

    /// Every row ordered by descending score against `row_index`, the query
    /// row included. The sort is stable, so equal scores (`-0.0` and `0.0`
    /// included) keep row order.
    fn rank(&self, row_index: usize) -> Vec<usize> {
        // Catalog only resolves titles to rows that exist in the matrix
        let scores = self
            .context
            .similarity()
            .row(row_index)
            .unwrap_or_default();

        let mut candidates: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
        // Scores are finite, so partial_cmp never falls back
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        candidates.into_iter().map(|(row, _)| row).collect()
    }
}
