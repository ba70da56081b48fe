use std::sync::Arc;

use crate::services::{posters::PosterProvider, recommender::Recommender};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub posters: Arc<dyn PosterProvider>,
    pub image_base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        recommender: Recommender,
        posters: Arc<dyn PosterProvider>,
        image_base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            recommender: Arc::new(recommender),
            posters,
            image_base_url: image_base_url.into(),
        }
    }
}
