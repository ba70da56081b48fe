//! Poster lookup against the TMDB metadata API
//!
//! Lookups are best effort: every failure is folded into a `PosterOutcome`
//! so a broken poster never fails the recommendation request that asked
//! for it. Failures are not retried.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::models::{MovieId, TmdbMovieDetails};

pub const NO_IMAGE_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";
pub const ERROR_IMAGE_URL: &str = "https://via.placeholder.com/300x450?text=Error";

/// Result of a single poster lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterOutcome {
    /// TMDB returned a non-empty poster path
    Resolved(String),
    /// TMDB answered but has no poster for the movie
    NoImage,
    /// Request failed, returned a non-2xx status or an unreadable body
    ExternalError,
}

impl PosterOutcome {
    /// Final image URL, joining resolved paths onto `image_base_url`
    pub fn into_url(self, image_base_url: &str) -> String {
        match self {
            PosterOutcome::Resolved(path) => format!("{}{}", image_base_url, path),
            PosterOutcome::NoImage => NO_IMAGE_URL.to_string(),
            PosterOutcome::ExternalError => ERROR_IMAGE_URL.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, PosterOutcome::Resolved(_))
    }
}

/// Trait for poster metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Look up the poster for a movie. Never fails.
    async fn resolve(&self, movie_id: MovieId) -> PosterOutcome;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[derive(Clone)]
pub struct TmdbPosterResolver {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbPosterResolver {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_details(&self, movie_id: MovieId) -> Result<TmdbMovieDetails, reqwest::Error> {
        let url = format!("{}/3/movie/{}", self.api_url, movie_id);

        self.http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?
            .error_for_status()?
            .json::<TmdbMovieDetails>()
            .await
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterResolver {
    async fn resolve(&self, movie_id: MovieId) -> PosterOutcome {
        match self.fetch_details(movie_id).await {
            Ok(TmdbMovieDetails {
                poster_path: Some(path),
            }) if !path.is_empty() => PosterOutcome::Resolved(path),
            Ok(_) => PosterOutcome::NoImage,
            Err(_) => PosterOutcome::ExternalError,
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
