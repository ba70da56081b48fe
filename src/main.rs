use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_rec_api::{
    api::{create_router, AppState},
    config::Config,
    data::load_model_context,
    services::{Recommender, TmdbPosterResolver},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        movie_list = %config.movie_list_path,
        similarity = %config.similarity_path,
        self_exclusion = ?config.self_exclusion,
        "Configuration loaded"
    );

    // Serving with a catalog that disagrees with the matrix is never allowed
    let context = load_model_context(&config.movie_list_path, &config.similarity_path)
        .context("Failed to load startup artifacts")?;
    tracing::info!(movies = context.movies().len(), "Catalog and similarity matrix loaded");

    let recommender = Recommender::new(Arc::new(context), config.self_exclusion);
    let posters = TmdbPosterResolver::new(
        config.api_key.clone(),
        config.tmdb_api_url.clone(),
        config.poster_timeout_secs.map(Duration::from_secs),
    )?;

    let state = AppState::new(recommender, Arc::new(posters), config.image_base_url.as_str());
    let app = create_router(state, config.allowed_origins());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
