use serde::Deserialize;

use crate::services::recommender::SelfExclusion;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key used for poster lookups
    pub api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix joined with a TMDB poster path to form the image URL
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Path to the catalog table (JSON array of `{movie_id, title}`)
    #[serde(default = "default_movie_list_path")]
    pub movie_list_path: String,

    /// Path to the similarity matrix (JSON array of rows)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma separated list of allowed CORS origins; any origin when unset
    #[serde(default)]
    pub cors_origins: Option<String>,

    /// Per-request timeout for poster lookups, in seconds
    #[serde(default)]
    pub poster_timeout_secs: Option<u64>,

    /// How the query movie is removed from its own ranking
    #[serde(default)]
    pub self_exclusion: SelfExclusion,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500/".to_string()
}

fn default_movie_list_path() -> String {
    "artifacts/movie_list.json".to_string()
}

fn default_similarity_path() -> String {
    "artifacts/similarity.json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Allowed CORS origins, or `None` when any origin is accepted
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        self.cors_origins.as_ref().map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}
