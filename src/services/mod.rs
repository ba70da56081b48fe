pub mod catalog;
pub mod posters;
pub mod recommendations;
pub mod recommender;

pub use catalog::Catalog;
pub use posters::{PosterOutcome, PosterProvider, TmdbPosterResolver};
pub use recommender::{Recommendations, Recommender, SelfExclusion};
