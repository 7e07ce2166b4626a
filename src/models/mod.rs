mod catalog;
mod recommendation;

pub use catalog::{CatalogGame, CatalogPlatform, CatalogPlatformEntry, CatalogSearchResponse, GameDetails};
pub use recommendation::{CandidateRecommendation, EnrichedResult, PreferenceProfile};
