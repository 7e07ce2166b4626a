use std::sync::Arc;

use crate::services::{CatalogProvider, GenerationService};

/// Shared application state
///
/// Holds the two outbound service handles and the response-shaping settings.
/// Nothing here is mutated after startup; requests share it read-only.
#[derive(Clone)]
pub struct AppState {
    pub generation: Arc<dyn GenerationService>,
    pub catalog: Arc<dyn CatalogProvider>,
    /// Base URL for store page links built from catalog slugs
    pub store_url_base: String,
    /// How many candidates each request asks the model for
    pub recommendation_count: usize,
}

impl AppState {
    pub fn new(
        generation: Arc<dyn GenerationService>,
        catalog: Arc<dyn CatalogProvider>,
        store_url_base: String,
        recommendation_count: usize,
    ) -> Self {
        Self {
            generation,
            catalog,
            store_url_base,
            recommendation_count,
        }
    }
}
