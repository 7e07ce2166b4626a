pub mod catalog;
pub mod enrichment;
pub mod generation;

pub use catalog::{CatalogProvider, RawgClient};
pub use enrichment::enrich;
pub use generation::{GenerationService, ReplicateClient};
