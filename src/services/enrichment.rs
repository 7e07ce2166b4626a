/// Candidate enrichment fan-out
///
/// Dispatches one catalog lookup per candidate concurrently, waits for all of
/// them to settle, and merges results back in candidate order. A failed
/// lookup degrades its own entry to placeholders and never aborts siblings.
use crate::{
    models::{CandidateRecommendation, EnrichedResult, GameDetails},
    services::catalog::CatalogProvider,
};
use std::sync::Arc;

/// Placeholder platform string used when no catalog data is available
const PLATFORMS_UNKNOWN: &str = "N/A";

/// Enriches candidates with catalog metadata, preserving input order.
///
/// This function never fails: every candidate produces exactly one result,
/// enriched when its lookup succeeded and padded with placeholders otherwise.
pub async fn enrich(
    provider: Arc<dyn CatalogProvider>,
    store_url_base: &str,
    candidates: Vec<CandidateRecommendation>,
) -> Vec<EnrichedResult> {
    let mut tasks = Vec::with_capacity(candidates.len());

    // Fire all lookups before awaiting any of them.
    for (index, candidate) in candidates.into_iter().enumerate() {
        let provider = Arc::clone(&provider);
        let title = candidate.title.clone();
        let task = tokio::spawn(async move { provider.search_game(&title).await });
        tasks.push((index, candidate, task));
    }

    // Awaiting handles in spawn order correlates each result back to its
    // originating index regardless of completion order.
    let mut results = Vec::with_capacity(tasks.len());
    for (index, candidate, task) in tasks {
        let details = match task.await {
            Ok(Ok(details)) => {
                if details.is_none() {
                    tracing::warn!(index, title = %candidate.title, "No catalog match");
                }
                details
            }
            Ok(Err(e)) => {
                tracing::warn!(index, title = %candidate.title, error = %e, "Catalog lookup failed");
                None
            }
            Err(e) => {
                tracing::warn!(index, title = %candidate.title, error = %e, "Lookup task join error");
                None
            }
        };

        results.push(merge(candidate, details, store_url_base));
    }

    tracing::info!(count = results.len(), "Enrichment batch settled");

    results
}

/// Merges one candidate with its (optional) catalog details.
fn merge(
    candidate: CandidateRecommendation,
    details: Option<GameDetails>,
    store_url_base: &str,
) -> EnrichedResult {
    let (cover_image_url, platforms, store_url) = match details {
        Some(details) => {
            let platforms = if details.platforms.is_empty() {
                PLATFORMS_UNKNOWN.to_string()
            } else {
                details.platforms.join(", ")
            };
            let store_url = format!("{}/games/{}", store_url_base, details.slug);
            (details.cover_image, platforms, store_url)
        }
        None => (String::new(), PLATFORMS_UNKNOWN.to_string(), String::new()),
    };

    EnrichedResult {
        title: candidate.title,
        summary: candidate.summary,
        tips: candidate.tips,
        cover_image_url,
        platforms,
        store_url,
    }
}
