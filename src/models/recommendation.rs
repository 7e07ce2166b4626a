use serde::{Deserialize, Serialize};

/// User preference profile submitted with each request.
///
/// Lives for a single request; nothing is persisted between calls.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceProfile {
    pub mood: String,
    pub genre: String,
    /// Optional title the user likes, used to steer the model
    #[serde(default)]
    pub inspiration: String,
}

/// An unverified game suggestion produced by the generative text service,
/// prior to catalog enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecommendation {
    pub title: String,
    pub summary: String,
    pub tips: Vec<String>,
}

/// A candidate merged with catalog metadata, returned to the client.
///
/// Enrichment fields degrade to placeholders when the catalog lookup for
/// this candidate fails; the candidate fields always pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedResult {
    pub title: String,
    pub summary: String,
    pub tips: Vec<String>,
    /// Cover art URL, empty when no catalog match was found
    pub cover_image_url: String,
    /// Comma-joined platform names, or "N/A"
    pub platforms: String,
    /// Store page URL built from the catalog slug, empty on lookup failure
    pub store_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_requires_all_fields() {
        let missing_tips = r#"{"title": "Hades", "summary": "Roguelike."}"#;
        assert!(serde_json::from_str::<CandidateRecommendation>(missing_tips).is_err());
    }

    #[test]
    fn test_candidate_tips_must_be_strings() {
        let numeric_tips = r#"{"title": "Hades", "summary": "Roguelike.", "tips": [1, 2]}"#;
        assert!(serde_json::from_str::<CandidateRecommendation>(numeric_tips).is_err());
    }

    #[test]
    fn test_enriched_result_serializes_camel_case() {
        let result = EnrichedResult {
            title: "Hades".to_string(),
            summary: "Roguelike.".to_string(),
            tips: vec!["Use the mirror".to_string()],
            cover_image_url: "https://img.example/hades.jpg".to_string(),
            platforms: "PC, PlayStation 5".to_string(),
            store_url: "https://rawg.io/games/hades".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["coverImageUrl"], "https://img.example/hades.jpg");
        assert_eq!(json["storeUrl"], "https://rawg.io/games/hades");
        assert_eq!(json["platforms"], "PC, PlayStation 5");
    }

    #[test]
    fn test_profile_inspiration_defaults_to_empty() {
        let profile: PreferenceProfile =
            serde_json::from_str(r#"{"mood": "Relaxed", "genre": "Simulation"}"#).unwrap();
        assert_eq!(profile.inspiration, "");
    }
}
