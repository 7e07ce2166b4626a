use serde::Deserialize;

/// Raw search response from the catalog API
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSearchResponse {
    #[serde(default)]
    pub results: Vec<CatalogGame>,
}

/// A single game entry as returned by the catalog API
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogGame {
    pub slug: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub platforms: Option<Vec<CatalogPlatformEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlatformEntry {
    pub platform: CatalogPlatform,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlatform {
    pub name: String,
}

/// Catalog metadata for one game, flattened for the enricher
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetails {
    pub cover_image: String,
    pub platforms: Vec<String>,
    pub slug: String,
}

impl From<CatalogGame> for GameDetails {
    fn from(game: CatalogGame) -> Self {
        let platforms = game
            .platforms
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.platform.name)
            .collect();

        Self {
            cover_image: game.background_image.unwrap_or_default(),
            platforms,
            slug: game.slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_game_deserialization() {
        let json = r#"{
            "slug": "stardew-valley",
            "name": "Stardew Valley",
            "background_image": "https://media.rawg.io/media/games/713/stardew.jpg",
            "platforms": [
                {"platform": {"id": 4, "name": "PC", "slug": "pc"}},
                {"platform": {"id": 7, "name": "Nintendo Switch", "slug": "switch"}}
            ]
        }"#;

        let game: CatalogGame = serde_json::from_str(json).unwrap();
        let details = GameDetails::from(game);

        assert_eq!(details.slug, "stardew-valley");
        assert_eq!(
            details.cover_image,
            "https://media.rawg.io/media/games/713/stardew.jpg"
        );
        assert_eq!(details.platforms, vec!["PC", "Nintendo Switch"]);
    }

    #[test]
    fn test_catalog_game_missing_optional_fields() {
        let game: CatalogGame = serde_json::from_str(r#"{"slug": "obscure-title"}"#).unwrap();
        let details = GameDetails::from(game);

        assert_eq!(details.cover_image, "");
        assert!(details.platforms.is_empty());
        assert_eq!(details.slug, "obscure-title");
    }

    #[test]
    fn test_empty_results_deserializes() {
        let response: CatalogSearchResponse =
            serde_json::from_str(r#"{"count": 0, "results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
