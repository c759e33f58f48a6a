//! Records supplied by the game-data collaborator
//!
//! The filter subsystem never fetches these itself; the host page hands a
//! [`Catalog`] to [`crate::mount_filters`].

use serde::{Deserialize, Serialize};

/// A selectable value for a category filter (genre, platform, store, tag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Reference from a game to one of its genres, platforms, stores or tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl NamedRef {
    /// Identifier as it appears in [`FilterOption::value`]
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// ISO release date (yyyy-mm-dd)
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub platforms: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub stores: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub tags: Option<Vec<NamedRef>>,
}

impl Game {
    pub fn release_year(&self) -> Option<&str> {
        self.released.as_deref().and_then(|d| d.get(..4))
    }
}

/// Everything the host provides: candidate games and the option lists for
/// each category filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub genres: Vec<FilterOption>,
    #[serde(default)]
    pub platforms: Vec<FilterOption>,
    #[serde(default)]
    pub stores: Vec<FilterOption>,
    #[serde(default)]
    pub tags: Vec<FilterOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_missing_optional_fields() {
        let game: Game = serde_json::from_str(r#"{"id": 3498, "name": "Grand Theft Auto V"}"#).unwrap();
        assert_eq!(game.name, "Grand Theft Auto V");
        assert!(game.released.is_none());
        assert!(game.metacritic.is_none());
        assert!(game.tags.is_none());
    }

    #[test]
    fn test_game_camel_case_fields() {
        let json = r#"{
            "id": 1,
            "name": "Portal 2",
            "released": "2011-04-18",
            "metacritic": 95,
            "backgroundImage": "https://example.com/portal2.jpg",
            "genres": [{"id": 2, "name": "Shooter", "slug": "shooter"}]
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.background_image.as_deref(), Some("https://example.com/portal2.jpg"));
        assert_eq!(game.release_year(), Some("2011"));
        assert_eq!(game.genres.unwrap()[0].key(), "2");
    }
}
