use serde::{Deserialize, Serialize};
use std::path::Path;

use super::emotion::Emotion;
use crate::core::config::ConfigError;

/// The symbol-picker category a story element was chosen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Characters,
    Actions,
    Places,
    Objects,
    Emotions,
    Weather,
    Food,
    Animals,
}

impl ElementCategory {
    /// Returns true if elements of this category become speaking roles.
    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Characters | Self::Animals)
    }
}

/// A symbolic element the child chose before the story was generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryElement {
    pub id: String,
    pub category: ElementCategory,
    pub label: String,
    #[serde(default)]
    pub semantic_meaning: Option<String>,
}

impl StoryElement {
    pub fn new(id: &str, category: ElementCategory, label: &str) -> Self {
        Self {
            id: id.to_string(),
            category,
            label: label.to_string(),
            semantic_meaning: None,
        }
    }

    /// Load an ordered list of elements from a RON file.
    pub fn load_list_from_ron(path: &Path) -> Result<Vec<StoryElement>, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

/// An already-generated story. Only `id` and `content` drive the
/// performance; the rest travels along for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_mood")]
    pub mood: Emotion,
}

fn default_mood() -> Emotion {
    Emotion::Neutral
}

impl Story {
    pub fn new(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            mood: Emotion::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_categories() {
        assert!(ElementCategory::Characters.is_cast());
        assert!(ElementCategory::Animals.is_cast());
        assert!(!ElementCategory::Places.is_cast());
        assert!(!ElementCategory::Food.is_cast());
    }

    #[test]
    fn element_list_from_ron() {
        let input = r#"[
            (id: "girl", category: characters, label: "Girl"),
            (id: "dog", category: animals, label: "Dog", semantic_meaning: Some("loyal puppy")),
        ]"#;
        let elements: Vec<StoryElement> = ron::from_str(input).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].category, ElementCategory::Characters);
        assert_eq!(elements[0].semantic_meaning, None);
        assert_eq!(elements[1].semantic_meaning.as_deref(), Some("loyal puppy"));
    }

    #[test]
    fn story_mood_defaults_to_neutral() {
        let story: Story = ron::from_str(r#"(id: "s1", title: "T", content: "Hi.")"#).unwrap();
        assert_eq!(story.mood, Emotion::Neutral);
    }
}
