use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::character::{Character, CharacterId};
use super::emotion::Emotion;

/// Whether a line is storyteller exposition or in-character speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Narration,
    Speech,
}

/// One attributed, timed utterance within a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub character_id: CharacterId,
    pub kind: LineKind,
    pub text: String,
    pub emotion: Emotion,
    /// Silence to hold after the line has been spoken.
    pub pause_after_ms: u64,
    pub interactive_prompt: Option<String>,
}

/// A time-sequenced unit of the performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    /// Equal to the scene's position in `Performance::scenes`.
    pub order: usize,
    pub setting: String,
    pub characters: Vec<CharacterId>,
    pub dialogue: Vec<DialogueLine>,
    pub interactive_prompts: Vec<String>,
}

/// The kind of request an interactive element makes of the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    Choice,
    VoiceResponse,
    Action,
    EmotionCheck,
}

/// A templated prompt surfaced to the user during playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub prompt: String,
    pub options: Option<Vec<String>>,
}

impl InteractiveElement {
    /// A free-form spoken reply request, as raised during playback.
    pub fn voice_response(id: String, prompt: &str) -> Self {
        Self {
            id,
            kind: InteractionKind::VoiceResponse,
            prompt: prompt.to_string(),
            options: None,
        }
    }
}

/// A story turned into a cast, scenes and interactive elements.
///
/// Built once by [`crate::core::factory::PerformanceFactory`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub id: Uuid,
    pub story_id: String,
    pub characters: Vec<Character>,
    pub scenes: Vec<Scene>,
    pub interactive_elements: Vec<InteractiveElement>,
    pub created_at: DateTime<Utc>,
}

impl Performance {
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.id == id)
    }

    /// Total number of dialogue lines across every scene.
    pub fn line_count(&self) -> usize {
        self.scenes.iter().map(|s| s.dialogue.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::character::VoiceArchetype;

    fn make_performance() -> Performance {
        let mia = Character {
            id: CharacterId("char-mia".to_string()),
            name: "Mia".to_string(),
            voice: VoiceArchetype::ChildHero,
            personality: vec!["brave".to_string()],
            visual_description: "A Mia".to_string(),
            dialogue_style: "warm and friendly".to_string(),
        };
        let line = DialogueLine {
            character_id: mia.id.clone(),
            kind: LineKind::Speech,
            text: "I found a key.".to_string(),
            emotion: Emotion::Neutral,
            pause_after_ms: 800,
            interactive_prompt: None,
        };
        Performance {
            id: Uuid::new_v4(),
            story_id: "story-1".to_string(),
            scenes: vec![Scene {
                id: "scene-0".to_string(),
                order: 0,
                setting: "home".to_string(),
                characters: vec![mia.id.clone()],
                dialogue: vec![line.clone(), line],
                interactive_prompts: Vec::new(),
            }],
            characters: vec![mia],
            interactive_elements: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn character_lookup() {
        let p = make_performance();
        assert!(p.character(&CharacterId("char-mia".to_string())).is_some());
        assert!(p.character(&CharacterId("narrator".to_string())).is_none());
    }

    #[test]
    fn line_count_spans_scenes() {
        assert_eq!(make_performance().line_count(), 2);
    }

    #[test]
    fn voice_response_element() {
        let e = InteractiveElement::voice_response("prompt-0".to_string(), "Hello?");
        assert_eq!(e.kind, InteractionKind::VoiceResponse);
        assert!(e.options.is_none());
    }
}
