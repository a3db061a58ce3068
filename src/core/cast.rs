/// Cast building: speaking characters derived from the chosen story elements.
use crate::schema::character::{Character, CharacterId, VoiceArchetype};
use crate::schema::story::{ElementCategory, StoryElement};

/// Archetypes handed out round-robin, by position among the cast elements.
const ARCHETYPE_ROTATION: [VoiceArchetype; 4] = [
    VoiceArchetype::ChildHero,
    VoiceArchetype::FriendlyAnimal,
    VoiceArchetype::WiseMentor,
    VoiceArchetype::MagicalCreature,
];

const PERSONALITIES: &[(ElementCategory, [&str; 4])] = &[
    (
        ElementCategory::Characters,
        ["brave", "kind", "curious", "adventurous"],
    ),
    (
        ElementCategory::Animals,
        ["loyal", "playful", "wise", "protective"],
    ),
];

const DEFAULT_PERSONALITY: [&str; 4] = ["friendly", "helpful", "positive", "encouraging"];

const DIALOGUE_STYLES: &[(&str, &str)] = &[
    ("Girl", "cheerful and confident"),
    ("Boy", "enthusiastic and brave"),
    ("Princess", "elegant and kind"),
    ("Dog", "loyal and excited"),
    ("Cat", "clever and independent"),
    ("Lion", "noble and strong"),
];

const DEFAULT_DIALOGUE_STYLE: &str = "warm and friendly";

pub const NARRATOR_ID: &str = "narrator";

/// Build the cast for a story.
///
/// Every element in the "characters" or "animals" category becomes one
/// character, in input order. When none qualify a single Narrator is
/// returned, so the cast is never empty.
pub fn build_cast(elements: &[StoryElement]) -> Vec<Character> {
    let mut cast: Vec<Character> = elements
        .iter()
        .filter(|e| e.category.is_cast())
        .enumerate()
        .map(|(position, element)| Character {
            id: CharacterId(format!("char-{}", element.id)),
            name: element.label.clone(),
            voice: ARCHETYPE_ROTATION[position % ARCHETYPE_ROTATION.len()],
            personality: personality_for(element.category),
            visual_description: format!(
                "A {}",
                element.semantic_meaning.as_deref().unwrap_or(&element.label)
            ),
            dialogue_style: dialogue_style_for(&element.label).to_string(),
        })
        .collect();

    if cast.is_empty() {
        cast.push(narrator());
    }
    cast
}

/// The storyteller used when the child picked no characters or animals.
pub fn narrator() -> Character {
    Character {
        id: CharacterId(NARRATOR_ID.to_string()),
        name: "Narrator".to_string(),
        voice: VoiceArchetype::NarratorClassic,
        personality: ["wise", "engaging", "storytelling"]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        visual_description: "The story narrator".to_string(),
        dialogue_style: "descriptive and engaging".to_string(),
    }
}

fn personality_for(category: ElementCategory) -> Vec<String> {
    let traits = PERSONALITIES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, traits)| traits)
        .unwrap_or(&DEFAULT_PERSONALITY);
    traits.iter().map(|t| t.to_string()).collect()
}

fn dialogue_style_for(label: &str) -> &'static str {
    DIALOGUE_STYLES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_DIALOGUE_STYLE)
}
