/// Interaction planning: templated scene prompts and per-scene elements.
///
/// Prompts are placeholders and do not depend on scene content.
use rand::rngs::StdRng;
use rand::Rng;

use crate::schema::character::Character;
use crate::schema::performance::{InteractionKind, InteractiveElement};

const HERO_FALLBACK: &str = "our hero";

const CHOICE_PROMPT: &str = "What should happen next?";
const CHOICE_OPTIONS: [&str; 3] = [
    "Continue the adventure",
    "Take a different path",
    "Meet a new friend",
];
const EMOTION_CHECK_PROMPT: &str = "How does this part make you feel?";

/// The five scene prompt templates, with the hero's name filled in.
pub fn scene_prompt_templates(cast: &[Character]) -> [String; 5] {
    let hero = cast.first().map_or(HERO_FALLBACK, |c| c.name.as_str());
    [
        format!("What do you think {} should do next?", hero),
        "How would you feel in this situation?".to_string(),
        "What would you say to help?".to_string(),
        "Can you make the sound this character would make?".to_string(),
        "Show me how you would move like this character!".to_string(),
    ]
}

/// Pick one scene-level prompt uniformly at random.
pub fn plan_scene_prompts(cast: &[Character], rng: &mut StdRng) -> Vec<String> {
    let templates = scene_prompt_templates(cast);
    let pick = rng.gen_range(0..templates.len());
    templates.into_iter().nth(pick).into_iter().collect()
}

/// A choice and an emotion check for every scene index.
pub fn plan_elements(scene_count: usize) -> Vec<InteractiveElement> {
    (0..scene_count)
        .flat_map(|index| {
            [
                InteractiveElement {
                    id: format!("choice-{}", index),
                    kind: InteractionKind::Choice,
                    prompt: CHOICE_PROMPT.to_string(),
                    options: Some(CHOICE_OPTIONS.iter().map(|o| o.to_string()).collect()),
                },
                InteractiveElement {
                    id: format!("emotion-{}", index),
                    kind: InteractionKind::EmotionCheck,
                    prompt: EMOTION_CHECK_PROMPT.to_string(),
                    options: None,
                },
            ]
        })
        .collect()
}
