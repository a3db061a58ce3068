/// Performance assembly: Story + elements → Performance.
///
/// Wires together cast building, scene segmentation, dialogue composition
/// and interaction planning.
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use uuid::Uuid;

use crate::core::cast::build_cast;
use crate::core::dialogue::compose_dialogue;
use crate::core::interaction::{plan_elements, plan_scene_prompts};
use crate::core::segment::{detect_setting, group_scenes, split_sentences};
use crate::schema::performance::{Performance, Scene};
use crate::schema::story::{Story, StoryElement};

/// Builds performances. Everything except the random scene prompt is a pure
/// function of the input; a fixed seed makes the prompt choice repeatable too.
#[derive(Debug, Clone)]
pub struct PerformanceFactory {
    seed: u64,
    generation_count: u64,
}

impl Default for PerformanceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceFactory {
    /// A factory seeded from entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            generation_count: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build a complete performance for a story.
    pub fn create(&mut self, story: &Story, elements: &[StoryElement]) -> Performance {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;

        let characters = build_cast(elements);
        let cast_ids: Vec<_> = characters.iter().map(|c| c.id.clone()).collect();

        let sentences = split_sentences(&story.content);
        let scenes: Vec<Scene> = group_scenes(&sentences)
            .into_iter()
            .enumerate()
            .map(|(order, window)| Scene {
                id: format!("scene-{}", order),
                order,
                setting: detect_setting(&window).to_string(),
                characters: cast_ids.clone(),
                dialogue: compose_dialogue(&window, &characters),
                interactive_prompts: plan_scene_prompts(&characters, &mut rng),
            })
            .collect();
        let interactive_elements = plan_elements(scenes.len());

        debug!(
            story_id = %story.id,
            characters = characters.len(),
            sentences = sentences.len(),
            scenes = scenes.len(),
            elements = interactive_elements.len(),
            "Created performance"
        );

        Performance {
            id: Uuid::new_v4(),
            story_id: story.id.clone(),
            characters,
            scenes,
            interactive_elements,
            created_at: Utc::now(),
        }
    }
}

/// Build a performance with an entropy-seeded factory.
pub fn create_performance(story: &Story, elements: &[StoryElement]) -> Performance {
    PerformanceFactory::new().create(story, elements)
}
