//! Story Performance: turns a generated children's story into a theatrical
//! playback.
//!
//! A flat story text plus the story elements the child picked become a cast
//! of speaking characters, scenes of attributed dialogue and interactive
//! prompts. A [`PerformanceDirector`] then plays it scene by scene through an
//! external speech service, with cooperative cancellation.

pub mod core;
pub mod schema;

pub use crate::core::config::{ConfigError, PerformanceConfig};
pub use crate::core::director::{
    DirectorError, PerformanceDirector, PerformanceObserver, PerformanceOutcome,
};
pub use crate::core::factory::{create_performance, PerformanceFactory};
pub use crate::core::speech::{Language, SpeechError, SpeechRequest, SpeechService};
pub use crate::schema::character::{available_voice_archetypes, Character, VoiceArchetype};
pub use crate::schema::performance::{DialogueLine, InteractiveElement, Performance, Scene};
pub use crate::schema::story::{ElementCategory, Story, StoryElement};
