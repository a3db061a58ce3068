use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for character IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The voice category a character speaks with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceArchetype {
    ChildHero,
    WiseMentor,
    FriendlyAnimal,
    MagicalCreature,
    VillainReformed,
    NarratorClassic,
}

/// Pitch, speed and delivery style handed to the speech collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceProfile {
    pub pitch: f32,
    pub speed: f32,
    pub style: &'static str,
}

/// One entry of the archetype catalog offered to voice pickers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchetypeInfo {
    pub archetype: VoiceArchetype,
    pub name: &'static str,
    pub description: &'static str,
    pub profile: VoiceProfile,
}

const CATALOG: &[ArchetypeInfo] = &[
    ArchetypeInfo {
        archetype: VoiceArchetype::ChildHero,
        name: "Brave Hero",
        description: "Energetic and courageous voice",
        profile: VoiceProfile {
            pitch: 1.2,
            speed: 1.1,
            style: "energetic and brave",
        },
    },
    ArchetypeInfo {
        archetype: VoiceArchetype::WiseMentor,
        name: "Wise Guide",
        description: "Calm and knowing voice",
        profile: VoiceProfile {
            pitch: 0.8,
            speed: 0.9,
            style: "calm and knowing",
        },
    },
    ArchetypeInfo {
        archetype: VoiceArchetype::FriendlyAnimal,
        name: "Animal Friend",
        description: "Playful and warm voice",
        profile: VoiceProfile {
            pitch: 1.3,
            speed: 1.2,
            style: "playful and warm",
        },
    },
    ArchetypeInfo {
        archetype: VoiceArchetype::MagicalCreature,
        name: "Magic Being",
        description: "Mystical and enchanting voice",
        profile: VoiceProfile {
            pitch: 1.4,
            speed: 1.0,
            style: "mystical and enchanting",
        },
    },
    ArchetypeInfo {
        archetype: VoiceArchetype::VillainReformed,
        name: "Reformed Villain",
        description: "Dramatic but kind voice",
        profile: VoiceProfile {
            pitch: 0.9,
            speed: 1.0,
            style: "dramatic but kind",
        },
    },
    ArchetypeInfo {
        archetype: VoiceArchetype::NarratorClassic,
        name: "Story Narrator",
        description: "Classic storytelling voice",
        profile: VoiceProfile {
            pitch: 1.0,
            speed: 1.0,
            style: "storytelling and engaging",
        },
    },
];

impl VoiceArchetype {
    /// Kebab-case tag: "child-hero", "narrator-classic", ...
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ChildHero => "child-hero",
            Self::WiseMentor => "wise-mentor",
            Self::FriendlyAnimal => "friendly-animal",
            Self::MagicalCreature => "magical-creature",
            Self::VillainReformed => "villain-reformed",
            Self::NarratorClassic => "narrator-classic",
        }
    }

    /// Catalog entry for this archetype.
    pub fn info(&self) -> &'static ArchetypeInfo {
        // Every variant has exactly one catalog row, in declaration order.
        &CATALOG[*self as usize]
    }

    pub fn profile(&self) -> VoiceProfile {
        self.info().profile
    }
}

/// The static catalog of every voice archetype.
pub fn available_voice_archetypes() -> &'static [ArchetypeInfo] {
    CATALOG
}

/// A speaking role in a performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub voice: VoiceArchetype,
    pub personality: Vec<String>,
    pub visual_description: String,
    pub dialogue_style: String,
}

impl Character {
    /// Returns true if this character has the given personality trait.
    pub fn has_trait(&self, tag: &str) -> bool {
        self.personality.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_archetype_in_order() {
        let all = [
            VoiceArchetype::ChildHero,
            VoiceArchetype::WiseMentor,
            VoiceArchetype::FriendlyAnimal,
            VoiceArchetype::MagicalCreature,
            VoiceArchetype::VillainReformed,
            VoiceArchetype::NarratorClassic,
        ];
        let catalog = available_voice_archetypes();
        assert_eq!(catalog.len(), all.len());
        for archetype in all {
            assert_eq!(archetype.info().archetype, archetype);
        }
    }

    #[test]
    fn profiles() {
        let hero = VoiceArchetype::ChildHero.profile();
        assert_eq!(hero.pitch, 1.2);
        assert_eq!(hero.style, "energetic and brave");
        assert_eq!(VoiceArchetype::WiseMentor.info().name, "Wise Guide");
        assert_eq!(
            VoiceArchetype::NarratorClassic.info().description,
            "Classic storytelling voice"
        );
    }

    #[test]
    fn tags() {
        assert_eq!(VoiceArchetype::FriendlyAnimal.tag(), "friendly-animal");
        assert_eq!(VoiceArchetype::NarratorClassic.tag(), "narrator-classic");
    }

    #[test]
    fn has_trait() {
        let c = Character {
            id: CharacterId("char-1".to_string()),
            name: "Mia".to_string(),
            voice: VoiceArchetype::ChildHero,
            personality: vec!["brave".to_string(), "kind".to_string()],
            visual_description: "A girl".to_string(),
            dialogue_style: "warm and friendly".to_string(),
        };
        assert!(c.has_trait("brave"));
        assert!(!c.has_trait("wise"));
    }
}
