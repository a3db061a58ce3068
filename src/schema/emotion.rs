use serde::{Deserialize, Serialize};

/// The emotional colour of a spoken line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Excited,
    Calm,
    Sad,
    Angry,
    Scared,
    Surprised,
    Silly,
    Neutral,
}

impl Default for Emotion {
    fn default() -> Self {
        Self::Neutral
    }
}

impl Emotion {
    /// Lowercase name, as the speech collaborator expects it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Scared => "scared",
            Self::Surprised => "surprised",
            Self::Silly => "silly",
            Self::Neutral => "neutral",
        }
    }

    /// Speaking-rate multiplier a synthesizer should apply for this emotion.
    pub fn speech_rate(&self) -> f32 {
        match self {
            Self::Happy => 1.1,
            Self::Excited => 1.2,
            Self::Calm => 0.9,
            Self::Sad => 0.8,
            Self::Angry => 1.0,
            Self::Scared => 0.9,
            Self::Surprised => 1.15,
            Self::Silly => 1.3,
            Self::Neutral => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        assert_eq!(Emotion::Happy.name(), "happy");
        assert_eq!(Emotion::Surprised.name(), "surprised");
        assert_eq!(Emotion::default(), Emotion::Neutral);
    }

    #[test]
    fn speech_rates() {
        assert!(Emotion::Silly.speech_rate() > Emotion::Excited.speech_rate());
        assert!(Emotion::Sad.speech_rate() < Emotion::Neutral.speech_rate());
        assert_eq!(Emotion::Neutral.speech_rate(), 1.0);
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(ron::to_string(&Emotion::Scared).unwrap(), "scared");
        let e: Emotion = ron::from_str("excited").unwrap();
        assert_eq!(e, Emotion::Excited);
    }
}
