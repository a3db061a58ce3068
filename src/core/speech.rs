/// Speech collaborator contract: fire-and-forget synthesis plus stop.
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::schema::character::VoiceProfile;
use crate::schema::emotion::Emotion;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis unavailable: {0}")]
    Unavailable(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Languages the speech collaborator can be asked to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    De,
}

impl Language {
    /// BCP 47 locale tag for synthesizers.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Fr => "fr-FR",
            Self::Es => "es-ES",
            Self::De => "de-DE",
        }
    }
}

/// Everything a synthesizer needs to voice one line.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub emotion: Emotion,
    pub language: Language,
    pub voice: VoiceProfile,
}

/// An external text-to-speech service.
///
/// `speak` starts an utterance and returns without waiting for it to finish;
/// there is no completion signal. `stop` cancels whatever is in flight.
pub trait SpeechService: Send + Sync {
    fn speak(&self, request: &SpeechRequest<'_>) -> Result<(), SpeechError>;

    fn stop(&self);
}

impl<T: SpeechService + ?Sized> SpeechService for Arc<T> {
    fn speak(&self, request: &SpeechRequest<'_>) -> Result<(), SpeechError> {
        (**self).speak(request)
    }

    fn stop(&self) {
        (**self).stop()
    }
}

/// A speech service that discards everything. Useful for silent playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl SpeechService for SilentSpeech {
    fn speak(&self, _request: &SpeechRequest<'_>) -> Result<(), SpeechError> {
        Ok(())
    }

    fn stop(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::character::VoiceArchetype;

    #[test]
    fn locales() {
        assert_eq!(Language::En.locale(), "en-US");
        assert_eq!(Language::De.locale(), "de-DE");
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn silent_speech_accepts_everything() {
        let speech: Arc<dyn SpeechService> = Arc::new(SilentSpeech);
        let request = SpeechRequest {
            text: "Hello",
            emotion: Emotion::Happy,
            language: Language::Fr,
            voice: VoiceArchetype::ChildHero.profile(),
        };
        assert!(speech.speak(&request).is_ok());
        speech.stop();
    }
}
