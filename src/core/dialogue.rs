/// Dialogue composition: narration classification, speaker attribution,
/// first-person rewriting and emotion detection.
use crate::schema::character::{Character, VoiceArchetype};
use crate::schema::emotion::Emotion;
use crate::schema::performance::{DialogueLine, LineKind};

/// Phrases that mark a sentence as storyteller exposition.
const NARRATION_MARKERS: &[&str] = &["once upon", "there was", "and so"];

pub const NARRATION_PAUSE_MS: u64 = 1000;
pub const SPEECH_PAUSE_MS: u64 = 800;

/// Attached to a scene's closing line when a character speaks it.
pub const NEXT_PROMPT: &str = "What happens next?";

/// Third-person to first-person swaps, applied in order. "her" is listed
/// as both possessive and object; the possessive reading wins.
const PRONOUN_SWAPS: &[(&[&str], &str)] = &[
    (&["he", "she", "they"], "I"),
    (&["his", "her", "their"], "my"),
    (&["him", "her", "them"], "me"),
];

/// Closing clause added by personality, first matching trait wins.
const TRAIT_CLAUSES: &[(&str, &str)] = &[
    ("brave", "I'm ready for this adventure!"),
    ("wise", "This teaches us something important."),
    ("playful", "This is so much fun!"),
];

/// Emotion keyword groups, scanned in priority order.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Happy, &["happy", "joy", "smile"]),
    (Emotion::Sad, &["sad", "cry", "tear"]),
    (Emotion::Angry, &["angry", "mad", "furious"]),
    (Emotion::Scared, &["scared", "afraid", "frightened"]),
    (Emotion::Excited, &["excited", "amazing", "wonderful"]),
    (Emotion::Surprised, &["surprised", "wow", "incredible"]),
];

/// Turn one scene's sentences into attributed dialogue lines.
///
/// Speakers rotate through the cast by sentence position within the scene,
/// narration included. Narration goes to the narrator-classic character if
/// the cast has one, otherwise to the first character. Returns no lines for
/// an empty cast.
pub fn compose_dialogue(sentences: &[&str], cast: &[Character]) -> Vec<DialogueLine> {
    let Some(first) = cast.first() else {
        return Vec::new();
    };
    let narrator = cast
        .iter()
        .find(|c| c.voice == VoiceArchetype::NarratorClassic)
        .unwrap_or(first);
    let last = sentences.len().saturating_sub(1);

    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            if is_narration(sentence) {
                DialogueLine {
                    character_id: narrator.id.clone(),
                    kind: LineKind::Narration,
                    text: sentence.trim().to_string(),
                    emotion: Emotion::Neutral,
                    pause_after_ms: NARRATION_PAUSE_MS,
                    interactive_prompt: None,
                }
            } else {
                let speaker = &cast[index % cast.len()];
                DialogueLine {
                    character_id: speaker.id.clone(),
                    kind: LineKind::Speech,
                    text: character_speech(sentence.trim(), speaker),
                    emotion: detect_emotion(sentence),
                    pause_after_ms: SPEECH_PAUSE_MS,
                    interactive_prompt: (index == last).then(|| NEXT_PROMPT.to_string()),
                }
            }
        })
        .collect()
}

/// Returns true if the sentence reads as storyteller exposition.
pub fn is_narration(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    NARRATION_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// The first emotion whose keywords appear in the sentence.
pub fn detect_emotion(sentence: &str) -> Emotion {
    let lower = sentence.to_lowercase();
    EMOTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(emotion, _)| *emotion)
        .unwrap_or(Emotion::Neutral)
}

/// Rewrite a narrated sentence as the character saying it themselves.
pub fn character_speech(sentence: &str, character: &Character) -> String {
    let speech = to_first_person(sentence);
    match trait_clause(character) {
        Some(clause) => format!("{} {}", speech, clause),
        None => speech,
    }
}

fn trait_clause(character: &Character) -> Option<&'static str> {
    TRAIT_CLAUSES
        .iter()
        .find(|(tag, _)| character.has_trait(tag))
        .map(|(_, clause)| *clause)
}

/// Swap whole-word third-person pronouns for first-person ones,
/// case-insensitively. Everything that is not a swapped word is kept as-is.
/// Apostrophes inside a word belong to it, so contractions like "she's"
/// are left alone.
pub fn to_first_person(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_alphabetic() || (is_apostrophe(ch) && !word.is_empty()) {
            word.push(ch);
            continue;
        }
        push_word(&mut out, &word);
        word.clear();
        out.push(ch);
    }
    push_word(&mut out, &word);
    out
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

fn push_word(out: &mut String, word: &str) {
    // a trailing apostrophe is a closing quote, not part of the word
    let core = word.trim_end_matches(is_apostrophe);
    let lower = core.to_lowercase();
    let swapped = PRONOUN_SWAPS
        .iter()
        .find(|(from, _)| from.contains(&lower.as_str()))
        .map(|(_, to)| *to);
    out.push_str(swapped.unwrap_or(core));
    out.push_str(&word[core.len()..]);
}
