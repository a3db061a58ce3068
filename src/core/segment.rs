/// Scene segmentation: sentence splitting, windowing and setting detection.

const SENTENCE_ENDERS: &[char] = &['.', '!', '?'];

/// Sentences per scene. The final scene may hold fewer.
pub const SENTENCES_PER_SCENE: usize = 3;

/// Settings recognised in scene text, in match priority.
const SETTINGS: &[&str] = &[
    "forest", "castle", "home", "school", "beach", "mountain", "space", "garden",
];

pub const DEFAULT_SETTING: &str = "magical place";

/// Split narrative text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_ENDERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Group sentences into consecutive windows of [`SENTENCES_PER_SCENE`].
pub fn group_scenes<'a>(sentences: &[&'a str]) -> Vec<Vec<&'a str>> {
    sentences
        .chunks(SENTENCES_PER_SCENE)
        .map(|window| window.to_vec())
        .collect()
}

/// The first known setting mentioned anywhere in the window.
pub fn detect_setting(sentences: &[&str]) -> &'static str {
    let joined = sentences.join(". ").to_lowercase();
    SETTINGS
        .iter()
        .find(|setting| joined.contains(**setting))
        .copied()
        .unwrap_or(DEFAULT_SETTING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_discards_empty_fragments() {
        let sentences = split_sentences("Hello there!! How are you?  . Fine...");
        assert_eq!(sentences, vec!["Hello there", "How are you", "Fine"]);
    }

    #[test]
    fn split_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ...!?  ").is_empty());
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("The end"), vec!["The end"]);
    }

    #[test]
    fn windows_of_three() {
        let sentences = vec!["a", "b", "c", "d", "e", "f", "g"];
        let scenes = group_scenes(&sentences);
        assert_eq!(scenes.len(), 3);
        assert_eq!(scenes[0], vec!["a", "b", "c"]);
        assert_eq!(scenes[2], vec!["g"]);
    }

    #[test]
    fn scene_count_is_ceiling_of_sentences_over_three() {
        for n in 0..12 {
            let sentences: Vec<&str> = std::iter::repeat("x").take(n).collect();
            assert_eq!(group_scenes(&sentences).len(), n.div_ceil(3));
        }
    }

    #[test]
    fn setting_first_vocabulary_match_wins() {
        // "castle" precedes "beach" in the vocabulary, regardless of text order.
        assert_eq!(detect_setting(&["We ran to the BEACH", "then the Castle"]), "castle");
        assert_eq!(detect_setting(&["Into the forest we go"]), "forest");
    }

    #[test]
    fn setting_defaults_to_magical_place() {
        assert_eq!(detect_setting(&["Nothing to see"]), DEFAULT_SETTING);
        assert_eq!(detect_setting(&[]), DEFAULT_SETTING);
    }
}
