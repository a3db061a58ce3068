/// Playback configuration: timing constants and speech language.
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::core::speech::Language;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Timing used by the director. Speech duration is estimated from text
/// length; the audio system never reports completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub ms_per_character: u64,
    pub interaction_wait_ms: u64,
    pub language: Language,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            ms_per_character: 80,
            interaction_wait_ms: 3000,
            language: Language::En,
        }
    }
}

impl PerformanceConfig {
    /// Load a config from a RON file. Missing fields keep their defaults.
    pub fn load_from_ron(path: &Path) -> Result<PerformanceConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<PerformanceConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }

    /// Estimated time to speak `text` and then hold `pause_after_ms`.
    /// Saturates instead of overflowing on extreme configs.
    pub fn speaking_time(&self, text: &str, pause_after_ms: u64) -> Duration {
        let chars = text.chars().count() as u64;
        Duration::from_millis(
            chars
                .saturating_mul(self.ms_per_character)
                .saturating_add(pause_after_ms),
        )
    }

    pub fn interaction_wait(&self) -> Duration {
        Duration::from_millis(self.interaction_wait_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PerformanceConfig::default();
        assert_eq!(config.ms_per_character, 80);
        assert_eq!(config.interaction_wait(), Duration::from_secs(3));
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn speaking_time_counts_chars_plus_pause() {
        let config = PerformanceConfig::default();
        assert_eq!(
            config.speaking_time("Hello", 800),
            Duration::from_millis(5 * 80 + 800)
        );
        assert_eq!(config.speaking_time("", 0), Duration::ZERO);
    }

    #[test]
    fn huge_rate_saturates() {
        let config = PerformanceConfig::parse_ron("(ms_per_character: 18446744073709551615)")
            .unwrap();
        assert_eq!(config.ms_per_character, u64::MAX);
        assert_eq!(config.speaking_time("ab", 500), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = PerformanceConfig::parse_ron("(language: fr)").unwrap();
        assert_eq!(config.language, Language::Fr);
        assert_eq!(config.interaction_wait_ms, 3000);
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(PerformanceConfig::parse_ron("(ms_per_character: \"fast\")").is_err());
    }

    #[test]
    fn load_test_config_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/config.ron");
        let config = PerformanceConfig::load_from_ron(&path).unwrap();
        assert_eq!(config.ms_per_character, 60);
        assert_eq!(config.interaction_wait_ms, 2500);
        assert_eq!(config.language, Language::Es);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::path::PathBuf::from("tests/fixtures/does_not_exist.ron");
        assert!(matches!(
            PerformanceConfig::load_from_ron(&path),
            Err(ConfigError::Io(_))
        ));
    }
}
