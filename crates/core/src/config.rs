//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the engine. The intent is to avoid reading process-wide environment variables
//! during computation, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{DEFAULT_KUDOS_PER_LEVEL, DEFAULT_MAX_KUDOS, DEFAULT_VOCABULARY};
use crate::{TriageError, TriageResult};

/// Engine configuration resolved at startup.
///
/// Holds the gamification tuning constants and the keyword vocabulary. The
/// vocabulary is normalised to uppercase at construction so the tagger can
/// match without re-normalising per call.
#[derive(Clone, Debug)]
pub struct TriageConfig {
    kudos_per_level: u32,
    max_kudos: u32,
    vocabulary: Vec<String>,
}

impl TriageConfig {
    /// Create a new `TriageConfig`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if `kudos_per_level` is zero, if
    /// `max_kudos` is below `kudos_per_level`, or if any vocabulary entry is
    /// empty after trimming.
    pub fn new(
        kudos_per_level: u32,
        max_kudos: u32,
        vocabulary: Vec<String>,
    ) -> TriageResult<Self> {
        if kudos_per_level == 0 {
            return Err(TriageError::InvalidInput(
                "kudos_per_level must be at least 1".into(),
            ));
        }

        if max_kudos < kudos_per_level {
            return Err(TriageError::InvalidInput(format!(
                "max_kudos ({}) must be at least kudos_per_level ({})",
                max_kudos, kudos_per_level
            )));
        }

        let mut normalised = Vec::with_capacity(vocabulary.len());
        for entry in vocabulary {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                return Err(TriageError::InvalidInput(
                    "vocabulary entries cannot be empty".into(),
                ));
            }
            normalised.push(trimmed.to_uppercase());
        }

        Ok(Self {
            kudos_per_level,
            max_kudos,
            vocabulary: normalised,
        })
    }

    pub fn kudos_per_level(&self) -> u32 {
        self.kudos_per_level
    }

    pub fn max_kudos(&self) -> u32 {
        self.max_kudos
    }

    /// Uppercase keyword vocabulary scanned by the tagger.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        // The defaults satisfy every validation rule, so this cannot fail.
        Self {
            kudos_per_level: DEFAULT_KUDOS_PER_LEVEL,
            max_kudos: DEFAULT_MAX_KUDOS,
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parse a tuning counter from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns `default`. Used by
/// embedding binaries to resolve `TRIAGE_KUDOS_PER_LEVEL`-style overrides
/// once at startup.
pub fn counter_from_env_value(value: Option<String>, default: u32) -> TriageResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(raw) => raw.parse::<u32>().map_err(|e| {
            TriageError::InvalidInput(format!("invalid counter value {raw:?}: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_documented_tuning() {
        let config = TriageConfig::default();
        assert_eq!(config.kudos_per_level(), 4);
        assert_eq!(config.max_kudos(), 40);
        assert_eq!(config.vocabulary().len(), 6);
    }

    #[test]
    fn test_config_rejects_zero_kudos_per_level() {
        let err = TriageConfig::new(0, 40, vec![]).expect_err("should reject zero");
        assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("at least 1")));
    }

    #[test]
    fn test_config_rejects_cap_below_level_size() {
        let err = TriageConfig::new(4, 3, vec![]).expect_err("should reject low cap");
        assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("max_kudos")));
    }

    #[test]
    fn test_config_uppercases_vocabulary() {
        let config =
            TriageConfig::new(4, 40, vec!["pale".into(), " gasp ".into()]).expect("valid config");
        assert_eq!(config.vocabulary(), ["PALE", "GASP"]);
    }

    #[test]
    fn test_config_rejects_blank_vocabulary_entry() {
        let err =
            TriageConfig::new(4, 40, vec!["pale".into(), "  ".into()]).expect_err("should reject");
        assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("vocabulary")));
    }

    #[test]
    fn test_counter_from_env_value_defaults_when_unset() {
        assert_eq!(counter_from_env_value(None, 4).expect("default"), 4);
        assert_eq!(
            counter_from_env_value(Some("   ".into()), 40).expect("default"),
            40
        );
    }

    #[test]
    fn test_counter_from_env_value_parses_and_rejects() {
        assert_eq!(
            counter_from_env_value(Some("8".into()), 4).expect("parsed"),
            8
        );
        let err = counter_from_env_value(Some("four".into()), 4).expect_err("should reject");
        assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("four")));
    }
}
