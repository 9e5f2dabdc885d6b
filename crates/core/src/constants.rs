//! Constants used throughout the triage core crate.
//!
//! This module gathers the tuning defaults in one place so the rest of the
//! codebase never hardcodes them inline.

/// Kudos required to complete one gamification level.
pub const DEFAULT_KUDOS_PER_LEVEL: u32 = 4;

/// Saturation cap for the kudos counter.
pub const DEFAULT_MAX_KUDOS: u32 = 40;

/// Number of decorative reward units on the wellness tree.
pub const REWARD_UNIT_COUNT: u32 = 10;

/// Default clinical keyword vocabulary scanned by the tagger.
pub const DEFAULT_VOCABULARY: [&str; 6] =
    ["PALE", "GASP", "SEIZURE", "VOMIT", "DIARRHEA", "WEAK"];

/// Default probability that a simulator tick admits a new case.
pub const DEFAULT_ARRIVAL_CHANCE: f64 = 0.3;

/// Default probability that a simulator tick records a saved life.
pub const DEFAULT_LIFE_SAVED_CHANCE: f64 = 0.3;
