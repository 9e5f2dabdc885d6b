//! Gamified progress derived from the kudos counter.
//!
//! Every quantity here is a pure function of the counter and the configured
//! tuning, and is recomputed on demand rather than stored, so the meter can
//! never diverge from the counter that drives it.

use serde::Serialize;

use crate::config::TriageConfig;

/// Level, percent-to-next-level, and remaining kudos for the progress meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub level: u32,
    /// 0..=100; pinned to 100 once the counter reaches the cap.
    pub progress_percent: u32,
    /// Kudos still needed for the next level; 0 once capped.
    pub kudos_to_next_level: u32,
}

/// Growth state of one decorative reward unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UnitGrowth {
    /// 0..=kudos_per_level; each accepted kudos grows the active unit one step.
    pub growth_step: u32,
    pub is_fully_grown: bool,
}

/// Derives the progress meter values from the kudos counter.
pub fn progress(counter: u32, config: &TriageConfig) -> ProgressSnapshot {
    let per_level = config.kudos_per_level();

    if counter >= config.max_kudos() {
        return ProgressSnapshot {
            level: counter / per_level,
            progress_percent: 100,
            kudos_to_next_level: 0,
        };
    }

    let into_level = counter % per_level;
    ProgressSnapshot {
        level: counter / per_level,
        progress_percent: into_level * 100 / per_level,
        kudos_to_next_level: per_level - into_level,
    }
}

/// Growth of reward unit `unit_index` under counter value `counter`.
///
/// Units fill in order: unit 0 absorbs the first `kudos_per_level` kudos,
/// unit 1 the next, and so on, so the visual growth order is deterministic.
pub fn unit_growth(counter: u32, unit_index: u32, config: &TriageConfig) -> UnitGrowth {
    let per_level = config.kudos_per_level();
    let consumed = i64::from(unit_index) * i64::from(per_level);
    let growth_step = (i64::from(counter) - consumed).clamp(0, i64::from(per_level)) as u32;

    UnitGrowth {
        growth_step,
        is_fully_grown: growth_step == per_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REWARD_UNIT_COUNT;
    use crate::kudos::add_kudos;

    fn config() -> TriageConfig {
        TriageConfig::default()
    }

    #[test]
    fn test_progress_at_zero() {
        let snapshot = progress(0, &config());
        assert_eq!(
            snapshot,
            ProgressSnapshot {
                level: 0,
                progress_percent: 0,
                kudos_to_next_level: 4
            }
        );
    }

    #[test]
    fn test_progress_mid_level() {
        let snapshot = progress(2, &config());
        assert_eq!(
            snapshot,
            ProgressSnapshot {
                level: 0,
                progress_percent: 50,
                kudos_to_next_level: 2
            }
        );
    }

    #[test]
    fn test_progress_at_cap() {
        let snapshot = progress(40, &config());
        assert_eq!(
            snapshot,
            ProgressSnapshot {
                level: 10,
                progress_percent: 100,
                kudos_to_next_level: 0
            }
        );
    }

    #[test]
    fn test_progress_beyond_cap_equals_cap_once_counter_is_capped() {
        // The counter itself saturates, so the capped value is what progress sees.
        let capped = add_kudos(40, 40);
        assert_eq!(progress(capped, &config()), progress(40, &config()));
    }

    #[test]
    fn test_level_never_decreases_as_counter_grows() {
        let config = config();
        let mut last_level = 0;
        for counter in 0..=40 {
            let snapshot = progress(counter, &config);
            assert!(snapshot.level >= last_level);
            last_level = snapshot.level;
        }
    }

    #[test]
    fn test_unit_growth_fills_first_unit_before_second() {
        let config = config();
        assert_eq!(unit_growth(0, 0, &config).growth_step, 0);
        assert_eq!(unit_growth(3, 0, &config).growth_step, 3);
        assert_eq!(unit_growth(3, 1, &config).growth_step, 0);

        let first = unit_growth(4, 0, &config);
        assert!(first.is_fully_grown);
        assert_eq!(unit_growth(5, 1, &config).growth_step, 1);
    }

    #[test]
    fn test_unit_growth_monotone_in_counter() {
        let config = config();
        for unit_index in 0..REWARD_UNIT_COUNT {
            for counter in 0..40 {
                let before = unit_growth(counter, unit_index, &config).growth_step;
                let after = unit_growth(counter + 1, unit_index, &config).growth_step;
                assert!(before <= after);
            }
        }
    }

    #[test]
    fn test_all_units_fully_grown_at_cap() {
        let config = config();
        for unit_index in 0..REWARD_UNIT_COUNT {
            assert!(unit_growth(40, unit_index, &config).is_fully_grown);
        }
    }
}
