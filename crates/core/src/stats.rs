//! Aggregate statistics over a case collection.
//!
//! Statistics are always computed fresh from the case list, never cached, so
//! they cannot drift from the queue they describe. An empty collection is an
//! error: the caller must never receive a silently-zeroed average.

use serde::Serialize;

use crate::case::Case;
use crate::severity::Severity;
use crate::{TriageError, TriageResult};

/// Case counts per severity grade, zero-filled over the whole enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub urgent: usize,
    pub stable: usize,
}

impl SeverityCounts {
    /// Count for one grade.
    pub fn get(self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Urgent => self.urgent,
            Severity::Stable => self.stable,
        }
    }

    fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Urgent => self.urgent += 1,
            Severity::Stable => self.stable += 1,
        }
    }
}

/// Aggregate figures for the stat widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub count_by_severity: SeverityCounts,
    /// Mean wait in whole minutes, rounded half up.
    pub average_wait_minutes: u32,
    /// Mean model confidence in whole percent, rounded half up.
    pub average_confidence: u32,
}

/// Computes counts and averages over a non-empty case collection.
///
/// # Errors
///
/// Returns [`TriageError::InsufficientData`] for an empty collection.
pub fn compute_stats(cases: &[Case]) -> TriageResult<QueueStats> {
    if cases.is_empty() {
        return Err(TriageError::InsufficientData);
    }

    let mut counts = SeverityCounts::default();
    let mut wait_sum: u64 = 0;
    let mut confidence_sum: u64 = 0;

    for case in cases {
        counts.bump(case.severity);
        wait_sum += u64::from(case.wait_time_minutes);
        confidence_sum += u64::from(case.ai_confidence.value());
    }

    let n = cases.len() as u64;

    Ok(QueueStats {
        count_by_severity: counts,
        average_wait_minutes: mean_round_half_up(wait_sum, n),
        average_confidence: mean_round_half_up(confidence_sum, n),
    })
}

/// Integer mean with exact round-half-up, avoiding float rounding modes.
fn mean_round_half_up(sum: u64, n: u64) -> u32 {
    let quotient = sum / n;
    let remainder = sum % n;
    let rounded = if remainder * 2 >= n {
        quotient + 1
    } else {
        quotient
    };
    rounded as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{CaseDraft, Vitals};
    use crate::queue::TriageQueue;
    use triage_types::{ConfidencePercent, MgcsScore};

    fn draft(severity: Severity, wait_time_minutes: u32, confidence: u8) -> CaseDraft {
        CaseDraft {
            name: "Luna".to_string(),
            animal_type: "dog".to_string(),
            severity,
            symptoms: vec![],
            vitals: Vitals {
                heart_rate_bpm: 150,
                respiratory_rate: 40,
                temperature_c: 39.1,
            },
            mgcs: MgcsScore::new(10).expect("valid score"),
            wait_time_minutes,
            ai_confidence: ConfidencePercent::new(confidence).expect("valid percent"),
        }
    }

    #[test]
    fn test_compute_stats_rejects_empty_collection() {
        let err = compute_stats(&[]).expect_err("should reject empty input");
        assert!(matches!(err, TriageError::InsufficientData));
    }

    #[test]
    fn test_compute_stats_averages_round_half_up() {
        let queue = TriageQueue::from_drafts([
            draft(Severity::Critical, 2, 95),
            draft(Severity::Urgent, 8, 88),
        ]);

        let stats = compute_stats(queue.cases()).expect("non-empty");
        assert_eq!(stats.average_wait_minutes, 5);
        // (95 + 88) / 2 = 91.5, rounds up.
        assert_eq!(stats.average_confidence, 92);
    }

    #[test]
    fn test_compute_stats_zero_fills_absent_severities() {
        let queue = TriageQueue::from_drafts([
            draft(Severity::Urgent, 5, 90),
            draft(Severity::Critical, 2, 95),
            draft(Severity::Stable, 10, 80),
        ]);

        let stats = compute_stats(queue.cases()).expect("non-empty");
        assert_eq!(stats.count_by_severity.get(Severity::Critical), 1);
        assert_eq!(stats.count_by_severity.get(Severity::Urgent), 1);
        assert_eq!(stats.count_by_severity.get(Severity::Stable), 1);

        let critical_only = TriageQueue::from_drafts([draft(Severity::Critical, 1, 99)]);
        let stats = compute_stats(critical_only.cases()).expect("non-empty");
        assert_eq!(
            stats.count_by_severity,
            SeverityCounts {
                critical: 1,
                urgent: 0,
                stable: 0
            }
        );
    }

    #[test]
    fn test_mean_round_half_up_boundaries() {
        assert_eq!(mean_round_half_up(10, 4), 3); // 2.5 rounds up
        assert_eq!(mean_round_half_up(9, 4), 2); // 2.25 rounds down
        assert_eq!(mean_round_half_up(12, 4), 3); // exact
    }
}
