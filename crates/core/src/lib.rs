//! # Triage Core
//!
//! Core business logic for the veterinary triage dashboard.
//!
//! This crate is a pure, stateless computation layer over in-memory
//! collections:
//! - Severity classification with a total priority ordering
//! - Stable priority sorting of the case queue
//! - Aggregate statistics (severity counts, average wait and confidence)
//! - Gamified kudos progress (levels, meter percent, reward-unit growth)
//! - Clinical keyword tagging over free-text symptom input
//! - Templated per-severity insight reporting
//! - A deterministic arrival simulator behind an injected random source
//!
//! **No rendering concerns**: animation, layout, and 3D visualization belong
//! to whichever view layer embeds this crate.

pub mod arrivals;
pub mod case;
pub mod caseload;
pub mod config;
pub mod constants;
pub mod error;
pub mod insights;
pub mod kudos;
pub mod progress;
pub mod queue;
pub mod severity;
pub mod stats;
pub mod tagger;

pub use case::{Case, CaseDraft, Vitals};
pub use config::TriageConfig;
pub use error::{TriageError, TriageResult};
pub use insights::{InsightReport, MgcsBreakdown};
pub use kudos::{KudosBoard, KudosMessage, KudosSubmission, Sticker};
pub use progress::{progress, unit_growth, ProgressSnapshot, UnitGrowth};
pub use queue::{sort_queue, TriageQueue};
pub use severity::{Severity, SeverityTheme};
pub use stats::{compute_stats, QueueStats, SeverityCounts};
pub use tagger::extract_tags;

// Re-exported so embedders can name the validated primitives without a
// direct dependency on the types crate.
pub use triage_types::{ConfidencePercent, MgcsScore, NonEmptyText};

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end: three mixed-severity cases sort into priority order and
    // count one per grade.
    #[test]
    fn test_mixed_queue_sorts_and_counts_per_grade() {
        let mut drafts = caseload::sample();
        drafts[0].severity = Severity::Urgent;
        drafts[1].severity = Severity::Critical;
        drafts[2].severity = Severity::Stable;

        let queue = TriageQueue::from_drafts(drafts);
        let ordered = queue.in_priority_order();
        let severities: Vec<_> = ordered.iter().map(|c| c.severity).collect();
        assert_eq!(
            severities,
            [Severity::Critical, Severity::Urgent, Severity::Stable]
        );

        let stats = compute_stats(queue.cases()).expect("non-empty queue");
        assert_eq!(stats.count_by_severity.get(Severity::Critical), 1);
        assert_eq!(stats.count_by_severity.get(Severity::Urgent), 1);
        assert_eq!(stats.count_by_severity.get(Severity::Stable), 1);
    }
}
