//! The active case queue and priority ordering.

use crate::case::{Case, CaseDraft};

/// Stable-sort a case collection into priority order.
///
/// Cases are ordered ascending by severity rank; cases sharing a severity
/// keep their relative input order, so same-grade cards never reshuffle
/// between renders. The input is not mutated.
pub fn sort_queue(cases: &[Case]) -> Vec<Case> {
    let mut ordered = cases.to_vec();
    // Vec::sort_by_key is a stable sort, which the tie-break contract relies on.
    ordered.sort_by_key(|case| case.severity.rank());
    ordered
}

/// Exclusive owner of the active case list.
///
/// Identifiers are assigned from a monotonic counter and never reused, even
/// if the queue is later drained.
#[derive(Debug, Default)]
pub struct TriageQueue {
    cases: Vec<Case>,
    next_id: u32,
}

impl TriageQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a queue pre-populated from admission drafts, in order.
    pub fn from_drafts(drafts: impl IntoIterator<Item = CaseDraft>) -> Self {
        let mut queue = Self::new();
        for draft in drafts {
            queue.admit(draft);
        }
        queue
    }

    /// Admits a new case, assigning the next identifier.
    ///
    /// Returns the assigned id.
    pub fn admit(&mut self, draft: CaseDraft) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let case = draft.into_case(id);
        tracing::debug!(id, severity = %case.severity, name = %case.name, "case admitted");
        self.cases.push(case);
        id
    }

    /// All cases in admission order.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Looks up a case by identifier.
    pub fn get(&self, id: u32) -> Option<&Case> {
        self.cases.iter().find(|case| case.id == id)
    }

    /// The queue in priority order; the owned list is left untouched.
    pub fn in_priority_order(&self) -> Vec<Case> {
        sort_queue(&self.cases)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Vitals;
    use crate::severity::Severity;
    use triage_types::{ConfidencePercent, MgcsScore};

    fn draft(name: &str, severity: Severity) -> CaseDraft {
        CaseDraft {
            name: name.to_string(),
            animal_type: "dog".to_string(),
            severity,
            symptoms: vec!["lethargy".to_string()],
            vitals: Vitals {
                heart_rate_bpm: 120,
                respiratory_rate: 30,
                temperature_c: 38.9,
            },
            mgcs: MgcsScore::new(14).expect("valid score"),
            wait_time_minutes: 5,
            ai_confidence: ConfidencePercent::new(90).expect("valid percent"),
        }
    }

    #[test]
    fn test_sort_queue_orders_by_severity_rank() {
        let queue = TriageQueue::from_drafts([
            draft("Mochi", Severity::Urgent),
            draft("Luna", Severity::Critical),
            draft("Coco", Severity::Stable),
        ]);

        let ordered = queue.in_priority_order();
        let names: Vec<_> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Luna", "Mochi", "Coco"]);
    }

    #[test]
    fn test_sort_queue_is_stable_for_equal_severity() {
        let queue = TriageQueue::from_drafts([
            draft("Mochi", Severity::Urgent),
            draft("Max", Severity::Urgent),
            draft("Luna", Severity::Critical),
            draft("Bella", Severity::Urgent),
        ]);

        let ordered = queue.in_priority_order();
        let names: Vec<_> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Luna", "Mochi", "Max", "Bella"]);

        // Re-sorting an already-sorted collection must yield an identical sequence.
        assert_eq!(sort_queue(&ordered), ordered);
    }

    #[test]
    fn test_sort_queue_does_not_mutate_input() {
        let queue = TriageQueue::from_drafts([
            draft("Mochi", Severity::Stable),
            draft("Luna", Severity::Critical),
        ]);

        let before: Vec<_> = queue.cases().to_vec();
        let _ = queue.in_priority_order();
        assert_eq!(queue.cases(), before.as_slice());
    }

    #[test]
    fn test_admit_assigns_unique_monotonic_ids() {
        let mut queue = TriageQueue::new();
        let first = queue.admit(draft("Luna", Severity::Critical));
        let second = queue.admit(draft("Mochi", Severity::Urgent));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(queue.get(second).expect("present").name, "Mochi");
        assert!(queue.get(99).is_none());
    }
}
