//! Case records for the active triage queue.
//!
//! A [`Case`] is immutable after creation. Identifiers are assigned by the
//! owning queue, never by the caller, so they stay unique for the life of
//! the process. A [`CaseDraft`] is the identifier-less form used at the
//! admission boundary.

use serde::Serialize;
use triage_types::{ConfidencePercent, MgcsScore};

use crate::severity::Severity;

/// Vital sign readings captured at admission.
///
/// Units: beats per minute, breaths per minute, degrees Celsius. Ranges are
/// advisory only; display thresholds are the renderer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vitals {
    pub heart_rate_bpm: u16,
    pub respiratory_rate: u16,
    pub temperature_c: f32,
}

/// One patient's triage record in the active queue.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Case {
    /// Queue-assigned identifier, unique for the life of the process.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Opaque species tag (dog, cat, rabbit, ...); icon lookup is external.
    pub animal_type: String,
    pub severity: Severity,
    /// Free-text symptom tags, insertion order preserved.
    pub symptoms: Vec<String>,
    pub vitals: Vitals,
    /// Modified Glasgow Coma Scale total, 0..=18.
    pub mgcs: MgcsScore,
    pub wait_time_minutes: u32,
    /// Upstream model confidence, 0..=100, treated as opaque input.
    pub ai_confidence: ConfidencePercent,
}

/// An identifier-less case, as it arrives at the admission boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseDraft {
    pub name: String,
    pub animal_type: String,
    pub severity: Severity,
    pub symptoms: Vec<String>,
    pub vitals: Vitals,
    pub mgcs: MgcsScore,
    pub wait_time_minutes: u32,
    pub ai_confidence: ConfidencePercent,
}

impl CaseDraft {
    /// Attach a queue-assigned identifier, producing the immutable record.
    pub(crate) fn into_case(self, id: u32) -> Case {
        Case {
            id,
            name: self.name,
            animal_type: self.animal_type,
            severity: self.severity,
            symptoms: self.symptoms,
            vitals: self.vitals,
            mgcs: self.mgcs,
            wait_time_minutes: self.wait_time_minutes,
            ai_confidence: self.ai_confidence,
        }
    }
}
