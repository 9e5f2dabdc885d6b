//! Templated insight reporting.
//!
//! There is no inference here: the "AI" lines are static templates keyed by
//! the severity grade, total over the closed enum. The report also carries
//! the MGCS sub-score breakdown when one is available for the case.

use serde::Serialize;
use triage_types::{MgcsScore, ScoreError};

use crate::case::Case;
use crate::severity::{Severity, SeverityTheme};
use crate::{TriageError, TriageResult};

/// Per-category Modified Glasgow Coma Scale sub-scores.
///
/// Each category scores 0..=6; the MGCS total is their sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MgcsBreakdown {
    pub motor_activity: u8,
    pub brainstem_reflexes: u8,
    pub consciousness: u8,
}

impl MgcsBreakdown {
    /// Maximum value of one sub-score.
    pub const CATEGORY_MAX: u8 = 6;

    /// Creates a validated breakdown.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if any sub-score exceeds 6.
    pub fn new(motor_activity: u8, brainstem_reflexes: u8, consciousness: u8) -> TriageResult<Self> {
        for (category, value) in [
            ("motor activity", motor_activity),
            ("brainstem reflexes", brainstem_reflexes),
            ("consciousness", consciousness),
        ] {
            if value > Self::CATEGORY_MAX {
                return Err(TriageError::InvalidInput(format!(
                    "{category} sub-score {value} exceeds maximum {}",
                    Self::CATEGORY_MAX
                )));
            }
        }

        Ok(Self {
            motor_activity,
            brainstem_reflexes,
            consciousness,
        })
    }

    /// The MGCS total this breakdown sums to.
    pub fn total(self) -> MgcsScore {
        let sum = self.motor_activity + self.brainstem_reflexes + self.consciousness;
        match MgcsScore::new(sum) {
            Ok(score) => score,
            // Unreachable: three validated 0..=6 sub-scores sum to at most 18.
            Err(ScoreError::OutOfRange { .. }) => unreachable!("sub-scores validated at 0..=6"),
        }
    }
}

/// The three advisory lines shown for one severity grade.
pub fn insight_lines(severity: Severity) -> [&'static str; 3] {
    match severity {
        Severity::Critical => [
            "CRITICAL! OXYGEN NEEDED!",
            "SHOCK DETECTED!",
            "IV FLUID REQUIRED!",
        ],
        Severity::Urgent => [
            "URGENT CARE NEEDED!",
            "MONITOR VITALS!",
            "BLOOD TEST REQUIRED!",
        ],
        Severity::Stable => ["STABLE CONDITION", "ROUTINE CHECKUP", "NO EMERGENCY"],
    }
}

/// Everything the insight panel renders for one case.
#[derive(Clone, Debug, Serialize)]
pub struct InsightReport {
    pub case_id: u32,
    pub patient_name: String,
    pub severity: Severity,
    pub lines: [&'static str; 3],
    #[serde(skip)]
    pub theme: SeverityTheme,
    pub mgcs: MgcsScore,
    pub confidence_percent: u8,
    pub breakdown: Option<MgcsBreakdown>,
}

impl InsightReport {
    /// Builds the report for a case, with an optional sub-score breakdown.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if a breakdown is supplied whose
    /// total does not match the case's recorded MGCS.
    pub fn for_case(case: &Case, breakdown: Option<MgcsBreakdown>) -> TriageResult<Self> {
        if let Some(breakdown) = breakdown {
            if breakdown.total() != case.mgcs {
                return Err(TriageError::InvalidInput(format!(
                    "MGCS breakdown sums to {} but the case records {}",
                    breakdown.total(),
                    case.mgcs
                )));
            }
        }

        Ok(Self {
            case_id: case.id,
            patient_name: case.name.clone(),
            severity: case.severity,
            lines: insight_lines(case.severity),
            theme: case.severity.theme(),
            mgcs: case.mgcs,
            confidence_percent: case.ai_confidence.value(),
            breakdown,
        })
    }
}
