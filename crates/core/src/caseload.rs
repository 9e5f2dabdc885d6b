//! Caseload wire models and the built-in sample queue.
//!
//! Responsibilities:
//! - Define a strict wire model for caseload YAML documents
//! - Translate wire records into validated [`CaseDraft`]s
//! - Provide the built-in sample caseload used by the demo surfaces
//!
//! Parsing uses `serde_path_to_error` so a schema mismatch reports a
//! best-effort path (e.g. `cases.1.mgcs`) to the failing field.

use std::path::Path;

use serde::Deserialize;
use triage_types::{ConfidencePercent, MgcsScore};

use crate::case::{CaseDraft, Vitals};
use crate::severity::Severity;
use crate::{TriageError, TriageResult};

/// Strict wire model for a caseload document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseloadWire {
    cases: Vec<CaseWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseWire {
    name: String,
    animal_type: String,
    severity: String,
    #[serde(default)]
    symptoms: Vec<String>,
    heart_rate_bpm: u16,
    respiratory_rate: u16,
    temperature_c: f32,
    mgcs: u8,
    #[serde(default)]
    wait_time_minutes: u32,
    ai_confidence: u8,
}

impl CaseWire {
    fn into_draft(self) -> TriageResult<CaseDraft> {
        let severity = Severity::from_wire(&self.severity)?;

        let mgcs = MgcsScore::new(self.mgcs).map_err(|e| {
            TriageError::InvalidInput(format!("case {:?}: {e}", self.name))
        })?;
        let ai_confidence = ConfidencePercent::new(self.ai_confidence).map_err(|e| {
            TriageError::InvalidInput(format!("case {:?}: {e}", self.name))
        })?;

        Ok(CaseDraft {
            name: self.name,
            animal_type: self.animal_type,
            severity,
            symptoms: self.symptoms,
            vitals: Vitals {
                heart_rate_bpm: self.heart_rate_bpm,
                respiratory_rate: self.respiratory_rate,
                temperature_c: self.temperature_c,
            },
            mgcs,
            wait_time_minutes: self.wait_time_minutes,
            ai_confidence,
        })
    }
}

/// Parse a caseload document from YAML text.
///
/// # Errors
///
/// Returns [`TriageError::CaseloadSchema`] when the YAML does not match the
/// wire schema (unknown keys are rejected), [`TriageError::UnknownSeverity`]
/// for a severity tag outside the closed enum, and
/// [`TriageError::InvalidInput`] for out-of-range clinical scores.
pub fn parse(yaml_text: &str) -> TriageResult<Vec<CaseDraft>> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    let wire = match serde_path_to_error::deserialize::<_, CaseloadWire>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            return Err(TriageError::CaseloadSchema {
                path,
                message: source.to_string(),
            });
        }
    };

    wire.cases.into_iter().map(CaseWire::into_draft).collect()
}

/// Read and parse a caseload file.
pub fn load_file(path: &Path) -> TriageResult<Vec<CaseDraft>> {
    let yaml_text = std::fs::read_to_string(path).map_err(TriageError::CaseloadRead)?;
    let drafts = parse(&yaml_text)?;
    tracing::debug!(path = %path.display(), cases = drafts.len(), "caseload loaded");
    Ok(drafts)
}

/// The built-in sample queue rendered by the demo surfaces.
pub fn sample() -> Vec<CaseDraft> {
    fn must(value: TriageResult<CaseDraft>) -> CaseDraft {
        match value {
            Ok(draft) => draft,
            // The sample data is fixed and always within range.
            Err(_) => unreachable!("sample caseload is valid by construction"),
        }
    }

    vec![
        must(
            CaseWire {
                name: "Luna".to_string(),
                animal_type: "dog".to_string(),
                severity: "critical".to_string(),
                symptoms: vec![
                    "pale gums".to_string(),
                    "gasping".to_string(),
                    "seizure".to_string(),
                ],
                heart_rate_bpm: 180,
                respiratory_rate: 45,
                temperature_c: 39.5,
                mgcs: 8,
                wait_time_minutes: 2,
                ai_confidence: 95,
            }
            .into_draft(),
        ),
        must(
            CaseWire {
                name: "Mochi".to_string(),
                animal_type: "cat".to_string(),
                severity: "urgent".to_string(),
                symptoms: vec!["vomiting".to_string(), "not eating".to_string()],
                heart_rate_bpm: 140,
                respiratory_rate: 32,
                temperature_c: 38.8,
                mgcs: 14,
                wait_time_minutes: 5,
                ai_confidence: 88,
            }
            .into_draft(),
        ),
        must(
            CaseWire {
                name: "Max".to_string(),
                animal_type: "dog".to_string(),
                severity: "urgent".to_string(),
                symptoms: vec!["diarrhea".to_string(), "lethargy".to_string()],
                heart_rate_bpm: 120,
                respiratory_rate: 28,
                temperature_c: 39.2,
                mgcs: 12,
                wait_time_minutes: 8,
                ai_confidence: 90,
            }
            .into_draft(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_DOC: &str = "\
cases:
  - name: Luna
    animal_type: dog
    severity: critical
    symptoms: [pale gums, gasping]
    heart_rate_bpm: 180
    respiratory_rate: 45
    temperature_c: 39.5
    mgcs: 8
    wait_time_minutes: 2
    ai_confidence: 95
";

    #[test]
    fn test_parse_accepts_valid_document() {
        let drafts = parse(VALID_DOC).expect("should parse");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Luna");
        assert_eq!(drafts[0].severity, Severity::Critical);
        assert_eq!(drafts[0].symptoms, ["pale gums", "gasping"]);
    }

    #[test]
    fn test_parse_reports_path_for_unknown_key() {
        let doc = VALID_DOC.replace("animal_type", "species");
        let err = parse(&doc).expect_err("should reject unknown key");
        assert!(matches!(err, TriageError::CaseloadSchema { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_severity_tag() {
        let doc = VALID_DOC.replace("critical", "guarded");
        let err = parse(&doc).expect_err("should reject unknown severity");
        assert!(matches!(err, TriageError::UnknownSeverity(tag) if tag == "guarded"));
    }

    #[test]
    fn test_parse_rejects_out_of_range_mgcs() {
        let doc = VALID_DOC.replace("mgcs: 8", "mgcs: 19");
        let err = parse(&doc).expect_err("should reject mgcs 19");
        assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("Luna")));
    }

    #[test]
    fn test_sample_matches_dashboard_queue() {
        let drafts = sample();
        assert_eq!(drafts.len(), 3);

        let severities: Vec<_> = drafts.iter().map(|d| d.severity).collect();
        assert_eq!(
            severities,
            [Severity::Critical, Severity::Urgent, Severity::Urgent]
        );
        assert_eq!(drafts[0].vitals.heart_rate_bpm, 180);
        assert_eq!(drafts[1].mgcs.value(), 14);
        assert_eq!(drafts[2].wait_time_minutes, 8);
    }
}
