//! Triage severity classification.
//!
//! [`Severity`] is a closed enum with a total priority ordering: critical
//! cases are served first. Unknown tags are rejected at the boundary rather
//! than falling through to a default presentation, so bad data can never
//! masquerade as a valid classification.

use crate::{TriageError, TriageResult};

/// Triage urgency classification, ordered by priority.
///
/// The derived `Ord` follows declaration order, which matches the rank
/// table: `Critical < Urgent < Stable` (lower = higher priority).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Immediate intervention required.
    Critical,
    /// Needs care soon; monitored closely.
    Urgent,
    /// Routine; no emergency indicators.
    Stable,
}

/// Display palette for one severity grade.
///
/// Colors are opaque to the engine; the values are the hex palette the
/// dashboard renders with (`main` for headers, `background`/`border` for
/// panels, `accent` for queue cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeverityTheme {
    pub main: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

impl Severity {
    /// Every severity grade, in rank order.
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Urgent, Severity::Stable];

    /// Priority rank: 0 is served first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Urgent => 1,
            Severity::Stable => 2,
        }
    }

    /// Uppercase display label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Urgent => "URGENT",
            Severity::Stable => "STABLE",
        }
    }

    /// Display theme for this grade.
    pub fn theme(self) -> SeverityTheme {
        match self {
            Severity::Critical => SeverityTheme {
                main: "#FF6B6B",
                background: "#FFF0F0",
                border: "#FFD6D6",
                accent: "#FF6B6B",
            },
            Severity::Urgent => SeverityTheme {
                main: "#F59E0B",
                background: "#FFFBEB",
                border: "#FEF3C7",
                accent: "#FFD93D",
            },
            Severity::Stable => SeverityTheme {
                main: "#10B981",
                background: "#ECFDF5",
                border: "#D1FAE5",
                accent: "#6BCB77",
            },
        }
    }

    /// Convert to the lowercase wire tag.
    pub fn to_wire(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Urgent => "urgent",
            Severity::Stable => "stable",
        }
    }

    /// Parse a lowercase wire tag, rejecting anything outside the closed enum.
    pub fn from_wire(tag: &str) -> TriageResult<Self> {
        match tag {
            "critical" => Ok(Severity::Critical),
            "urgent" => Ok(Severity::Urgent),
            "stable" => Ok(Severity::Stable),
            other => Err(TriageError::UnknownSeverity(other.to_string())),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = TriageError;

    fn from_str(s: &str) -> TriageResult<Self> {
        Severity::from_wire(s)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_wire())
    }
}

impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Severity::from_wire(&tag).map_err(serde::de::Error::custom)
    }
}
