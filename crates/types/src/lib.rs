//! Validated primitive types shared across the triage workspace.
//!
//! These wrappers guarantee their invariant at construction time so that the
//! engine crates never re-check it: a [`NonEmptyText`] always contains at
//! least one non-whitespace character, an [`MgcsScore`] is always within the
//! 0..=18 clinical range, and a [`ConfidencePercent`] is always 0..=100.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating bounded clinical scores.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The value fell outside the permitted range for the score.
    #[error("score {value} is out of range (maximum {max})")]
    OutOfRange { value: u8, max: u8 },
}

/// A string type that guarantees non-empty content.
///
/// Input is trimmed of leading and trailing whitespace during construction;
/// a trimmed-empty input is rejected. Used for the fields of a kudos
/// submission, which must all carry visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty or
    /// whitespace-only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A Modified Glasgow Coma Scale total, guaranteed to be within 0..=18.
///
/// The MGCS is the sum of three 0..=6 sub-scores (motor activity, brainstem
/// reflexes, level of consciousness). This type only validates the total;
/// the per-category breakdown lives with the insight reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MgcsScore(u8);

impl MgcsScore {
    /// Maximum attainable MGCS total (three sub-scores of 6).
    pub const MAX: u8 = 18;

    /// Creates a validated score, rejecting values above [`MgcsScore::MAX`].
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw 0..=18 value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for MgcsScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl serde::Serialize for MgcsScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for MgcsScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        MgcsScore::new(value).map_err(serde::de::Error::custom)
    }
}

/// An integer percentage guaranteed to be within 0..=100.
///
/// Carries the upstream model-confidence figure attached to a case. The
/// value is produced elsewhere and treated as opaque input here; only the
/// range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfidencePercent(u8);

impl ConfidencePercent {
    /// Maximum percentage value.
    pub const MAX: u8 = 100;

    /// Creates a validated percentage, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw 0..=100 value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ConfidencePercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl serde::Serialize for ConfidencePercent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ConfidencePercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        ConfidencePercent::new(value).map_err(serde::de::Error::custom)
    }
}
