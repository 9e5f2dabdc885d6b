//! Peer-recognition (kudos) board state.
//!
//! The board is the single owner of the message list and the kudos counter;
//! both are updated only through [`KudosBoard::submit`]. Validation runs
//! before any mutation, so a rejected submission leaves the board untouched.
//! There is no ambient clock in the engine: the caller injects `now`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use triage_types::NonEmptyText;

use crate::{TriageError, TriageResult};

/// Fixed sticker palette for kudos notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sticker {
    Heart,
    Star,
    Clap,
    Party,
    Muscle,
    RaisedHands,
    Sparkles,
    Confetti,
}

impl Sticker {
    /// The full palette, in display order.
    pub const PALETTE: [Sticker; 8] = [
        Sticker::Heart,
        Sticker::Star,
        Sticker::Clap,
        Sticker::Party,
        Sticker::Muscle,
        Sticker::RaisedHands,
        Sticker::Sparkles,
        Sticker::Confetti,
    ];

    /// The rendered symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Sticker::Heart => "❤️",
            Sticker::Star => "🌟",
            Sticker::Clap => "👏",
            Sticker::Party => "🎉",
            Sticker::Muscle => "💪",
            Sticker::RaisedHands => "🙌",
            Sticker::Sparkles => "✨",
            Sticker::Confetti => "🎊",
        }
    }

    /// Looks a sticker up by its rendered symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::PALETTE
            .into_iter()
            .find(|sticker| sticker.symbol() == symbol)
    }
}

impl serde::Serialize for Sticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

/// A peer-recognition note, immutable once accepted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KudosMessage {
    /// Time-of-creation identifier (epoch milliseconds), strictly increasing
    /// across the board even for same-millisecond submissions.
    pub id: i64,
    pub from: NonEmptyText,
    pub to: NonEmptyText,
    pub message: NonEmptyText,
    pub sticker: Sticker,
    pub timestamp: DateTime<Utc>,
}

/// Raw submission as it arrives from the form, validated by the board.
#[derive(Clone, Debug)]
pub struct KudosSubmission {
    pub from: String,
    pub to: String,
    pub message: String,
    pub sticker: Sticker,
}

/// Saturating counter increment: one kudos per accepted submission, capped.
pub fn add_kudos(counter: u32, max_kudos: u32) -> u32 {
    counter.saturating_add(1).min(max_kudos)
}

/// Owner of the kudos messages (most-recent-first) and the counter.
#[derive(Debug)]
pub struct KudosBoard {
    messages: Vec<KudosMessage>,
    counter: u32,
    max_kudos: u32,
}

impl KudosBoard {
    /// Creates an empty board with the given counter cap.
    pub fn new(max_kudos: u32) -> Self {
        Self::with_counter(0, max_kudos)
    }

    /// Creates an empty board with a pre-existing counter value.
    ///
    /// The initial value is clamped to the cap so derived progress can never
    /// start beyond it.
    pub fn with_counter(counter: u32, max_kudos: u32) -> Self {
        Self {
            messages: Vec::new(),
            counter: counter.min(max_kudos),
            max_kudos,
        }
    }

    /// Validates and accepts a submission.
    ///
    /// On success the note is prepended (most-recent-first) and the counter
    /// is incremented, saturating at the cap. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidKudosSubmission`] when `from`, `to`, or
    /// `message` is empty or whitespace-only.
    pub fn submit(
        &mut self,
        submission: KudosSubmission,
        now: DateTime<Utc>,
    ) -> TriageResult<&KudosMessage> {
        let from = non_empty_field(&submission.from, "sender name")?;
        let to = non_empty_field(&submission.to, "recipient name")?;
        let message = non_empty_field(&submission.message, "message body")?;

        let id = match self.messages.first() {
            Some(latest) => now.timestamp_millis().max(latest.id + 1),
            None => now.timestamp_millis(),
        };

        self.messages.insert(
            0,
            KudosMessage {
                id,
                from,
                to,
                message,
                sticker: submission.sticker,
                timestamp: now,
            },
        );
        self.counter = add_kudos(self.counter, self.max_kudos);

        Ok(&self.messages[0])
    }

    /// Accepted notes, most recent first.
    pub fn messages(&self) -> &[KudosMessage] {
        &self.messages
    }

    /// Current counter value, never above the cap.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// The configured counter cap.
    pub fn max_kudos(&self) -> u32 {
        self.max_kudos
    }
}

fn non_empty_field(value: &str, field: &str) -> TriageResult<NonEmptyText> {
    NonEmptyText::new(value)
        .map_err(|_| TriageError::InvalidKudosSubmission(format!("{field} cannot be empty")))
}
