//! Error types for cafe-core.

use thiserror::Error;

/// Result type alias using PuzzleError.
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Gestures the puzzle core refuses to apply.
///
/// Verdicts on a submission (incomplete, incorrect) are not errors; they are
/// reported through [`crate::types::Feedback`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("slot {slot} is already filled")]
    SlotOccupied { slot: String },

    #[error("room is already unlocked")]
    RoomUnlocked,

    #[error("the beaker already holds {capacity} sugars")]
    SelectionFull { capacity: usize },

    #[error("exactly {required} sugars are needed to mix, {selected} selected")]
    SelectionIncomplete { required: usize, selected: usize },

    #[error("a mix is already in progress")]
    MixInProgress,

    #[error("no mix is in progress")]
    NoMixPending,

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl PuzzleError {
    /// Stable machine-readable code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownSlot(_) => "unknown_slot",
            Self::UnknownItem(_) => "unknown_item",
            Self::SlotOccupied { .. } => "slot_occupied",
            Self::RoomUnlocked => "room_unlocked",
            Self::SelectionFull { .. } => "selection_full",
            Self::SelectionIncomplete { .. } => "selection_incomplete",
            Self::MixInProgress => "mix_in_progress",
            Self::NoMixPending => "no_mix_pending",
            Self::MissingField(_) => "missing_field",
        }
    }

    /// True when the gesture was well-formed but the room's current state
    /// refuses it.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlotOccupied { .. }
                | Self::RoomUnlocked
                | Self::SelectionFull { .. }
                | Self::MixInProgress
        )
    }
}
