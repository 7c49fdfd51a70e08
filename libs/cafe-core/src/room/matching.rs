//! Slot-matching engine shared by Room 1 and Room 3.
//!
//! A room is a catalog of items, a fixed set of slots and an answer key. The
//! learner fills slots and submits; a wrong board is cleared and the pool is
//! reshuffled so positions can not be memorized. Rooms differ only in their
//! [`RoomConfig`]: how a filled slot treats a new drop, what an incomplete
//! submission does, and how the board is compared with the key.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::SlotBoard;
use crate::error::{PuzzleError, Result};
use crate::room::PuzzleRoom;
use crate::shuffle::shuffle;
use crate::types::{Feedback, IncompletePolicy, Item, OccupancyPolicy, RoomId, Slot};

/// How a full board is judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// Each correct item must sit in its own slot (item id -> slot id).
    ExactPlacement(BTreeMap<String, String>),
    /// The placed items must equal this set; slot order is irrelevant.
    SetEquality(BTreeSet<String>),
}

impl AnswerKey {
    /// Check a complete board against the key.
    pub fn accepts(&self, board: &SlotBoard) -> bool {
        match self {
            Self::ExactPlacement(placements) => board.entries().all(|(slot, held)| {
                held.and_then(|item| placements.get(item))
                    .map_or(false, |correct_slot| *correct_slot == slot.id)
            }),
            Self::SetEquality(expected) => {
                let placed: Vec<&str> = board.assigned_items().collect();
                let unique: BTreeSet<&str> = placed.iter().copied().collect();
                placed.len() == expected.len()
                    && unique.len() == placed.len()
                    && unique.iter().all(|item| expected.contains(*item))
            }
        }
    }
}

/// Messages shown for each verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessages {
    pub incomplete: String,
    pub incorrect: String,
    pub correct: String,
    /// Only for rooms that refuse drops on filled slots.
    pub occupied: Option<String>,
}

/// Static configuration of a matching room.
#[derive(Debug, Clone)]
pub struct RoomConfig {
    pub id: RoomId,
    pub catalog: Vec<Item>,
    pub slots: Vec<Slot>,
    pub answer_key: AnswerKey,
    pub occupancy: OccupancyPolicy,
    pub on_incomplete: IncompletePolicy,
    pub unlock_code: Option<String>,
    pub hints: Vec<String>,
    pub messages: FeedbackMessages,
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    pub unlocked: bool,
    /// Whether the pool was reshuffled and the board cleared.
    pub reshuffled: bool,
}

/// A slot and whatever occupies it, for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotView {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// Snapshot of a matching room for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomView {
    pub room: RoomId,
    pub slots: Vec<SlotView>,
    pub available: Vec<Item>,
    pub feedback: Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub show_hints: bool,
    pub hints: Vec<String>,
    pub attempts: u32,
}

/// Session state of one matching room.
#[derive(Debug, Clone)]
pub struct MatchingRoom {
    config: RoomConfig,
    board: SlotBoard,
    order: Vec<Item>,
    feedback: Feedback,
    unlocked: bool,
    show_hints: bool,
    attempts: u32,
}

impl MatchingRoom {
    /// Mount a room with an empty board and a freshly shuffled pool.
    pub fn new<R: Rng + ?Sized>(config: RoomConfig, rng: &mut R) -> Self {
        let board = SlotBoard::new(config.slots.clone());
        let order = shuffle(&config.catalog, rng);
        Self {
            config,
            board,
            order,
            feedback: Feedback::None,
            unlocked: false,
            show_hints: false,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn board(&self) -> &SlotBoard {
        &self.board
    }

    /// Current display order of the whole catalog.
    pub fn order(&self) -> &[Item] {
        &self.order
    }

    /// Failed complete submissions so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.unlocked {
            Err(PuzzleError::RoomUnlocked)
        } else {
            Ok(())
        }
    }

    fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.clear();
        self.order = shuffle(&self.config.catalog, rng);
    }

    /// Drop an item on a slot under the room's occupancy policy.
    ///
    /// Returns the item pushed back to the pool, if any.
    pub fn assign(&mut self, slot_id: &str, item_id: &str) -> Result<Option<String>> {
        self.ensure_in_progress()?;
        if !self.config.catalog.iter().any(|item| item.id == item_id) {
            return Err(PuzzleError::UnknownItem(item_id.to_string()));
        }

        match self.board.assign(slot_id, item_id, self.config.occupancy) {
            Ok(displaced) => {
                self.feedback = Feedback::None;
                Ok(displaced)
            }
            Err(err) => {
                if let PuzzleError::SlotOccupied { .. } = err {
                    self.feedback = Feedback::Occupied;
                }
                Err(err)
            }
        }
    }

    /// Take an item back out of a slot.
    pub fn unassign(&mut self, slot_id: &str) -> Result<Option<String>> {
        self.ensure_in_progress()?;
        let removed = self.board.unassign(slot_id)?;
        self.feedback = Feedback::None;
        Ok(removed)
    }

    /// Judge the board.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmitOutcome {
        if self.unlocked {
            return SubmitOutcome {
                feedback: Feedback::Correct,
                unlocked: true,
                reshuffled: false,
            };
        }

        if !self.board.is_complete() {
            let reshuffled = self.config.on_incomplete == IncompletePolicy::Reset;
            if reshuffled {
                self.reshuffle(rng);
            }
            self.feedback = Feedback::Incomplete;
            return SubmitOutcome {
                feedback: Feedback::Incomplete,
                unlocked: false,
                reshuffled,
            };
        }

        if self.config.answer_key.accepts(&self.board) {
            self.unlocked = true;
            self.feedback = Feedback::Correct;
            SubmitOutcome {
                feedback: Feedback::Correct,
                unlocked: true,
                reshuffled: false,
            }
        } else {
            self.attempts += 1;
            self.reshuffle(rng);
            self.feedback = Feedback::Incorrect;
            SubmitOutcome {
                feedback: Feedback::Incorrect,
                unlocked: false,
                reshuffled: true,
            }
        }
    }

    /// Clear the board and reshuffle without judging it.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.ensure_in_progress()?;
        self.reshuffle(rng);
        self.feedback = Feedback::None;
        self.show_hints = false;
        Ok(())
    }

    /// Show or hide the room's hints; returns the new visibility.
    pub fn toggle_hints(&mut self) -> bool {
        self.show_hints = !self.show_hints;
        self.show_hints
    }

    /// Pool items not placed on the board, in display order.
    pub fn available_items(&self) -> Vec<&Item> {
        self.board.available_items(&self.order)
    }

    pub fn message(&self) -> Option<&str> {
        let messages = &self.config.messages;
        match self.feedback {
            Feedback::None => None,
            Feedback::Incomplete => Some(messages.incomplete.as_str()),
            Feedback::Incorrect => Some(messages.incorrect.as_str()),
            Feedback::Correct => Some(messages.correct.as_str()),
            Feedback::Occupied => messages.occupied.as_deref(),
        }
    }

    pub fn view(&self) -> RoomView {
        let slots = self
            .board
            .entries()
            .map(|(slot, held)| SlotView {
                id: slot.id.clone(),
                label: slot.label.clone(),
                item: held.and_then(|id| self.config.catalog.iter().find(|i| i.id == id).cloned()),
            })
            .collect();

        RoomView {
            room: self.config.id,
            slots,
            available: self.available_items().into_iter().cloned().collect(),
            feedback: self.feedback,
            message: self.message().map(str::to_string),
            unlocked: self.unlocked,
            unlock_code: self.config.unlock_code.clone().filter(|_| self.unlocked),
            next: self.destination().map(|d| d.path().to_string()),
            show_hints: self.show_hints,
            hints: if self.show_hints {
                self.config.hints.clone()
            } else {
                Vec::new()
            },
            attempts: self.attempts,
        }
    }
}

impl PuzzleRoom for MatchingRoom {
    fn id(&self) -> RoomId {
        self.config.id
    }

    fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    fn feedback(&self) -> Feedback {
        self.feedback
    }
}
