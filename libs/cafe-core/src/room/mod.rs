//! Puzzle rooms and the engines that judge them.

pub mod matching;
pub mod mixing;

use rand::Rng;

use crate::catalog;
use crate::types::{Destination, Feedback, RoomId};

pub use matching::{AnswerKey, FeedbackMessages, MatchingRoom, RoomConfig, RoomView, SlotView, SubmitOutcome};
pub use mixing::{MixOutcome, MixingRoom, MixingView, Target, TargetView};

/// State every puzzle room exposes to the page that hosts it.
pub trait PuzzleRoom: Send + Sync {
    /// Room identifier.
    fn id(&self) -> RoomId;

    /// Terminal success state.
    fn is_unlocked(&self) -> bool;

    /// Feedback from the last gesture.
    fn feedback(&self) -> Feedback;

    /// Where the forward navigation leads, once unlocked.
    fn destination(&self) -> Option<Destination> {
        self.is_unlocked().then(|| self.id().destination())
    }
}

/// A running room of either engine.
#[derive(Debug, Clone)]
pub enum Room {
    Matching(MatchingRoom),
    Mixing(MixingRoom),
}

impl Room {
    /// Mount a fresh room session with its initial shuffle.
    pub fn open<R: Rng + ?Sized>(id: RoomId, rng: &mut R) -> Self {
        match id {
            RoomId::RoomOne => Self::Matching(MatchingRoom::new(catalog::room_one(), rng)),
            RoomId::RoomTwo => Self::Mixing(MixingRoom::new(
                catalog::monosaccharides(),
                catalog::disaccharide_targets(),
                rng,
            )),
            RoomId::RoomThree => Self::Matching(MatchingRoom::new(catalog::room_three(), rng)),
        }
    }
}

impl PuzzleRoom for Room {
    fn id(&self) -> RoomId {
        match self {
            Self::Matching(room) => room.id(),
            Self::Mixing(room) => room.id(),
        }
    }

    fn is_unlocked(&self) -> bool {
        match self {
            Self::Matching(room) => room.is_unlocked(),
            Self::Mixing(room) => room.is_unlocked(),
        }
    }

    fn feedback(&self) -> Feedback {
        match self {
            Self::Matching(room) => room.feedback(),
            Self::Mixing(room) => room.feedback(),
        }
    }
}
