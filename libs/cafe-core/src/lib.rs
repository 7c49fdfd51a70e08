//! Core puzzle library for the Carbohydrate Café escape rooms.
//!
//! Provides:
//! - Assignment store for slot-matching rooms
//! - Matching engines (slot matching for Rooms 1/3, ordered mixing for Room 2)
//! - Shuffle utility used for display order
//! - Fixed game catalogs and answer keys
//! - "Build your dish" JSON export record

pub mod board;
pub mod catalog;
pub mod error;
pub mod export;
pub mod room;
pub mod shuffle;
pub mod types;

pub use board::SlotBoard;
pub use error::{PuzzleError, Result};
pub use export::{DishForm, DishRecord};
pub use room::{
    AnswerKey, MatchingRoom, MixOutcome, MixingRoom, MixingView, PuzzleRoom, Room, RoomConfig,
    RoomView, SubmitOutcome, Target,
};
pub use shuffle::shuffle;
pub use types::{Destination, Feedback, IncompletePolicy, Item, OccupancyPolicy, RoomId, Slot};
