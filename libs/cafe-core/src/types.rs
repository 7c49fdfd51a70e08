//! Core types shared by every puzzle room.

use serde::{Deserialize, Serialize};

/// A draggable or selectable game token (a sugar, a function card).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl Item {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A fixed drop target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub label: String,
}

impl Slot {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Feedback shown to the learner after the last gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    None,
    Incomplete,
    Incorrect,
    Correct,
    /// A drop was refused because the slot already holds an item.
    Occupied,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::None
    }
}

/// What happens when an item is dropped on a slot that already holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyPolicy {
    /// Last drop wins; the previous occupant returns to the pool.
    OverwriteOnDrop,
    /// The drop is refused and nothing changes.
    RejectIfOccupied,
}

/// What a submission with empty slots does to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompletePolicy {
    /// Leave the partial assignment in place.
    Keep,
    /// Clear every slot and reshuffle the pool.
    Reset,
}

/// Puzzle rooms, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    RoomOne,
    RoomTwo,
    RoomThree,
}

impl RoomId {
    /// Get the room name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoomOne => "room_one",
            Self::RoomTwo => "room_two",
            Self::RoomThree => "room_three",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "room_one" => Some(Self::RoomOne),
            "room_two" => Some(Self::RoomTwo),
            "room_three" => Some(Self::RoomThree),
            _ => None,
        }
    }

    /// Page a room unlocks once solved.
    pub fn destination(&self) -> Destination {
        match self {
            Self::RoomOne => Destination::RoomTwo,
            Self::RoomTwo => Destination::RoomThree,
            Self::RoomThree => Destination::FinalRoom,
        }
    }
}

/// Forward navigation target exposed by an unlocked room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    RoomTwo,
    RoomThree,
    FinalRoom,
}

impl Destination {
    /// Client-side route of the destination page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::RoomTwo => "/roomTwo",
            Self::RoomThree => "/roomThree",
            Self::FinalRoom => "/lastRoom",
        }
    }
}
