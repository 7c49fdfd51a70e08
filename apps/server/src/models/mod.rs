//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from cafe-core
pub use cafe_core::export::{DishForm, DishRecord};
pub use cafe_core::room::{MixOutcome, MixingView, RoomView, SubmitOutcome};
pub use cafe_core::types::{Feedback, Item, RoomId, Slot};

/// Room state in whichever shape its engine produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomSnapshot {
    Matching(RoomView),
    Mixing(MixingView),
}

/// A session and its current room state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub room: RoomId,
    pub view: RoomSnapshot,
}

/// Drop an item on a slot (Rooms 1 and 3)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    pub slot: String,
    pub item: String,
}

/// Clear a slot (Rooms 1 and 3)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnassignRequest {
    pub slot: String,
}

/// Put a sugar into the beaker (Room 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRequest {
    pub item: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureResponse {
    /// Item pushed back to the pool by the gesture, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned: Option<String>,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintsResponse {
    pub show_hints: bool,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixResponse {
    pub outcome: MixOutcome,
    pub session: SessionResponse,
}

/// Choices for the final dish page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishOptionsResponse {
    pub sugars: Vec<String>,
}
