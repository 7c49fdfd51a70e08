//! Fixed game data for the three puzzle rooms and the final dish page.

use std::collections::{BTreeMap, BTreeSet};

use crate::room::matching::{AnswerKey, FeedbackMessages, RoomConfig};
use crate::room::mixing::Target;
use crate::types::{IncompletePolicy, Item, OccupancyPolicy, RoomId, Slot};

/// Code revealed when Room 1 unlocks.
pub const ROOM_ONE_UNLOCK_CODE: &str = "GFG";

/// The three function cards that solve Room 3.
pub const ROOM_THREE_CORRECT: [&str; 3] = [
    "Fiber for digestive health",
    "Branched glucose chains",
    "Plant starch energy",
];

pub const ROOM_THREE_HINTS: [&str; 3] = [
    "Fiber helps maintain healthy digestion.",
    "Glycogen has branched glucose chains in animals.",
    "Starch stores energy in plants.",
];

/// Sugars offered on the final "build your dish" page.
pub const DISH_SUGAR_OPTIONS: [&str; 6] = [
    "Glucose", "Fructose", "Sucrose", "Lactose", "Maltose", "Galactose",
];

/// Simple sugars, decoys included.
pub fn monosaccharides() -> Vec<Item> {
    vec![
        Item::new("glucose", "Glucose", "🧠"),
        Item::new("fructose", "Fructose", "🍎"),
        Item::new("galactose", "Galactose", "🥛"),
        // Decoys
        Item::new("xylose", "Xylose", "❓"),
        Item::new("ribose", "Ribose", "🧬"),
        Item::new("mannose", "Mannose", "🔬"),
    ]
}

pub fn room_one_clues() -> Vec<Slot> {
    vec![
        Slot::new("brain_fuel", "Brain’s fuel"),
        Slot::new("fruit_sugar", "Fruit sugar"),
        Slot::new("milk_sugar", "Milk sugar"),
    ]
}

/// Room 1: match each monosaccharide to its function.
pub fn room_one() -> RoomConfig {
    let placements: BTreeMap<String, String> = [
        ("glucose", "brain_fuel"),
        ("fructose", "fruit_sugar"),
        ("galactose", "milk_sugar"),
    ]
    .into_iter()
    .map(|(item, slot)| (item.to_string(), slot.to_string()))
    .collect();

    RoomConfig {
        id: RoomId::RoomOne,
        catalog: monosaccharides(),
        slots: room_one_clues(),
        answer_key: AnswerKey::ExactPlacement(placements),
        occupancy: OccupancyPolicy::OverwriteOnDrop,
        on_incomplete: IncompletePolicy::Keep,
        unlock_code: Some(ROOM_ONE_UNLOCK_CODE.to_string()),
        hints: Vec::new(),
        messages: FeedbackMessages {
            incomplete: "Match a sugar to every function before submitting.".to_string(),
            incorrect: "One or more answers are incorrect! Cards have been reshuffled.".to_string(),
            correct: format!("Code Unlocked: {}", ROOM_ONE_UNLOCK_CODE),
            occupied: None,
        },
    }
}

/// Room 2 targets, in the order they must be formed.
pub fn disaccharide_targets() -> Vec<Target> {
    vec![
        Target::new("lactose", "Lactose", "🥛", ["glucose", "galactose"]),
        Target::new("maltose", "Maltose", "🍞", ["glucose", "glucose"]),
        Target::new("sucrose", "Sucrose", "🍬", ["glucose", "fructose"]),
    ]
}

/// Function cards for Room 3. The card text doubles as its id.
pub fn polysaccharide_functions() -> Vec<Item> {
    [
        ("Fiber for digestive health", "🥕"),
        ("Branched glucose chains", "🍗"),
        ("Plant starch energy", "🍎"),
        ("Water enhancer", "💧"),
        ("Enzyme breaker", "🛠️"),
        ("Energy booster", "⚡"),
        ("Skin moisturizer", "🧴"),
        ("Animal protein", "🥚"),
        ("Structural filler", "🧱"),
        ("Glucose transporter", "🚚"),
        ("Muscle builder", "💪"),
        ("Fat emulsifier", "🛢️"),
        ("Bone protector", "🦴"),
        ("Starch separator", "🧪"),
        ("Cell cleanser", "♻️"),
    ]
    .into_iter()
    .map(|(text, icon)| Item::new(text, text, icon))
    .collect()
}

pub fn room_three_slots() -> Vec<Slot> {
    (1..=3)
        .map(|n| Slot::new(&format!("slot_{}", n), "Drop function here"))
        .collect()
}

/// Room 3: pick the three real polysaccharide functions, in any order.
pub fn room_three() -> RoomConfig {
    let correct: BTreeSet<String> = ROOM_THREE_CORRECT.iter().map(|s| s.to_string()).collect();

    RoomConfig {
        id: RoomId::RoomThree,
        catalog: polysaccharide_functions(),
        slots: room_three_slots(),
        answer_key: AnswerKey::SetEquality(correct),
        occupancy: OccupancyPolicy::RejectIfOccupied,
        on_incomplete: IncompletePolicy::Reset,
        unlock_code: None,
        hints: ROOM_THREE_HINTS.iter().map(|s| s.to_string()).collect(),
        messages: FeedbackMessages {
            incomplete: "Please fill all three slots before submitting.".to_string(),
            incorrect: "One or more are incorrect. Try again!".to_string(),
            correct: "Correct! You've unlocked the next room.".to_string(),
            occupied: Some("That slot is already filled!".to_string()),
        },
    }
}
