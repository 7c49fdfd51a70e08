//! Request bodies for the game API.

use serde_json::{json, Value};

/// Room 1 board that solves the room.
pub const ROOM_ONE_CORRECT: [(&str, &str); 3] = [
    ("brain_fuel", "glucose"),
    ("fruit_sugar", "fructose"),
    ("milk_sugar", "galactose"),
];

/// Room 1 board with glucose and fructose swapped.
pub const ROOM_ONE_SWAPPED: [(&str, &str); 3] = [
    ("brain_fuel", "fructose"),
    ("fruit_sugar", "glucose"),
    ("milk_sugar", "galactose"),
];

pub const ROOM_THREE_SLOTS: [&str; 3] = ["slot_1", "slot_2", "slot_3"];

pub const ROOM_THREE_CORRECT: [&str; 3] = [
    "Fiber for digestive health",
    "Branched glucose chains",
    "Plant starch energy",
];

pub fn assign_request(slot: &str, item: &str) -> Value {
    json!({ "slot": slot, "item": item })
}

pub fn unassign_request(slot: &str) -> Value {
    json!({ "slot": slot })
}

pub fn select_request(item: &str) -> Value {
    json!({ "item": item })
}

pub fn dish_request(dish_name: &str, sugar1: &str, sugar2: &str, description: &str) -> Value {
    json!({
        "dish_name": dish_name,
        "sugar1": sugar1,
        "sugar2": sugar2,
        "description": description
    })
}
