//! Assignment store: which item sits in which slot.
//!
//! The board holds at most one item per slot and never holds the same item in
//! two slots. Assigning an item that already sits elsewhere moves it.

use crate::error::{PuzzleError, Result};
use crate::types::{Item, OccupancyPolicy, Slot};

/// Slot-to-item assignment for one puzzle room.
#[derive(Debug, Clone)]
pub struct SlotBoard {
    slots: Vec<Slot>,
    assigned: Vec<Option<String>>,
}

impl SlotBoard {
    /// Create an empty board over a fixed slot catalog.
    pub fn new(slots: Vec<Slot>) -> Self {
        let assigned = vec![None; slots.len()];
        Self { slots, assigned }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn index_of(&self, slot_id: &str) -> Result<usize> {
        self.slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or_else(|| PuzzleError::UnknownSlot(slot_id.to_string()))
    }

    /// Put `item_id` into `slot_id`.
    ///
    /// Returns the item that was displaced from the slot, if any. Under
    /// [`OccupancyPolicy::RejectIfOccupied`] a filled slot refuses the drop
    /// and the board is left untouched.
    pub fn assign(
        &mut self,
        slot_id: &str,
        item_id: &str,
        policy: OccupancyPolicy,
    ) -> Result<Option<String>> {
        let idx = self.index_of(slot_id)?;

        if self.assigned[idx].as_deref() == Some(item_id) {
            return Ok(None);
        }

        if policy == OccupancyPolicy::RejectIfOccupied && self.assigned[idx].is_some() {
            return Err(PuzzleError::SlotOccupied {
                slot: slot_id.to_string(),
            });
        }

        // Move semantics: lift the item out of wherever it was.
        for held in self.assigned.iter_mut() {
            if held.as_deref() == Some(item_id) {
                *held = None;
            }
        }

        Ok(self.assigned[idx].replace(item_id.to_string()))
    }

    /// Empty a slot, returning the item it held.
    pub fn unassign(&mut self, slot_id: &str) -> Result<Option<String>> {
        let idx = self.index_of(slot_id)?;
        Ok(self.assigned[idx].take())
    }

    /// Item currently in a slot.
    pub fn item_in(&self, slot_id: &str) -> Option<&str> {
        let idx = self.slots.iter().position(|s| s.id == slot_id)?;
        self.assigned[idx].as_deref()
    }

    /// Slot currently holding an item.
    pub fn slot_of(&self, item_id: &str) -> Option<&str> {
        self.slots
            .iter()
            .zip(&self.assigned)
            .find(|(_, held)| held.as_deref() == Some(item_id))
            .map(|(slot, _)| slot.id.as_str())
    }

    /// True when every slot holds an item.
    pub fn is_complete(&self) -> bool {
        self.assigned.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.assigned.iter().filter(|held| held.is_some()).count()
    }

    /// Items currently placed, in slot order.
    pub fn assigned_items(&self) -> impl Iterator<Item = &str> {
        self.assigned.iter().filter_map(|held| held.as_deref())
    }

    /// Every slot paired with its current occupant.
    pub fn entries(&self) -> impl Iterator<Item = (&Slot, Option<&str>)> {
        self.slots
            .iter()
            .zip(self.assigned.iter().map(|held| held.as_deref()))
    }

    /// Catalog items not placed in any slot, in catalog order.
    pub fn available_items<'a>(&self, catalog: &'a [Item]) -> Vec<&'a Item> {
        catalog
            .iter()
            .filter(|item| self.slot_of(&item.id).is_none())
            .collect()
    }

    pub fn clear(&mut self) {
        self.assigned.iter_mut().for_each(|held| *held = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn board() -> SlotBoard {
        SlotBoard::new(vec![
            Slot::new("a", "A"),
            Slot::new("b", "B"),
            Slot::new("c", "C"),
        ])
    }

    #[test]
    fn test_assign_and_complete() {
        let mut board = board();
        assert!(!board.is_complete());

        board.assign("a", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();
        board.assign("b", "y", OccupancyPolicy::OverwriteOnDrop).unwrap();
        assert!(!board.is_complete());
        board.assign("c", "z", OccupancyPolicy::OverwriteOnDrop).unwrap();

        assert!(board.is_complete());
        assert_eq!(board.item_in("b"), Some("y"));
        assert_eq!(board.slot_of("z"), Some("c"));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_assigning_placed_item_moves_it() {
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();
        board.assign("b", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();

        assert_eq!(board.item_in("a"), None);
        assert_eq!(board.item_in("b"), Some("x"));
    }

    #[test]
    fn test_overwrite_returns_displaced_item() {
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();
        let displaced = board
            .assign("a", "y", OccupancyPolicy::OverwriteOnDrop)
            .unwrap();

        assert_eq!(displaced.as_deref(), Some("x"));
        assert_eq!(board.slot_of("x"), None);
        assert_eq!(board.item_in("a"), Some("y"));
    }

    #[test]
    fn test_reject_if_occupied_leaves_board_alone() {
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::RejectIfOccupied).unwrap();
        board.assign("b", "y", OccupancyPolicy::RejectIfOccupied).unwrap();

        let err = board
            .assign("a", "y", OccupancyPolicy::RejectIfOccupied)
            .unwrap_err();

        assert_eq!(err, PuzzleError::SlotOccupied { slot: "a".to_string() });
        assert_eq!(board.item_in("a"), Some("x"));
        assert_eq!(board.item_in("b"), Some("y"));
    }

    #[test]
    fn test_redropping_same_item_is_noop() {
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::RejectIfOccupied).unwrap();
        let displaced = board
            .assign("a", "x", OccupancyPolicy::RejectIfOccupied)
            .unwrap();
        assert_eq!(displaced, None);
        assert_eq!(board.item_in("a"), Some("x"));
    }

    #[test]
    fn test_unknown_slot() {
        let mut board = board();
        assert_eq!(
            board.assign("nope", "x", OccupancyPolicy::OverwriteOnDrop),
            Err(PuzzleError::UnknownSlot("nope".to_string()))
        );
        assert!(board.unassign("nope").is_err());
    }

    #[test]
    fn test_unassign_returns_item_to_pool() {
        let catalog = vec![Item::new("x", "X", ""), Item::new("y", "Y", "")];
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();

        let ids: Vec<_> = board.available_items(&catalog).iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["y".to_string()]);

        assert_eq!(board.unassign("a").unwrap().as_deref(), Some("x"));
        assert_eq!(board.available_items(&catalog).len(), 2);
        assert_eq!(board.unassign("a").unwrap(), None);
    }

    #[test]
    fn test_item_never_in_two_slots() {
        let mut rng = StdRng::seed_from_u64(99);
        let slots = ["a", "b", "c"];
        let items = ["p", "q", "r", "s", "t"];
        let mut board = board();

        for _ in 0..1000 {
            let slot = slots[rng.gen_range(0..slots.len())];
            let item = items[rng.gen_range(0..items.len())];
            let policy = if rng.gen_bool(0.5) {
                OccupancyPolicy::OverwriteOnDrop
            } else {
                OccupancyPolicy::RejectIfOccupied
            };

            if rng.gen_bool(0.1) {
                board.unassign(slot).unwrap();
            } else {
                let _ = board.assign(slot, item, policy);
            }

            let placed: Vec<&str> = board.assigned_items().collect();
            let unique: HashSet<&str> = placed.iter().copied().collect();
            assert_eq!(placed.len(), unique.len());
        }
    }

    #[test]
    fn test_clear() {
        let mut board = board();
        board.assign("a", "x", OccupancyPolicy::OverwriteOnDrop).unwrap();
        board.clear();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.entries().filter(|(_, held)| held.is_some()).count(), 0);
    }
}
