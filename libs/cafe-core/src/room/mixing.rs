//! Ordered combination engine for Room 2.
//!
//! The learner drops two sugars into a beaker and mixes them. Only the first
//! unsolved target can be formed; a valid pair for a later target is still
//! refused. A mix has two phases so the host can hold the beaker closed for
//! a moment: `begin_mix` locks the selection, `finish_mix` judges it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::room::PuzzleRoom;
use crate::shuffle::shuffle;
use crate::types::{Feedback, Item, RoomId};

/// Sugars the beaker holds before a mix.
pub const BEAKER_CAPACITY: usize = 2;

/// A disaccharide to form from an unordered pair of sugars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub combo: [String; 2],
}

impl Target {
    pub fn new(id: &str, name: &str, emoji: &str, combo: [&str; 2]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            combo: combo.map(str::to_string),
        }
    }

    /// Order-insensitive comparison with a selected pair.
    pub fn matches(&self, pair: &[String]) -> bool {
        if pair.len() != self.combo.len() {
            return false;
        }
        let mut wanted: Vec<&str> = self.combo.iter().map(String::as_str).collect();
        let mut given: Vec<&str> = pair.iter().map(String::as_str).collect();
        wanted.sort_unstable();
        given.sort_unstable();
        wanted == given
    }
}

/// Result of a finished mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixOutcome {
    pub matched: bool,
    /// The target the pair was judged against.
    pub target: String,
    pub completed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub solved: bool,
    pub current: bool,
}

/// Snapshot of the mixing room for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixingView {
    pub room: RoomId,
    pub available: Vec<Item>,
    pub selection: Vec<Item>,
    pub targets: Vec<TargetView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_target: Option<String>,
    pub mixing: bool,
    pub feedback: Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Session state of the mixing room.
#[derive(Debug, Clone)]
pub struct MixingRoom {
    catalog: Vec<Item>,
    targets: Vec<Target>,
    selection: Vec<String>,
    solved: Vec<String>,
    mixing: bool,
    feedback: Feedback,
    message: Option<String>,
}

impl MixingRoom {
    pub fn new<R: Rng + ?Sized>(catalog: Vec<Item>, targets: Vec<Target>, rng: &mut R) -> Self {
        Self {
            catalog: shuffle(&catalog, rng),
            targets,
            selection: Vec::with_capacity(BEAKER_CAPACITY),
            solved: Vec::new(),
            mixing: false,
            feedback: Feedback::None,
            message: None,
        }
    }

    /// Index of the first unsolved target.
    pub fn cursor(&self) -> usize {
        self.solved.len()
    }

    pub fn current_target(&self) -> Option<&Target> {
        self.targets.get(self.cursor())
    }

    /// Names of formed targets, in order.
    pub fn solved(&self) -> &[String] {
        &self.solved
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_mixing(&self) -> bool {
        self.mixing
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_unlocked() {
            Err(PuzzleError::RoomUnlocked)
        } else if self.mixing {
            Err(PuzzleError::MixInProgress)
        } else {
            Ok(())
        }
    }

    /// Drop or tap a sugar into the beaker. The same sugar may go in twice.
    pub fn select(&mut self, item_id: &str) -> Result<()> {
        self.ensure_idle()?;
        if !self.catalog.iter().any(|item| item.id == item_id) {
            return Err(PuzzleError::UnknownItem(item_id.to_string()));
        }
        if self.selection.len() >= BEAKER_CAPACITY {
            return Err(PuzzleError::SelectionFull {
                capacity: BEAKER_CAPACITY,
            });
        }

        self.selection.push(item_id.to_string());
        self.feedback = Feedback::None;
        self.message = None;
        Ok(())
    }

    /// Empty the beaker.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.selection.clear();
        Ok(())
    }

    /// Close the beaker; no gesture is accepted until `finish_mix`.
    pub fn begin_mix(&mut self) -> Result<()> {
        self.ensure_idle()?;
        if self.selection.len() != BEAKER_CAPACITY {
            return Err(PuzzleError::SelectionIncomplete {
                required: BEAKER_CAPACITY,
                selected: self.selection.len(),
            });
        }
        self.mixing = true;
        Ok(())
    }

    /// Judge the closed beaker against the current target and empty it.
    pub fn finish_mix(&mut self) -> Result<MixOutcome> {
        if !self.mixing {
            return Err(PuzzleError::NoMixPending);
        }
        self.mixing = false;

        let selection = std::mem::take(&mut self.selection);
        let Some(target) = self.targets.get(self.cursor()).cloned() else {
            return Err(PuzzleError::RoomUnlocked);
        };

        let matched = target.matches(&selection);
        let message = if matched {
            self.solved.push(target.name.clone());
            self.feedback = Feedback::Correct;
            format!("Created {} {}", target.name, target.emoji)
        } else {
            self.feedback = Feedback::Incorrect;
            format!(
                "Incorrect or out-of-order combination. Find {} first!",
                target.name
            )
        };
        self.message = Some(message.clone());

        Ok(MixOutcome {
            matched,
            target: target.name,
            completed: self.is_unlocked(),
            message,
        })
    }

    /// Begin and finish a mix with no pause in between.
    pub fn mix(&mut self) -> Result<MixOutcome> {
        self.begin_mix()?;
        self.finish_mix()
    }

    fn item(&self, id: &str) -> Option<Item> {
        self.catalog.iter().find(|item| item.id == id).cloned()
    }

    pub fn view(&self) -> MixingView {
        let cursor = self.cursor();
        let targets = self
            .targets
            .iter()
            .enumerate()
            .map(|(idx, target)| TargetView {
                id: target.id.clone(),
                name: target.name.clone(),
                emoji: target.emoji.clone(),
                solved: idx < cursor,
                current: idx == cursor,
            })
            .collect();

        MixingView {
            room: RoomId::RoomTwo,
            available: self.catalog.clone(),
            selection: self.selection.iter().filter_map(|id| self.item(id)).collect(),
            targets,
            current_target: self.current_target().map(|t| t.name.clone()),
            mixing: self.mixing,
            feedback: self.feedback,
            message: self.message.clone(),
            unlocked: self.is_unlocked(),
            next: self.destination().map(|d| d.path().to_string()),
        }
    }
}

impl PuzzleRoom for MixingRoom {
    fn id(&self) -> RoomId {
        RoomId::RoomTwo
    }

    fn is_unlocked(&self) -> bool {
        self.solved.len() == self.targets.len()
    }

    fn feedback(&self) -> Feedback {
        self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{disaccharide_targets, monosaccharides};
    use crate::types::Destination;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn room() -> MixingRoom {
        let mut rng = StdRng::seed_from_u64(11);
        MixingRoom::new(monosaccharides(), disaccharide_targets(), &mut rng)
    }

    fn mix_pair(room: &mut MixingRoom, a: &str, b: &str) -> MixOutcome {
        room.select(a).unwrap();
        room.select(b).unwrap();
        room.mix().unwrap()
    }

    #[test]
    fn test_targets_solved_in_order_unlock() {
        let mut room = room();
        assert_eq!(room.current_target().unwrap().name, "Lactose");

        assert!(mix_pair(&mut room, "galactose", "glucose").matched);
        assert_eq!(room.cursor(), 1);
        assert!(mix_pair(&mut room, "glucose", "glucose").matched);
        let last = mix_pair(&mut room, "fructose", "glucose");

        assert!(last.matched);
        assert!(last.completed);
        assert!(room.is_unlocked());
        assert_eq!(room.solved(), &["Lactose", "Maltose", "Sucrose"]);
        assert_eq!(room.destination(), Some(Destination::RoomThree));
        assert_eq!(room.view().next.as_deref(), Some("/roomThree"));
    }

    #[test]
    fn test_future_target_rejected_out_of_order() {
        let mut room = room();

        let outcome = mix_pair(&mut room, "glucose", "fructose");

        assert!(!outcome.matched);
        assert_eq!(outcome.target, "Lactose");
        assert_eq!(
            outcome.message,
            "Incorrect or out-of-order combination. Find Lactose first!"
        );
        assert_eq!(room.cursor(), 0);
        assert!(room.selection().is_empty());
        assert_eq!(room.feedback(), Feedback::Incorrect);
    }

    #[test]
    fn test_wrong_mix_keeps_progress() {
        let mut room = room();
        mix_pair(&mut room, "glucose", "galactose");

        let outcome = mix_pair(&mut room, "xylose", "ribose");

        assert!(!outcome.matched);
        assert_eq!(room.solved(), &["Lactose"]);
        assert_eq!(room.current_target().unwrap().name, "Maltose");
    }

    #[test]
    fn test_beaker_holds_two() {
        let mut room = room();
        room.select("glucose").unwrap();
        room.select("glucose").unwrap();

        assert_eq!(
            room.select("fructose"),
            Err(PuzzleError::SelectionFull { capacity: 2 })
        );
        assert_eq!(room.selection().len(), 2);
    }

    #[test]
    fn test_mix_needs_two() {
        let mut room = room();
        room.select("glucose").unwrap();
        assert_eq!(
            room.mix(),
            Err(PuzzleError::SelectionIncomplete {
                required: 2,
                selected: 1
            })
        );
        assert!(!room.is_mixing());
    }

    #[test]
    fn test_gestures_blocked_while_mixing() {
        let mut room = room();
        room.select("glucose").unwrap();
        room.select("galactose").unwrap();
        room.begin_mix().unwrap();

        assert_eq!(room.begin_mix(), Err(PuzzleError::MixInProgress));
        assert_eq!(room.select("ribose"), Err(PuzzleError::MixInProgress));
        assert_eq!(room.clear_selection(), Err(PuzzleError::MixInProgress));
        assert!(room.view().mixing);

        let outcome = room.finish_mix().unwrap();
        assert!(outcome.matched);
        assert_eq!(room.finish_mix(), Err(PuzzleError::NoMixPending));
    }

    #[test]
    fn test_select_clears_message() {
        let mut room = room();
        mix_pair(&mut room, "xylose", "xylose");
        assert!(room.message().is_some());

        room.select("glucose").unwrap();
        assert_eq!(room.message(), None);
        assert_eq!(room.feedback(), Feedback::None);

        room.clear_selection().unwrap();
        assert!(room.selection().is_empty());
    }

    #[test]
    fn test_unknown_sugar_and_terminal_state() {
        let mut room = room();
        assert_eq!(
            room.select("sucrose"),
            Err(PuzzleError::UnknownItem("sucrose".to_string()))
        );

        mix_pair(&mut room, "glucose", "galactose");
        mix_pair(&mut room, "glucose", "glucose");
        mix_pair(&mut room, "glucose", "fructose");
        assert_eq!(room.select("glucose"), Err(PuzzleError::RoomUnlocked));
    }

    #[test]
    fn test_target_match_is_order_insensitive() {
        let target = Target::new("sucrose", "Sucrose", "", ["glucose", "fructose"]);
        assert!(target.matches(&["fructose".to_string(), "glucose".to_string()]));
        assert!(!target.matches(&["glucose".to_string(), "glucose".to_string()]));
        assert!(!target.matches(&["glucose".to_string()]));
    }

    #[test]
    fn test_view_marks_current_target() {
        let mut room = room();
        mix_pair(&mut room, "glucose", "galactose");
        let view = room.view();

        let flags: Vec<(bool, bool)> = view.targets.iter().map(|t| (t.solved, t.current)).collect();
        assert_eq!(flags, vec![(true, false), (false, true), (false, false)]);
        assert_eq!(view.current_target.as_deref(), Some("Maltose"));
        assert_eq!(view.available.len(), 6);
    }
}
