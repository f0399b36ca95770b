use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Face orientation of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Down,
    Up,
}

impl Default for Face {
    fn default() -> Self {
        Self::Down
    }
}

/// One occupied grid cell, owned exclusively by the match engine.
///
/// The slot carries the identity *name* only; artwork is resolved through the
/// catalog so a missing catalog entry never affects match logic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    name: String,
    face: Face,
    matched: bool,
}

impl CardSlot {
    pub fn new(name: String) -> Self {
        Self {
            name,
            face: Face::Down,
            matched: false,
        }
    }

    pub(crate) fn restored(name: String, matched: bool) -> Self {
        Self {
            name,
            // matched cards stay revealed across a restore
            face: if matched { Face::Up } else { Face::Down },
            matched,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Whether a selection on this slot can open it.
    pub fn is_selectable(&self) -> bool {
        !self.matched && self.face == Face::Down
    }

    pub(crate) fn flip_up(&mut self) {
        self.face = Face::Up;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face = Face::Down;
    }

    /// `Matched` is terminal for the rest of the game.
    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.face = Face::Up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn new_slot_starts_face_down_and_selectable() {
        let slot = CardSlot::new("ace".to_string());
        assert_eq!(slot.face(), Face::Down);
        assert!(!slot.is_matched());
        assert!(slot.is_selectable());
    }

    #[test]
    fn matched_slot_is_face_up_and_not_selectable() {
        let mut slot = CardSlot::new("ace".to_string());
        slot.flip_up();
        slot.mark_matched();
        assert_eq!(slot.face(), Face::Up);
        assert!(slot.is_matched());
        assert!(!slot.is_selectable());
    }

    #[test]
    fn restored_matched_slot_is_face_up() {
        let slot = CardSlot::restored("ace".to_string(), true);
        assert_eq!(slot.face(), Face::Up);

        let slot = CardSlot::restored("ace".to_string(), false);
        assert_eq!(slot.face(), Face::Down);
    }
}
