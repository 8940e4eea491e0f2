//! Progression state.

use serde::{Deserialize, Serialize};

use super::scene::{SceneId, WORKSHOP_PC_COUNT};

/// Which scenes have had their puzzle solved. A scene hands over to the
/// next one when a dialog ends with its flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressFlags {
    /// The old PC in the cemetery has been revived.
    pub cemetery_complete: bool,
    /// Every workshop machine has been repaired.
    pub workshop_complete: bool,
    /// The firewall has been beaten.
    pub server_room_complete: bool,
}

impl ProgressFlags {
    /// Returns true if `scene` may hand over to its successor. The intro
    /// always may; the end never does.
    #[must_use]
    pub fn is_complete(&self, scene: SceneId) -> bool {
        match scene {
            SceneId::Intro => true,
            SceneId::Cemetery => self.cemetery_complete,
            SceneId::Workshop => self.workshop_complete,
            SceneId::ServerRoom => self.server_room_complete,
            SceneId::Finished => false,
        }
    }

    /// Records that `scene`'s puzzle is solved.
    pub fn complete(&mut self, scene: SceneId) {
        match scene {
            SceneId::Cemetery => self.cemetery_complete = true,
            SceneId::Workshop => self.workshop_complete = true,
            SceneId::ServerRoom => self.server_room_complete = true,
            SceneId::Intro | SceneId::Finished => {}
        }
    }
}

/// Puzzle state local to the current scene. Cleared on every scene entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleState {
    cupboard_searched: bool,
    repaired: [bool; WORKSHOP_PC_COUNT as usize],
}

impl PuzzleState {
    /// Marks the cupboard searched. Returns false if it already was.
    pub fn search_cupboard(&mut self) -> bool {
        !std::mem::replace(&mut self.cupboard_searched, true)
    }

    /// Marks workshop machine `pc` (from 1) repaired. Returns false if it
    /// already was or does not exist.
    pub fn repair(&mut self, pc: u8) -> bool {
        let Some(slot) = usize::from(pc)
            .checked_sub(1)
            .and_then(|index| self.repaired.get_mut(index))
        else {
            return false;
        };
        !std::mem::replace(slot, true)
    }

    /// Number of distinct machines repaired.
    #[must_use]
    pub fn repaired_count(&self) -> usize {
        self.repaired.iter().filter(|done| **done).count()
    }

    /// Returns true once every workshop machine works.
    #[must_use]
    pub fn all_repaired(&self) -> bool {
        self.repaired.iter().all(|done| *done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_is_always_complete() {
        let flags = ProgressFlags::default();

        assert!(flags.is_complete(SceneId::Intro));
        assert!(!flags.is_complete(SceneId::Cemetery));
        assert!(!flags.is_complete(SceneId::Finished));
    }

    #[test]
    fn test_complete_sets_only_that_scene() {
        // Arrange
        let mut flags = ProgressFlags::default();

        // Act
        flags.complete(SceneId::Workshop);

        // Assert
        assert!(flags.is_complete(SceneId::Workshop));
        assert!(!flags.is_complete(SceneId::Cemetery));
        assert!(!flags.is_complete(SceneId::ServerRoom));
    }

    #[test]
    fn test_cupboard_is_searched_once() {
        let mut puzzles = PuzzleState::default();

        assert!(puzzles.search_cupboard());
        assert!(!puzzles.search_cupboard());
    }

    #[test]
    fn test_repairs_count_distinct_machines() {
        // Arrange
        let mut puzzles = PuzzleState::default();

        // Act
        let first = puzzles.repair(1);
        let again = puzzles.repair(1);
        puzzles.repair(2);

        // Assert
        assert!(first);
        assert!(!again);
        assert_eq!(puzzles.repaired_count(), 2);
        assert!(!puzzles.all_repaired());
        assert!(puzzles.repair(3));
        assert!(puzzles.all_repaired());
    }

    #[test]
    fn test_repair_of_unknown_machine_is_rejected() {
        let mut puzzles = PuzzleState::default();

        assert!(!puzzles.repair(0));
        assert!(!puzzles.repair(4));
        assert_eq!(puzzles.repaired_count(), 0);
    }
}
