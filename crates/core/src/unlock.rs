//! Unit access policy.
//!
//! A unit opens once its immediate predecessor reaches a completion threshold.
//! Only the predecessor is consulted; earlier units do not matter.

use crate::model::UnitId;

/// Completed lessons in the predecessor needed to unlock a unit.
pub const LESSONS_TO_UNLOCK: usize = 3;
/// Completed exercises in the predecessor needed to unlock a unit.
pub const EXERCISES_TO_UNLOCK: usize = 2;

/// Completed item counts within one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitProgress {
    pub lessons: usize,
    pub exercises: usize,
}

impl UnitProgress {
    /// True when this unit has done enough to open the next one.
    #[must_use]
    pub fn unlocks_next(&self) -> bool {
        self.lessons >= LESSONS_TO_UNLOCK || self.exercises >= EXERCISES_TO_UNLOCK
    }
}

/// Decide whether `unit` is accessible, given a lookup of per-unit progress.
#[must_use]
pub fn is_unit_unlocked(unit: UnitId, progress_of: impl FnOnce(UnitId) -> UnitProgress) -> bool {
    if unit == UnitId::FIRST {
        return true;
    }
    unit.previous()
        .is_some_and(|previous| progress_of(previous).unlocks_next())
}
