use std::sync::Arc;

use belajar_core::model::content::{Exercise, Section, Unit, UnitSummary};
use belajar_core::model::{ExerciseId, LessonId, Progress, UnitId};
use belajar_core::unlock::UnitProgress;
use storage::repository::ContentRepository;

use crate::error::ContentError;

/// One unit on the map, combined with the learner's standing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMapEntry {
    pub summary: UnitSummary,
    pub unlocked: bool,
    pub progress: UnitProgress,
    pub has_content: bool,
    /// Lessons plus exercises in the unit, zero when it has no content.
    pub total_items: usize,
}

/// Resolves content identifiers, turning misses into `ContentError`.
#[derive(Clone)]
pub struct ContentService {
    repo: Arc<dyn ContentRepository>,
}

impl ContentService {
    #[must_use]
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    #[must_use]
    pub fn units(&self) -> Vec<UnitSummary> {
        self.repo.list_units()
    }

    /// # Errors
    ///
    /// Returns `ContentError::UnitNotFound` if the unit has no content.
    pub fn unit(&self, id: UnitId) -> Result<Arc<Unit>, ContentError> {
        self.repo.get_unit(id).ok_or(ContentError::UnitNotFound(id))
    }

    /// # Errors
    ///
    /// Returns `ContentError` if the unit or the lesson does not resolve.
    pub fn lesson(&self, unit: UnitId, lesson: &LessonId) -> Result<Section, ContentError> {
        self.unit(unit)?
            .section(lesson)
            .cloned()
            .ok_or_else(|| ContentError::LessonNotFound {
                unit,
                lesson: lesson.clone(),
            })
    }

    /// # Errors
    ///
    /// Returns `ContentError` if the unit or the exercise does not resolve.
    pub fn exercise(&self, unit: UnitId, exercise: &ExerciseId) -> Result<Exercise, ContentError> {
        self.unit(unit)?
            .exercise(exercise)
            .cloned()
            .ok_or_else(|| ContentError::ExerciseNotFound {
                unit,
                exercise: exercise.clone(),
            })
    }

    /// The unit index with unlock state and completion counts from `progress`.
    #[must_use]
    pub fn unit_map(&self, progress: &Progress) -> Vec<UnitMapEntry> {
        self.repo
            .list_units()
            .into_iter()
            .map(|summary| {
                let unit = self.repo.get_unit(summary.id);
                UnitMapEntry {
                    unlocked: progress.is_unit_unlocked(summary.id),
                    progress: progress.unit_progress(summary.id),
                    has_content: unit.is_some(),
                    total_items: unit.map_or(0, |unit| unit.sections.len() + unit.exercises.len()),
                    summary,
                }
            })
            .collect()
    }
}
