//! Shared error types for the services crate.

use thiserror::Error;

use belajar_core::model::{ExerciseId, LessonId, UnitId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// An identifier that does not resolve in the bundled content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),
    #[error("lesson {lesson} not found in unit {unit}")]
    LessonNotFound { unit: UnitId, lesson: LessonId },
    #[error("exercise {exercise} not found in unit {unit}")]
    ExerciseNotFound { unit: UnitId, exercise: ExerciseId },
}

/// Errors emitted when starting an exercise session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("unknown exercise type: {kind}")]
    UnknownType { kind: String },
    #[error("exercise {0} has nothing to answer")]
    Empty(ExerciseId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
