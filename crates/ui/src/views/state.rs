use services::{ContentError, ExerciseError};

/// What a view renders in place of its content when a lookup fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnitNotFound,
    LessonNotFound,
    ExerciseNotFound,
    UnknownExerciseType,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::UnitNotFound => "We're still working on this unit's content.",
            Self::LessonNotFound => "Section not found.",
            Self::ExerciseNotFound => "Exercise not found.",
            Self::UnknownExerciseType => "Unknown exercise type.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&ContentError> for ViewError {
    fn from(err: &ContentError) -> Self {
        match err {
            ContentError::UnitNotFound(_) => Self::UnitNotFound,
            ContentError::LessonNotFound { .. } => Self::LessonNotFound,
            ContentError::ExerciseNotFound { .. } => Self::ExerciseNotFound,
            _ => Self::Unknown,
        }
    }
}

impl From<ContentError> for ViewError {
    fn from(err: ContentError) -> Self {
        Self::from(&err)
    }
}

impl From<ExerciseError> for ViewError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::Content(ContentError::UnitNotFound(_)) => Self::ExerciseNotFound,
            ExerciseError::Content(content) => Self::from(&content),
            // An exercise with nothing to answer cannot be run either.
            ExerciseError::UnknownType { .. } | ExerciseError::Empty(_) => {
                Self::UnknownExerciseType
            }
            _ => Self::Unknown,
        }
    }
}
