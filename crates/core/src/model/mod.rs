pub mod content;
mod ids;
mod progress;
mod results;

pub use ids::{ExerciseId, LessonId, ParseIdError, UnitId, WordId};
pub use progress::{
    EXERCISE_MAX_XP, ExerciseCompletion, LESSON_XP, Progress, ScoreRecord, VOCAB_XP, exercise_xp,
    next_streak,
};
pub use results::{ResultSummary, ResultTier};
