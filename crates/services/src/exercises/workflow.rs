use std::sync::Arc;

use belajar_core::model::content::Exercise;
use belajar_core::model::{ExerciseCompletion, ExerciseId, ScoreRecord, UnitId};

use super::{ExerciseSession, ScoredSession};
use crate::content_service::ContentService;
use crate::error::ExerciseError;
use crate::progress_service::ProgressService;

/// An exercise together with a fresh session for it.
#[derive(Debug)]
pub struct ExerciseAttempt {
    pub exercise: Exercise,
    pub session: ExerciseSession,
    /// What the progress store recorded for this attempt, once it has.
    pub completion: Option<ExerciseCompletion>,
}

/// Starts exercise sessions and reports their results to the progress store.
#[derive(Clone)]
pub struct ExerciseLoopService {
    content: Arc<ContentService>,
    progress: Arc<ProgressService>,
}

impl ExerciseLoopService {
    #[must_use]
    pub fn new(content: Arc<ContentService>, progress: Arc<ProgressService>) -> Self {
        Self { content, progress }
    }

    /// Resolve an exercise and start a new attempt at it.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::Content` if the ids do not resolve, or the
    /// session start errors for unknown or empty exercises.
    pub fn start(&self, unit: UnitId, exercise_id: &ExerciseId) -> Result<ExerciseAttempt, ExerciseError> {
        let exercise = self.content.exercise(unit, exercise_id)?;
        let session = ExerciseSession::start(&exercise, &mut rand::rng())?;
        tracing::debug!(unit = %unit, exercise = %exercise_id, "exercise session started");
        Ok(ExerciseAttempt {
            exercise,
            session,
            completion: None,
        })
    }

    /// Take a finished session's report, ready to be written.
    ///
    /// The report leaves the session immediately and the pending write owns
    /// everything it needs, so it can finish after the session is gone.
    /// Returns `None` if the session is unfinished or already reported.
    pub fn take_completion<S: ScoredSession + ?Sized>(
        &self,
        session: &mut S,
    ) -> Option<PendingCompletion> {
        let score = session.take_report()?;
        Some(PendingCompletion {
            progress: Arc::clone(&self.progress),
            exercise_id: session.exercise_id().clone(),
            score,
        })
    }

    /// Report a finished session. Does nothing if it is unfinished or already reported.
    pub async fn record_completion<S: ScoredSession + ?Sized>(
        &self,
        session: &mut S,
    ) -> Option<ExerciseCompletion> {
        self.take_completion(session)?.save().await
    }
}

/// A final score taken from a session and not yet in the progress store.
pub struct PendingCompletion {
    progress: Arc<ProgressService>,
    pub exercise_id: ExerciseId,
    pub score: ScoreRecord,
}

impl PendingCompletion {
    pub async fn save(self) -> Option<ExerciseCompletion> {
        let completion = self
            .progress
            .complete_exercise(self.exercise_id.clone(), self.score.score, self.score.total)
            .await?;
        tracing::debug!(
            exercise = %self.exercise_id,
            xp = completion.xp_awarded,
            "exercise result recorded"
        );
        Some(completion)
    }
}
