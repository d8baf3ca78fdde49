//! The progress store: owns the learner's record and its persistence lifecycle.

use std::sync::{Arc, Mutex, PoisonError};

use belajar_core::Clock;
use belajar_core::model::{ExerciseCompletion, ExerciseId, LessonId, Progress, UnitId, WordId};
use belajar_core::unlock::UnitProgress;
use storage::repository::BlobRepository;

/// Storage key of the serialized progress record.
pub const PROGRESS_STORAGE_KEY: &str = "belajar_progress";

/// Holds the committed progress record and writes it through on every change.
///
/// Storage failures never surface to callers: a failed load starts from the
/// default record and a failed save keeps the in-memory record authoritative
/// for the rest of the session.
///
/// Mutations and `reset` hold `writes` until their storage call returns, so
/// saves land in commit order and the stored copy ends as the last committed
/// record.
pub struct ProgressService {
    clock: Clock,
    blobs: Arc<dyn BlobRepository>,
    state: Mutex<Progress>,
    writes: tokio::sync::Mutex<()>,
}

impl ProgressService {
    /// Load the stored record, falling back to defaults if it is missing or unreadable.
    pub async fn load(clock: Clock, blobs: Arc<dyn BlobRepository>) -> Self {
        let progress = match blobs.get_blob(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => Progress::from_stored_json(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored progress is corrupt, starting fresh");
                Progress::default()
            }),
            Ok(None) => Progress::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load progress, starting fresh");
                Progress::default()
            }
        };

        tracing::debug!(
            xp = progress.xp(),
            streak = progress.streak(),
            lessons = progress.completed_lessons().len(),
            exercises = progress.completed_exercises().len(),
            "progress loaded"
        );

        Self {
            clock,
            blobs,
            state: Mutex::new(progress),
            writes: tokio::sync::Mutex::new(()),
        }
    }

    /// A copy of the committed record.
    #[must_use]
    pub fn snapshot(&self) -> Progress {
        self.state().clone()
    }

    /// Mark a lesson complete. Returns `false` if it already was.
    pub async fn complete_lesson(&self, id: LessonId) -> bool {
        let today = self.clock.today();
        let _write = self.writes.lock().await;
        let Some(((), snapshot)) = self.commit(|progress| {
            progress
                .complete_lesson(id.clone(), today)
                .then_some(())
        }) else {
            return false;
        };
        tracing::debug!(lesson = %id, xp = snapshot.xp(), "lesson completed");
        self.persist(&snapshot).await;
        true
    }

    /// Record an exercise result. Returns `None` when `total` is zero.
    pub async fn complete_exercise(
        &self,
        id: ExerciseId,
        score: u32,
        total: u32,
    ) -> Option<ExerciseCompletion> {
        let today = self.clock.today();
        let _write = self.writes.lock().await;
        let Some((completion, snapshot)) =
            self.commit(|progress| progress.complete_exercise(id.clone(), score, total, today))
        else {
            tracing::debug!(exercise = %id, score, total, "ignored exercise result with empty total");
            return None;
        };

        tracing::debug!(
            exercise = %id,
            score,
            total,
            first = completion.first_completion,
            xp_awarded = completion.xp_awarded,
            "exercise completed"
        );
        self.persist(&snapshot).await;
        Some(completion)
    }

    /// Mark a vocabulary item mastered. Returns `false` if it already was.
    pub async fn master_vocab(&self, id: WordId) -> bool {
        let _write = self.writes.lock().await;
        let Some(((), snapshot)) =
            self.commit(|progress| progress.master_vocab(id.clone()).then_some(()))
        else {
            return false;
        };
        tracing::debug!(word = %id, "vocabulary mastered");
        self.persist(&snapshot).await;
        true
    }

    #[must_use]
    pub fn unit_progress(&self, unit: UnitId) -> UnitProgress {
        self.state().unit_progress(unit)
    }

    #[must_use]
    pub fn is_unit_unlocked(&self, unit: UnitId) -> bool {
        self.state().is_unit_unlocked(unit)
    }

    /// Replace the record with defaults and erase the stored copy.
    pub async fn reset(&self) {
        let _write = self.writes.lock().await;
        *self.state() = Progress::default();
        if let Err(err) = self.blobs.delete_blob(PROGRESS_STORAGE_KEY).await {
            tracing::warn!(error = %err, "failed to erase stored progress");
        }
        tracing::info!("progress reset");
    }

    fn state(&self) -> std::sync::MutexGuard<'_, Progress> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` under the lock; returns its result and the new snapshot if it changed anything.
    fn commit<R>(&self, change: impl FnOnce(&mut Progress) -> Option<R>) -> Option<(R, Progress)> {
        let mut guard = self.state();
        let result = change(&mut guard)?;
        Some((result, guard.clone()))
    }

    async fn persist(&self, snapshot: &Progress) {
        let raw = match snapshot.to_stored_json() {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize progress");
                return;
            }
        };
        if let Err(err) = self.blobs.put_blob(PROGRESS_STORAGE_KEY, &raw).await {
            tracing::warn!(error = %err, "failed to save progress, keeping it in memory only");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belajar_core::model::{LESSON_XP, ScoreRecord};
    use belajar_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    async fn service() -> (ProgressService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let service = ProgressService::load(fixed_clock(), Arc::new(repo.clone())).await;
        (service, repo)
    }

    #[tokio::test]
    async fn every_mutation_is_written_through() {
        let (service, repo) = service().await;
        assert!(service.complete_lesson(LessonId::new("1-1")).await);

        let raw = repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap().unwrap();
        let stored = Progress::from_stored_json(&raw).unwrap();
        assert_eq!(stored, service.snapshot());
        assert_eq!(stored.xp(), LESSON_XP);
    }

    #[tokio::test]
    async fn noop_mutation_does_not_write() {
        let (service, repo) = service().await;
        assert!(service.complete_lesson(LessonId::new("1-1")).await);
        repo.delete_blob(PROGRESS_STORAGE_KEY).await.unwrap();

        assert!(!service.complete_lesson(LessonId::new("1-1")).await);
        assert_eq!(repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn zero_total_exercise_is_ignored() {
        let (service, repo) = service().await;
        let result = service
            .complete_exercise(ExerciseId::new("ex-1-1"), 0, 0)
            .await;
        assert!(result.is_none());
        assert_eq!(service.snapshot(), Progress::default());
        assert_eq!(repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn exercise_score_is_overwritten() {
        let (service, _repo) = service().await;
        let id = ExerciseId::new("ex-1-1");
        service.complete_exercise(id.clone(), 1, 2).await.unwrap();
        service.complete_exercise(id.clone(), 2, 2).await.unwrap();

        let snapshot = service.snapshot();
        assert_eq!(snapshot.xp(), 10);
        assert_eq!(snapshot.exercise_score(&id), Some(ScoreRecord::new(2, 2)));
    }

    #[tokio::test]
    async fn vocab_mastery_persists() {
        let (service, repo) = service().await;
        assert!(service.master_vocab(WordId::new("makan")).await);
        assert!(!service.master_vocab(WordId::new("makan")).await);

        let reloaded = ProgressService::load(fixed_clock(), Arc::new(repo)).await;
        assert!(reloaded.snapshot().is_vocab_mastered(&WordId::new("makan")));
    }
}
