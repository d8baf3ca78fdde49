use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use belajar_core::model::{ExerciseId, LESSON_XP, LessonId, Progress, UnitId};
use belajar_core::time::fixed_now;
use chrono::Duration;
use services::{Clock, PROGRESS_STORAGE_KEY, ProgressService};
use storage::repository::{BlobRepository, InMemoryRepository, StorageError};

/// Blob store whose reads and writes always fail.
struct BrokenRepository;

#[async_trait]
impl BlobRepository for BrokenRepository {
    async fn get_blob(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("disk unplugged".into()))
    }

    async fn put_blob(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk unplugged".into()))
    }

    async fn delete_blob(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk unplugged".into()))
    }
}

/// In-memory blob store whose first write stalls, like a busy disk.
struct StallingRepository {
    inner: InMemoryRepository,
    stalled: AtomicBool,
}

impl StallingRepository {
    fn new(inner: InMemoryRepository) -> Self {
        Self {
            inner,
            stalled: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl BlobRepository for StallingRepository {
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_blob(key).await
    }

    async fn put_blob(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
        self.inner.put_blob(key, value).await
    }

    async fn delete_blob(&self, key: &str) -> Result<(), StorageError> {
        self.inner.delete_blob(key).await
    }
}

fn clock_on_day(offset: i64) -> Clock {
    Clock::fixed(fixed_now() + Duration::days(offset))
}

#[tokio::test]
async fn distinct_lessons_award_xp_once_each() {
    let repo = Arc::new(InMemoryRepository::new());
    let progress = ProgressService::load(clock_on_day(0), repo).await;

    for id in ["1-1", "1-2", "1-1", "1-3", "1-2"] {
        progress.complete_lesson(LessonId::new(id)).await;
    }

    let snapshot = progress.snapshot();
    assert_eq!(snapshot.completed_lessons().len(), 3);
    assert_eq!(snapshot.xp(), 3 * LESSON_XP);
}

#[tokio::test]
async fn repeat_exercise_keeps_first_award_and_latest_score() {
    let repo = Arc::new(InMemoryRepository::new());
    let progress = ProgressService::load(clock_on_day(0), repo).await;
    let id = ExerciseId::new("ex-1-1");

    let first = progress.complete_exercise(id.clone(), 1, 4).await.unwrap();
    let second = progress.complete_exercise(id.clone(), 3, 3).await.unwrap();

    assert_eq!(first.xp_awarded, 5);
    assert_eq!(second.xp_awarded, 0);
    let snapshot = progress.snapshot();
    assert_eq!(snapshot.xp(), 5);
    let score = snapshot.exercise_score(&id).unwrap();
    assert_eq!((score.score, score.total), (3, 3));
}

#[tokio::test]
async fn streak_follows_calendar_days_across_reloads() {
    let repo = InMemoryRepository::new();

    let day0 = ProgressService::load(clock_on_day(0), Arc::new(repo.clone())).await;
    day0.complete_lesson(LessonId::new("1-1")).await;
    day0.complete_exercise(ExerciseId::new("ex-1-1"), 1, 1).await;
    assert_eq!(day0.snapshot().streak(), 1);

    let day1 = ProgressService::load(clock_on_day(1), Arc::new(repo.clone())).await;
    day1.complete_lesson(LessonId::new("1-2")).await;
    assert_eq!(day1.snapshot().streak(), 2);

    let day3 = ProgressService::load(clock_on_day(3), Arc::new(repo.clone())).await;
    day3.complete_exercise(ExerciseId::new("ex-1-1"), 0, 1).await;
    assert_eq!(day3.snapshot().streak(), 1);
    assert_eq!(
        day3.snapshot().last_activity_date(),
        Some(clock_on_day(3).today())
    );
}

#[tokio::test]
async fn unlocking_follows_predecessor_thresholds() {
    let repo = Arc::new(InMemoryRepository::new());
    let progress = ProgressService::load(clock_on_day(0), repo).await;

    assert!(progress.is_unit_unlocked(UnitId::new(1)));
    assert!(!progress.is_unit_unlocked(UnitId::new(2)));

    progress.complete_exercise(ExerciseId::new("ex-1-1"), 1, 2).await;
    progress.complete_exercise(ExerciseId::new("ex-1-2"), 0, 2).await;
    assert!(progress.is_unit_unlocked(UnitId::new(2)));
    assert!(!progress.is_unit_unlocked(UnitId::new(3)));

    for id in ["4-1", "4.2", "4-3"] {
        progress.complete_lesson(LessonId::new(id)).await;
    }
    assert_eq!(progress.unit_progress(UnitId::new(4)).lessons, 3);
    assert!(progress.is_unit_unlocked(UnitId::new(5)));
}

#[tokio::test]
async fn reset_restores_defaults_and_erases_storage() {
    let repo = InMemoryRepository::new();
    let progress = ProgressService::load(clock_on_day(0), Arc::new(repo.clone())).await;
    progress.complete_lesson(LessonId::new("1-1")).await;
    assert!(repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap().is_some());

    progress.reset().await;

    assert_eq!(progress.snapshot(), Progress::default());
    assert_eq!(repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap(), None);
    let reloaded = ProgressService::load(clock_on_day(0), Arc::new(repo)).await;
    assert_eq!(reloaded.snapshot(), Progress::default());
}

#[tokio::test]
async fn corrupt_blob_loads_defaults() {
    let repo = InMemoryRepository::new();
    repo.put_blob(PROGRESS_STORAGE_KEY, "{\"xp\": 5").await.unwrap();

    let progress = ProgressService::load(clock_on_day(0), Arc::new(repo)).await;
    assert_eq!(progress.snapshot(), Progress::default());
}

#[tokio::test]
async fn old_blob_is_overlaid_on_defaults() {
    let repo = InMemoryRepository::new();
    repo.put_blob(
        PROGRESS_STORAGE_KEY,
        r#"{"xp": 30, "streak": 2, "lastActivityDate": "2023-11-13", "completedLessons": ["1-1"]}"#,
    )
    .await
    .unwrap();

    let progress = ProgressService::load(clock_on_day(0), Arc::new(repo)).await;
    let snapshot = progress.snapshot();
    assert_eq!(snapshot.xp(), 30);
    assert!(snapshot.completed_exercises().is_empty());
    assert!(snapshot.unit_scores().is_empty());

    // 2023-11-13 is the day before the fixed clock, so the streak extends.
    progress.complete_lesson(LessonId::new("1-2")).await;
    assert_eq!(progress.snapshot().streak(), 3);
}

#[tokio::test]
async fn storage_failures_degrade_silently() {
    let progress = ProgressService::load(clock_on_day(0), Arc::new(BrokenRepository)).await;
    assert_eq!(progress.snapshot(), Progress::default());

    assert!(progress.complete_lesson(LessonId::new("1-1")).await);
    assert_eq!(progress.snapshot().xp(), LESSON_XP);

    progress.reset().await;
    assert_eq!(progress.snapshot(), Progress::default());
}

#[tokio::test(start_paused = true)]
async fn overlapping_mutations_save_the_latest_record() {
    let repo = InMemoryRepository::new();
    let progress =
        ProgressService::load(clock_on_day(0), Arc::new(StallingRepository::new(repo.clone())))
            .await;

    let (first, second) = tokio::join!(
        progress.complete_lesson(LessonId::new("1-1")),
        progress.complete_lesson(LessonId::new("1-2")),
    );
    assert!(first && second);

    let raw = repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap().unwrap();
    let stored = Progress::from_stored_json(&raw).unwrap();
    assert_eq!(stored.completed_lessons().len(), 2);
    assert_eq!(stored, progress.snapshot());
}

#[tokio::test(start_paused = true)]
async fn reset_is_not_undone_by_a_pending_save() {
    let repo = InMemoryRepository::new();
    let progress =
        ProgressService::load(clock_on_day(0), Arc::new(StallingRepository::new(repo.clone())))
            .await;

    let (completed, ()) = tokio::join!(
        progress.complete_lesson(LessonId::new("1-1")),
        progress.reset(),
    );
    assert!(completed);

    assert_eq!(progress.snapshot(), Progress::default());
    assert_eq!(repo.get_blob(PROGRESS_STORAGE_KEY).await.unwrap(), None);
}
